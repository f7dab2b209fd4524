// src/numerics/types/matrix4.rs
// Fixed 4x4 transform buffer, the shape uniform uploads actually consume.

use core::ops::{Deref, DerefMut};

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::MatrixError;
use super::kind::ElementKind;
use super::matrix::DenseMatrix;
use super::traits::FloatingPoint;

/// A 4x4 column-major matrix restricted to floating-point element kinds.
///
/// Derefs to [`DenseMatrix`], so the full indexed get/set/fill operation
/// set applies; the float-only restriction is carried by the
/// [`FloatingPoint`] bound rather than a runtime check. Constructed as the
/// identity transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix4<T: FloatingPoint = f32> {
    inner: DenseMatrix<T>,
}

impl<T: FloatingPoint> Matrix4<T> {
    /// The 4x4 identity transform.
    pub fn new() -> Self {
        Self { inner: DenseMatrix::new(4, 4) }
    }

    /// Set the fourth column to the translation `(x, y, z)` with the
    /// homogeneous coordinate defaulted to one. Returns the matrix itself
    /// for chaining.
    pub fn set_position(&mut self, x: T, y: T, z: T) -> &mut Self {
        self.set_position_k(x, y, z, T::one())
    }

    /// Set the fourth column to `(x, y, z, k)` with an explicit homogeneous
    /// coordinate. Column 3 of a column-major 4x4 occupies flat offsets
    /// 12..=15.
    pub fn set_position_k(&mut self, x: T, y: T, z: T, k: T) -> &mut Self {
        let elements = self.inner.as_mut_slice();
        elements[12] = x;
        elements[13] = y;
        elements[14] = z;
        elements[15] = k;
        self
    }

    /// The 16 elements as a fixed array, column-major.
    pub fn to_array(&self) -> [T; 16] {
        let mut out = [T::zero(); 16];
        out.copy_from_slice(self.inner.as_slice());
        out
    }
}

impl<T: FloatingPoint> Default for Matrix4<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> Deref for Matrix4<T> {
    type Target = DenseMatrix<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: FloatingPoint> DerefMut for Matrix4<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// Wire shape is exactly the inner DenseMatrix; deserialization re-checks
// that the payload really is 4x4.
impl<T> Serialize for Matrix4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = DenseMatrix::<T>::deserialize(deserializer)?;
        if inner.rows() != 4 || inner.cols() != 4 {
            return Err(serde::de::Error::custom(format!(
                "expected a 4x4 matrix, payload is {}x{}",
                inner.rows(),
                inner.cols()
            )));
        }
        Ok(Matrix4 { inner })
    }
}

/// A 4x4 matrix whose precision was chosen from a runtime element-kind tag.
///
/// This is the entry point for callers that carry an [`ElementKind`] instead
/// of a concrete type parameter: the two floating-point kinds produce an
/// identity matrix of the matching precision, everything else is rejected
/// before any value is built.
#[derive(Clone, Debug, PartialEq)]
pub enum Matrix4Buffer {
    F32(Matrix4<f32>),
    F64(Matrix4<f64>),
}

impl Matrix4Buffer {
    /// Build an identity 4x4 buffer of the precision named by `kind`, or
    /// fail with UnsupportedElementKind for any non-float kind.
    pub fn with_kind(kind: ElementKind) -> Result<Self, MatrixError> {
        match kind {
            ElementKind::Float32 => Ok(Matrix4Buffer::F32(Matrix4::new())),
            ElementKind::Float64 => Ok(Matrix4Buffer::F64(Matrix4::new())),
            other => {
                warn!("rejecting 4x4 buffer construction with element kind {other}");
                Err(MatrixError::UnsupportedElementKind(other))
            }
        }
    }

    /// The element kind this buffer holds.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            Matrix4Buffer::F32(_) => ElementKind::Float32,
            Matrix4Buffer::F64(_) => ElementKind::Float64,
        }
    }

    pub fn as_f32(&self) -> Option<&Matrix4<f32>> {
        match self {
            Matrix4Buffer::F32(m) => Some(m),
            Matrix4Buffer::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<&Matrix4<f64>> {
        match self {
            Matrix4Buffer::F64(m) => Some(m),
            Matrix4Buffer::F32(_) => None,
        }
    }
}

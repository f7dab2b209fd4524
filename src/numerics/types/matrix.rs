// src/numerics/types/matrix.rs
// Column-major dense matrix buffer with template-able element precision.

use core::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::MatrixError;
use super::kind::ElementKind;
use super::traits::FloatingPoint;

/// A fixed-size, column-major numeric buffer with row/column indexed access.
///
/// Element (i, j) lives at flat offset `i + j * nrows`; the column-major
/// layout is a hard external contract — the flat buffer is handed unmodified
/// to uniform-upload calls that expect column-major data. A fresh matrix is
/// initialized to the generalized identity pattern: 1 where the row and
/// column index coincide, 0 everywhere else (for non-square shapes this is
/// not a true identity, just `a[i][i] == 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T: FloatingPoint = f32> {
    elements: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: FloatingPoint> DenseMatrix<T> {
    /// Construct an `nrows` x `ncols` matrix initialized to the identity
    /// pattern. Row and column counts are expected to be positive; a
    /// zero-dimension matrix is inert (every indexed access fails).
    pub fn new(nrows: usize, ncols: usize) -> Self {
        let mut matrix = Self {
            elements: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        };
        matrix.identity();
        matrix
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.ncols
    }

    /// Total element count, `rows * cols`.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element kind this buffer was declared with.
    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    /// Flat column-major offset of element (i, j), i.e. `i + j * nrows`.
    ///
    /// Every indexed access goes through this bounds check; out-of-range
    /// indices are rejected, never clamped or wrapped.
    pub fn idx(&self, i: usize, j: usize) -> Result<usize, MatrixError> {
        if i >= self.nrows || j >= self.ncols {
            return Err(MatrixError::OutOfRange {
                row: i,
                col: j,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(i + j * self.nrows)
    }

    /// Value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        let offset = self.idx(i, j)?;
        Ok(self.elements[offset])
    }

    /// Store `v` at row `i`, column `j`. Returns the matrix itself so calls
    /// can be chained with `?`.
    pub fn set(&mut self, i: usize, j: usize, v: T) -> Result<&mut Self, MatrixError> {
        let offset = self.idx(i, j)?;
        self.elements[offset] = v;
        Ok(self)
    }

    /// Reset to the identity pattern: 1 where `i == j`, 0 elsewhere,
    /// regardless of squareness. Idempotent.
    pub fn identity(&mut self) -> &mut Self {
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                self.elements[i + j * self.nrows] =
                    if i == j { T::one() } else { T::zero() };
            }
        }
        self
    }

    /// Set every element to `v`.
    pub fn fill_scalar(&mut self, v: T) -> &mut Self {
        self.elements.fill(v);
        self
    }

    /// Element-wise copy from `src`, which must already be in column-major
    /// order. A length mismatch is a hard failure and leaves the matrix
    /// untouched.
    pub fn fill_from_slice(&mut self, src: &[T]) -> Result<&mut Self, MatrixError> {
        if src.len() != self.elements.len() {
            warn!(
                "rejecting fill of {}x{} matrix: source has {} elements, storage holds {}",
                self.nrows,
                self.ncols,
                src.len(),
                self.elements.len()
            );
            return Err(MatrixError::LengthMismatch {
                expected: self.elements.len(),
                found: src.len(),
            });
        }
        self.elements.copy_from_slice(src);
        Ok(self)
    }

    /// The contiguous column-major buffer, in the exact order a uniform
    /// upload expects it.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

/// Row-major diagnostic rendering: one line per row, values tab-separated.
/// Debug aid only; values are still read through the column-major offset.
impl<T: FloatingPoint + fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", self.elements[i + j * self.nrows])?;
            }
            if i + 1 < self.nrows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

// Manual serde impls: the shape travels with the elements, and a payload
// whose element count disagrees with its declared shape is rejected at the
// deserialization boundary.
impl<T> Serialize for DenseMatrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.nrows, self.ncols, &self.elements).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for DenseMatrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (nrows, ncols, elements) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        if elements.len() != nrows * ncols {
            return Err(serde::de::Error::custom(format!(
                "matrix payload has {} elements, shape {}x{} needs {}",
                elements.len(),
                nrows,
                ncols,
                nrows * ncols
            )));
        }
        Ok(DenseMatrix { elements, nrows, ncols })
    }
}

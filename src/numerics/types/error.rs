// src/numerics/types/error.rs

use thiserror::Error;

use super::kind::ElementKind;

/// Errors reported by the matrix buffer types.
///
/// Every error is local to the call that produced it; there is no retry
/// path and no global error state. A failing operation leaves the matrix
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Row or column index outside the declared bounds. Indices are never
    /// clamped or wrapped.
    #[error("index ({row}, {col}) out of range for a {nrows}x{ncols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    /// Bulk fill source whose length differs from the storage length.
    #[error("fill source has {found} elements, storage holds {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// A runtime element-kind tag outside the supported floating-point set.
    #[error("unsupported element kind {0}, expected float32 or float64")]
    UnsupportedElementKind(ElementKind),
}

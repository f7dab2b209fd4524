//! columna - column-major matrix buffers for shader uniform data
//!
//! Fixed-layout numeric buffers (a generic dense matrix and its 4x4
//! specialization) whose flat element order matches what GPU uniform
//! uploads expect, plus the element-kind vocabulary the buffers are
//! declared with.

pub mod numerics;

pub use numerics::types::error::MatrixError;
pub use numerics::types::kind::ElementKind;
pub use numerics::types::matrix::DenseMatrix;
pub use numerics::types::matrix4::{Matrix4, Matrix4Buffer};
pub use numerics::types::traits::FloatingPoint;

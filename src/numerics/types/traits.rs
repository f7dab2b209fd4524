// src/numerics/types/traits.rs
// Closed FloatingPoint trait over the two supported element kinds.

use super::kind::ElementKind;

/// FloatingPoint is the closed set of element kinds a matrix buffer may be
/// declared with: single- or double-precision floating point, nothing else.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self.
/// `KIND` ties the Rust type back to the runtime [`ElementKind`] vocabulary
/// so a buffer can report the kind it was declared with.
pub trait FloatingPoint:
Copy + PartialOrd
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    const KIND: ElementKind;

    fn zero() -> Self;
    fn one() -> Self;
}

impl FloatingPoint for f32 {
    const KIND: ElementKind = ElementKind::Float32;

    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    const KIND: ElementKind = ElementKind::Float64;

    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

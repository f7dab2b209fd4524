// src/numerics/types/kind.rs
// Runtime element-kind identifiers for typed numeric buffers.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier for the numeric kind a buffer is declared with.
///
/// The discriminants form a stable id table; graphics-side code that keys
/// buffer uploads on a numeric type id can rely on them not changing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ElementKind {
    Int8    = 0x0001,
    UInt8   = 0x0002,
    Int16   = 0x0003,
    UInt16  = 0x0004,
    Int32   = 0x0005,
    UInt32  = 0x0006,
    Int64   = 0x0007,
    UInt64  = 0x0008,
    Float32 = 0x0009,
    Float64 = 0x000A,
}

impl ElementKind {
    /// Conventional aliases for the C-ish names.
    pub const CHAR: ElementKind = ElementKind::Int8;
    pub const FLOAT: ElementKind = ElementKind::Float32;
    pub const DOUBLE: ElementKind = ElementKind::Float64;

    /// Stable numeric id of this kind.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Whether this kind is one of the two floating-point precisions.
    pub fn is_floating_point(self) -> bool {
        matches!(self, ElementKind::Float32 | ElementKind::Float64)
    }

    /// Byte width of one element of this kind.
    pub fn size_of(self) -> usize {
        match self {
            ElementKind::Int8 | ElementKind::UInt8 => 1,
            ElementKind::Int16 | ElementKind::UInt16 => 2,
            ElementKind::Int32 | ElementKind::UInt32 | ElementKind::Float32 => 4,
            ElementKind::Int64 | ElementKind::UInt64 | ElementKind::Float64 => 8,
        }
    }

    /// Stable lowercase name, used in log lines and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Int8 => "int8",
            ElementKind::UInt8 => "uint8",
            ElementKind::Int16 => "int16",
            ElementKind::UInt16 => "uint16",
            ElementKind::Int32 => "int32",
            ElementKind::UInt32 => "uint32",
            ElementKind::Int64 => "int64",
            ElementKind::UInt64 => "uint64",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

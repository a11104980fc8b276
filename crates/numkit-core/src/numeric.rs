//! Element kinds and the numeric trait shared by every array helper
//!
//! This module provides the type foundation for working with arrays whose
//! element type is only known at runtime (the `dtype` of an array) as well as
//! the generic `Element` trait used by the statically typed entry points.
//!
//! # Design Philosophy
//!
//! - **Closed set of kinds**: `ElementKind` enumerates every supported element type
//! - **Explicit conversion**: values move between kinds through `from_f64`/`as_f64`
//!   or `NumericArray::cast`, never implicitly
//! - **Type safety**: each `Element` type knows its own `ElementKind`

use num_traits::Num;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, LowerExp};
use std::str::FromStr;

use crate::error::Error;

/// Runtime tag for the element type of an array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[default]
    #[serde(rename = "float32")]
    F32,
    #[serde(rename = "float64")]
    F64,
    #[serde(rename = "int8")]
    I8,
    #[serde(rename = "int16")]
    I16,
    #[serde(rename = "int32")]
    I32,
    #[serde(rename = "int64")]
    I64,
    #[serde(rename = "uint8")]
    U8,
    #[serde(rename = "uint16")]
    U16,
    #[serde(rename = "uint32")]
    U32,
    #[serde(rename = "uint64")]
    U64,
}

impl ElementKind {
    /// Every supported kind, floats first
    pub const ALL: [ElementKind; 10] = [
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
    ];

    /// Canonical name, e.g. `float32` or `uint8`
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::F32 => "float32",
            ElementKind::F64 => "float64",
            ElementKind::I8 => "int8",
            ElementKind::I16 => "int16",
            ElementKind::I32 => "int32",
            ElementKind::I64 => "int64",
            ElementKind::U8 => "uint8",
            ElementKind::U16 => "uint16",
            ElementKind::U32 => "uint32",
            ElementKind::U64 => "uint64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Floats count as signed
    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            ElementKind::U8 | ElementKind::U16 | ElementKind::U32 | ElementKind::U64
        )
    }

    /// Width of one element in bytes
    pub fn size_of(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::F32 | ElementKind::I32 | ElementKind::U32 => 4,
            ElementKind::F64 | ElementKind::I64 | ElementKind::U64 => 8,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "float32" | "f32" => ElementKind::F32,
            "float64" | "f64" => ElementKind::F64,
            "int8" | "i8" => ElementKind::I8,
            "int16" | "i16" => ElementKind::I16,
            "int32" | "i32" => ElementKind::I32,
            "int64" | "i64" => ElementKind::I64,
            "uint8" | "u8" => ElementKind::U8,
            "uint16" | "u16" => ElementKind::U16,
            "uint32" | "u32" => ElementKind::U32,
            "uint64" | "u64" => ElementKind::U64,
            other => {
                return Err(Error::InvalidParameter(format!(
                    "Unknown element kind '{other}'"
                )))
            }
        };
        Ok(kind)
    }
}

/// Base trait for the primitive types an array can hold
pub trait Element:
    Num + Copy + PartialOrd + Debug + Display + LowerExp + Send + Sync + 'static
{
    /// Runtime tag for this type
    const KIND: ElementKind;

    /// Convert from f64 with `as` semantics (truncating and saturating for integers)
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 (lossy for 64-bit integers beyond 2^53)
    fn as_f64(self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_float_element {
    ($ty:ty, $kind:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            fn from_f64(val: f64) -> Self {
                val as $ty
            }

            fn as_f64(self) -> f64 {
                self as f64
            }

            fn is_finite(&self) -> bool {
                <$ty>::is_finite(*self)
            }
        }
    };
}

macro_rules! impl_int_element {
    ($ty:ty, $kind:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            fn from_f64(val: f64) -> Self {
                val as $ty
            }

            fn as_f64(self) -> f64 {
                self as f64
            }

            fn is_finite(&self) -> bool {
                true // Integers are always finite
            }
        }
    };
}

impl_float_element!(f32, F32);
impl_float_element!(f64, F64);
impl_int_element!(i8, I8);
impl_int_element!(i16, I16);
impl_int_element!(i32, I32);
impl_int_element!(i64, I64);
impl_int_element!(u8, U8);
impl_int_element!(u16, U16);
impl_int_element!(u32, U32);
impl_int_element!(u64, U64);

//! Pad or truncate one-dimensional arrays to a fixed length
//!
//! Two entry points are provided:
//!
//! - [`pad1d`] / [`PaddingExt::pad_to`] for statically typed `ndarray` arrays
//! - [`pad_to_length`] / [`Padding`] for [`NumericArray`](numkit_core::NumericArray)
//!   values whose element kind is only known at runtime
//!
//! # Example
//!
//! ```rust
//! use numkit_core::{ElementKind, NumericArray};
//! use numkit_pad::pad_to_length;
//!
//! let input = NumericArray::from_vec(vec![1.0f64, 2.0]);
//! let padded = pad_to_length(5, Some(&input), 9.0, None).unwrap();
//!
//! assert_eq!(padded.kind(), ElementKind::F64);
//! assert_eq!(padded.to_f64_vec(), vec![1.0, 2.0, 9.0, 9.0, 9.0]);
//! ```

pub mod padding;

pub use padding::{pad1d, pad_to_length, resolve_kind, Padding, PaddingExt};

pub use numkit_core::Result;

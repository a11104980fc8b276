//! Core types for the numkit array helpers
//!
//! This crate provides the pieces every other numkit crate builds on:
//!
//! - [`Error`] and [`Result`]: the unified error type
//! - [`ElementKind`]: the closed set of supported element types
//! - [`Element`]: the trait implemented by those primitive types
//! - [`NumericArray`]: an `ndarray` array whose element kind is chosen at runtime
//!
//! # Example
//!
//! ```rust
//! use numkit_core::{ElementKind, NumericArray};
//!
//! let values = NumericArray::from_vec(vec![1.5f64, 2.5, 3.5]);
//! let ints = values.cast(ElementKind::I32);
//!
//! assert_eq!(ints.kind(), ElementKind::I32);
//! assert_eq!(ints.to_f64_vec(), vec![1.0, 2.0, 3.0]);
//! ```

pub mod array;
pub mod error;
pub mod numeric;

// Re-export core types
pub use array::{ArrayElement, NumericArray};
pub use error::{Error, Result};
pub use numeric::{Element, ElementKind};

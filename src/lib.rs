//! Small numeric-array helpers built on `ndarray`
//!
//! This crate re-exports the numkit workspace:
//!
//! - **Padding** ([`numkit_pad`]): conform a 1-D array to an exact length by
//!   truncating it or appending a fill value
//! - **Distributions** ([`numkit_histogram`]): count samples per fixed-width bucket
//! - **Print options** ([`numkit_display`]): process-wide display options with
//!   a guard that restores them when a scope ends
//! - **Core types** ([`numkit_core`]): element kinds, runtime-typed arrays and errors
//!
//! # Quick Start
//!
//! ```rust
//! use numkit::prelude::*;
//!
//! // Pad to a fixed length
//! let input = NumericArray::from_vec(vec![1.0f64, 2.0]);
//! let padded = pad_to_length(4, Some(&input), 9.0, None).unwrap();
//! assert_eq!(padded.to_f64_vec(), vec![1.0, 2.0, 9.0, 9.0]);
//!
//! // Count samples per bucket of width 1.0
//! let dist = build_distribution(&[0.0, 0.5, 1.5, 1.9], 1.0).unwrap();
//! assert_eq!(dist.counts(), &[2, 2]);
//!
//! // Temporarily change how arrays print
//! let text = with_print_options(&PrintOptionsOverride::new().precision(1), || {
//!     format_numeric_array(&padded).unwrap()
//! });
//! assert_eq!(text, "[1. 2. 9. 9.]");
//! ```

// Re-export all workspace crates
pub use numkit_display as display;
pub use numkit_histogram as histogram;
pub use numkit_pad as pad;

pub use numkit_core::{Element, ElementKind, Error, NumericArray, Result};
pub use numkit_display::{
    format_array, format_numeric_array, get_print_options, set_print_options,
    with_print_options, PrintOptions, PrintOptionsGuard, PrintOptionsOverride,
};
pub use numkit_histogram::{build_distribution, Distribution, DistributionBuilder, NegativeBuckets};
pub use numkit_pad::{pad1d, pad_to_length, Padding};

/// Prelude module for convenient imports
pub mod prelude {
    pub use numkit_core::{Element, ElementKind, Error, NumericArray, Result};
    pub use numkit_display::{
        format_array, format_numeric_array, get_print_options, with_print_options,
        ArrayDisplay, PrintOptions, PrintOptionsGuard, PrintOptionsOverride, Sign,
    };
    pub use numkit_histogram::{
        build_distribution, Distribution, DistributionBuilder, NegativeBuckets, ToDistribution,
    };
    pub use numkit_pad::{pad1d, pad_to_length, Padding, PaddingExt};
}

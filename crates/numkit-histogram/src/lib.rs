//! Fixed-width count-per-bucket distributions
//!
//! Samples are assigned to bucket `floor(value / step)`; bucket `i` covers
//! the half-open range `[i * step, (i + 1) * step)`. The distribution has
//! exactly as many buckets as needed to hold the largest bucket index.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use numkit_histogram::build_distribution;
//!
//! let dist = build_distribution(&[0.0, 0.5, 1.5, 1.9], 1.0).unwrap();
//! assert_eq!(dist.counts(), &[2, 2]);
//!
//! for bucket in dist.iter() {
//!     println!("{bucket}");
//! }
//! ```
//!
//! ## Handling Negative Samples
//!
//! Negative samples fall into negative buckets, which a distribution cannot
//! hold. They are rejected unless the builder is told to clamp them.
//!
//! ```rust
//! use numkit_histogram::{build_distribution, DistributionBuilder, NegativeBuckets};
//!
//! assert!(build_distribution(&[-0.5, 1.0], 1.0).is_err());
//!
//! let dist = DistributionBuilder::new(1.0)
//!     .negative_buckets(NegativeBuckets::Clamp)
//!     .build(&[-0.5, 1.0])
//!     .unwrap();
//! assert_eq!(dist.counts(), &[1, 1]);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{DistributionBuilder, NegativeBuckets, MAX_BUCKET_INDEX};
pub use traits::ToDistribution;
pub use types::{Bucket, Distribution};

/// Count samples per fixed-width bucket of width `step`
///
/// Fails on empty input, a non-positive or non-finite `step`, non-finite
/// samples and samples below zero.
pub fn build_distribution<T: numkit_core::Element>(values: &[T], step: f64) -> Result<Distribution> {
    DistributionBuilder::new(step).build(values)
}

pub use numkit_core::Result;

//! Core types for distribution representation

use ndarray::{Array1, ArrayView1};
use std::fmt;

/// A single bucket of a distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// Position of the bucket in the distribution
    pub index: usize,
    /// Left edge of the bucket (inclusive)
    pub left: f64,
    /// Right edge of the bucket (exclusive)
    pub right: f64,
    /// Number of samples in this bucket
    pub count: i32,
}

impl Bucket {
    /// Get the center point of the bucket
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bucket
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// Per-bucket sample counts for fixed-width buckets starting at zero
///
/// Bucket `i` covers `[i * step, (i + 1) * step)`. The number of buckets is
/// exactly one more than the largest occupied bucket index, so the last
/// bucket is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    counts: Vec<i32>,
    step: f64,
}

impl Distribution {
    /// Create a distribution from raw counts
    pub fn new(counts: Vec<i32>, step: f64) -> Self {
        Self { counts, step }
    }

    /// Get the counts, one per bucket
    pub fn counts(&self) -> &[i32] {
        &self.counts
    }

    /// Get the counts as an array view
    pub fn counts_view(&self) -> ArrayView1<'_, i32> {
        ArrayView1::from(self.counts.as_slice())
    }

    /// Consume the distribution, returning the counts as an array
    pub fn into_counts(self) -> Array1<i32> {
        Array1::from_vec(self.counts)
    }

    /// Get the bucket width
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Get the number of buckets
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of samples across all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c.max(0) as u64).sum()
    }

    /// Get the maximum count in any bucket
    pub fn max_count(&self) -> i32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Index of the fullest bucket (the first one on ties)
    pub fn mode(&self) -> Option<usize> {
        let max = self.max_count();
        self.counts.iter().position(|&c| c == max)
    }

    /// Half-open value range `[left, right)` covered by bucket `index`
    pub fn bucket_range(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.counts.len() {
            return None;
        }
        let left = index as f64 * self.step;
        Some((left, left + self.step))
    }

    /// Get a bucket by index
    pub fn bucket(&self, index: usize) -> Option<Bucket> {
        let (left, right) = self.bucket_range(index)?;
        Some(Bucket {
            index,
            left,
            right,
            count: self.counts[index],
        })
    }

    /// Find which bucket a value falls into, if it is covered
    pub fn bucket_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        let bucket = (value / self.step).floor();
        if bucket < 0.0 || bucket >= self.counts.len() as f64 {
            return None;
        }
        Some(bucket as usize)
    }

    /// Iterate over all buckets in index order
    pub fn iter(&self) -> impl Iterator<Item = Bucket> + '_ {
        (0..self.counts.len()).filter_map(move |i| self.bucket(i))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distribution({} buckets, step={}, total={})",
            self.len(),
            self.step,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bucket() {
        let bucket = Bucket {
            index: 1,
            left: 0.5,
            right: 1.0,
            count: 3,
        };
        assert_eq!(bucket.center(), 0.75);
        assert_eq!(bucket.width(), 0.5);
        assert!(bucket.contains(0.5));
        assert!(!bucket.contains(1.0)); // Right edge is exclusive
        assert_eq!(bucket.to_string(), "[0.500, 1.000): count=3");
    }

    #[test]
    fn test_distribution() {
        let dist = Distribution::new(vec![2, 5, 0, 3], 0.5);

        assert_eq!(dist.len(), 4);
        assert_eq!(dist.total(), 10);
        assert_eq!(dist.max_count(), 5);
        assert_eq!(dist.mode(), Some(1));
        assert_eq!(dist.bucket_range(2), Some((1.0, 1.5)));
        assert_eq!(dist.bucket_range(4), None);

        assert_eq!(dist.bucket_of(0.0), Some(0));
        assert_eq!(dist.bucket_of(0.74), Some(1));
        assert_eq!(dist.bucket_of(1.99), Some(3));
        assert_eq!(dist.bucket_of(2.0), None);
        assert_eq!(dist.bucket_of(-0.1), None);
        assert_eq!(dist.bucket_of(f64::NAN), None);

        let buckets: Vec<Bucket> = dist.iter().collect();
        assert_eq!(buckets.len(), 4);
        assert_relative_eq!(buckets[3].left, 1.5);
        assert_relative_eq!(buckets[3].right, 2.0);
        assert_eq!(buckets[3].count, 3);

        assert_eq!(dist.counts_view().sum(), 10);
        assert_eq!(dist.to_string(), "Distribution(4 buckets, step=0.5, total=10)");
        assert_eq!(dist.into_counts().to_vec(), vec![2, 5, 0, 3]);
    }

    #[test]
    fn test_mode_prefers_first_on_ties() {
        let dist = Distribution::new(vec![1, 4, 4], 1.0);
        assert_eq!(dist.mode(), Some(1));
        assert_eq!(Distribution::new(vec![], 1.0).mode(), None);
    }
}

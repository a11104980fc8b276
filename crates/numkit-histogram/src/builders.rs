//! Fixed-width distribution construction

use crate::types::Distribution;
use ndarray::{ArrayBase, Data, Ix1};
use numkit_core::{dispatch_array, Element, Error, NumericArray, Result};
use tracing::{debug, instrument};

/// Largest bucket index a distribution can hold
pub const MAX_BUCKET_INDEX: usize = i32::MAX as usize;

/// What to do with samples whose bucket index is negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegativeBuckets {
    /// Fail with [`Error::InvalidInput`] naming the first offending sample
    #[default]
    Reject,
    /// Count the sample in bucket 0
    Clamp,
}

/// Fixed-width distribution builder
///
/// Assigns each sample to bucket `floor(value / step)` and counts samples
/// per bucket. The resulting distribution has `max_bucket + 1` buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionBuilder {
    step: f64,
    negative_buckets: NegativeBuckets,
}

impl DistributionBuilder {
    /// Create a new builder with the given bucket width
    ///
    /// The width is validated when building.
    pub fn new(step: f64) -> Self {
        Self {
            step,
            negative_buckets: NegativeBuckets::default(),
        }
    }

    /// Choose how samples below zero are handled
    pub fn negative_buckets(mut self, policy: NegativeBuckets) -> Self {
        self.negative_buckets = policy;
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Build a distribution from a slice of samples
    #[instrument(level = "debug", skip_all, fields(step = self.step, samples = values.len()))]
    pub fn build<T: Element>(&self, values: &[T]) -> Result<Distribution> {
        self.build_from(values.iter().map(|&v| v.as_f64()))
    }

    /// Build a distribution from a one-dimensional array or view
    pub fn build_view<T, S>(&self, values: &ArrayBase<S, Ix1>) -> Result<Distribution>
    where
        T: Element,
        S: Data<Elem = T>,
    {
        self.build_from(values.iter().map(|&v| v.as_f64()))
    }

    /// Build a distribution from a one-dimensional array of any element kind
    pub fn build_array(&self, values: &NumericArray) -> Result<Distribution> {
        if values.ndim() != 1 {
            return Err(Error::dimension_mismatch(1, values.ndim()));
        }
        dispatch_array!(values, a => self.build_from(a.iter().map(|&v| v.as_f64())))
    }

    fn build_from<I>(&self, values: I) -> Result<Distribution>
    where
        I: Iterator<Item = f64>,
    {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::invalid_step(self.step));
        }

        let mut indices = Vec::with_capacity(values.size_hint().0);
        for value in values {
            indices.push(self.bucket_index(value)?);
        }

        let Some(&max_index) = indices.iter().max() else {
            return Err(Error::empty_input());
        };

        let mut counts = vec![0i32; max_index + 1];
        for index in indices {
            counts[index] += 1;
        }

        debug!(buckets = counts.len(), step = self.step, "built distribution");
        Ok(Distribution::new(counts, self.step))
    }

    fn bucket_index(&self, value: f64) -> Result<usize> {
        if !value.is_finite() {
            return Err(Error::non_finite("distribution samples"));
        }

        let bucket = (value / self.step).floor();
        if bucket < 0.0 {
            return match self.negative_buckets {
                NegativeBuckets::Reject => Err(Error::InvalidInput(format!(
                    "Sample {value} falls into negative bucket {bucket}"
                ))),
                NegativeBuckets::Clamp => Ok(0),
            };
        }
        if bucket > MAX_BUCKET_INDEX as f64 {
            return Err(Error::InvalidInput(format!(
                "Sample {value} falls into bucket {bucket}, beyond the largest supported index {MAX_BUCKET_INDEX}"
            )));
        }
        Ok(bucket as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_basic_buckets() {
        let dist = DistributionBuilder::new(1.0)
            .build(&[0.0, 0.5, 1.5, 1.9])
            .unwrap();
        assert_eq!(dist.counts(), &[2, 2]);
    }

    #[test]
    fn test_gaps_are_zero_filled() {
        let dist = DistributionBuilder::new(0.5).build(&[0.1, 2.2]).unwrap();
        assert_eq!(dist.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(dist.len(), 5);
    }

    #[test]
    fn test_duplicates_accumulate() {
        let dist = DistributionBuilder::new(2.0)
            .build(&[3.0, 3.0, 3.0, 2.5])
            .unwrap();
        assert_eq!(dist.counts(), &[0, 4]);
    }

    #[test]
    fn test_bucket_edges_are_half_open() {
        let dist = DistributionBuilder::new(0.25).build(&[0.25, 0.5]).unwrap();
        assert_eq!(dist.counts(), &[0, 1, 1]);
    }

    #[test]
    fn test_integer_samples() {
        let dist = DistributionBuilder::new(10.0)
            .build(&[0u16, 9, 10, 35])
            .unwrap();
        assert_eq!(dist.counts(), &[2, 1, 0, 1]);
    }

    #[test]
    fn test_empty_input_fails() {
        let err = DistributionBuilder::new(1.0).build::<f64>(&[]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 1, actual: 0 }));
    }

    #[test]
    fn test_invalid_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = DistributionBuilder::new(step).build(&[1.0]).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)), "step {step}");
        }
    }

    #[test]
    fn test_non_finite_samples_fail() {
        let err = DistributionBuilder::new(1.0)
            .build(&[1.0, f64::NAN])
            .unwrap_err();
        assert!(matches!(err, Error::Computation(_)));

        let err = DistributionBuilder::new(1.0)
            .build(&[f32::INFINITY])
            .unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_negative_samples_rejected_by_default() {
        // floor(-0.5) is -1, not 0
        let err = DistributionBuilder::new(1.0)
            .build(&[1.0, -0.5])
            .unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("-0.5")),
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_negative_samples_clamped() {
        let dist = DistributionBuilder::new(1.0)
            .negative_buckets(NegativeBuckets::Clamp)
            .build(&[-3.0, -0.5, 0.2, 1.1])
            .unwrap();
        assert_eq!(dist.counts(), &[3, 1]);

        let dist = DistributionBuilder::new(1.0)
            .negative_buckets(NegativeBuckets::Clamp)
            .build(&[-7i32])
            .unwrap();
        assert_eq!(dist.counts(), &[1]);
    }

    #[test]
    fn test_huge_bucket_index_rejected() {
        let err = DistributionBuilder::new(1e-300)
            .build(&[1.0])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_build_view_and_array() {
        let values = array![0.0f32, 0.5, 1.5, 1.9];
        let builder = DistributionBuilder::new(1.0);

        assert_eq!(builder.build_view(&values).unwrap().counts(), &[2, 2]);
        assert_eq!(builder.build_view(&values.view()).unwrap().counts(), &[2, 2]);

        let dynamic = NumericArray::from(values);
        assert_eq!(builder.build_array(&dynamic).unwrap().counts(), &[2, 2]);

        let matrix = NumericArray::from(Array2::<f64>::ones((2, 2)).into_dyn());
        assert!(matches!(
            builder.build_array(&matrix),
            Err(Error::Shape { expected: 1, actual: 2 })
        ));
    }
}

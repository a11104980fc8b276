//! Extension trait for building distributions from sample containers

use crate::builders::DistributionBuilder;
use crate::types::Distribution;
use ndarray::{ArrayBase, Data, Ix1};
use numkit_core::{Element, NumericArray, Result};

/// Containers of samples that can be turned into a fixed-width distribution
pub trait ToDistribution {
    /// Count samples per bucket of width `step`
    ///
    /// Uses the default [`DistributionBuilder`] settings; build one explicitly
    /// to change how negative samples are handled.
    fn to_distribution(&self, step: f64) -> Result<Distribution>;
}

impl<T: Element> ToDistribution for [T] {
    fn to_distribution(&self, step: f64) -> Result<Distribution> {
        DistributionBuilder::new(step).build(self)
    }
}

impl<T, S> ToDistribution for ArrayBase<S, Ix1>
where
    T: Element,
    S: Data<Elem = T>,
{
    fn to_distribution(&self, step: f64) -> Result<Distribution> {
        DistributionBuilder::new(step).build_view(self)
    }
}

impl ToDistribution for NumericArray {
    fn to_distribution(&self, step: f64) -> Result<Distribution> {
        DistributionBuilder::new(step).build_array(self)
    }
}

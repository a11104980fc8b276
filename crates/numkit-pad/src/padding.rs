//! Fixed-length padding and truncation of one-dimensional arrays

use ndarray::{s, Array1, ArrayBase, ArrayD, Data, Ix1};
use numkit_core::{dispatch_array, ArrayElement, Element, ElementKind, Error, NumericArray, Result};
use std::borrow::Cow;
use tracing::trace;

/// Pick the element kind of a padded array
///
/// An explicit kind wins, then the kind of the input, then `float32`.
pub fn resolve_kind(element_type: Option<ElementKind>, input: Option<&NumericArray>) -> ElementKind {
    element_type
        .or_else(|| input.map(NumericArray::kind))
        .unwrap_or_default()
}

/// Truncate or extend `input` to exactly `n` elements
///
/// Keeps the first `n` elements when the input is long enough, otherwise
/// appends copies of `fill` until the length is `n`. The input is not modified.
///
/// # Examples
///
/// ```rust
/// use ndarray::array;
/// use numkit_pad::pad1d;
///
/// assert_eq!(pad1d(2, &array![1, 2, 3], 0), array![1, 2]);
/// assert_eq!(pad1d(5, &array![1, 2], 9), array![1, 2, 9, 9, 9]);
/// ```
pub fn pad1d<T, S>(n: usize, input: &ArrayBase<S, Ix1>, fill: T) -> Array1<T>
where
    T: Clone,
    S: Data<Elem = T>,
{
    if input.len() >= n {
        return input.slice(s![..n]).to_owned();
    }

    let mut padded = Array1::from_elem(n, fill);
    padded.slice_mut(s![..input.len()]).assign(input);
    padded
}

/// Extension trait adding fixed-length padding to one-dimensional arrays
pub trait PaddingExt<T> {
    /// See [`pad1d`]
    fn pad_to(&self, n: usize, fill: T) -> Array1<T>;
}

impl<T, S> PaddingExt<T> for ArrayBase<S, Ix1>
where
    T: Clone,
    S: Data<Elem = T>,
{
    fn pad_to(&self, n: usize, fill: T) -> Array1<T> {
        pad1d(n, self, fill)
    }
}

/// Builder for padding arrays whose element kind is only known at runtime
///
/// Defaults to a fill value of `0` and no explicit element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    len: usize,
    fill_value: f64,
    element_type: Option<ElementKind>,
}

impl Padding {
    /// Create a padding builder targeting `len` elements
    pub fn new(len: usize) -> Self {
        Self {
            len,
            fill_value: 0.0,
            element_type: None,
        }
    }

    /// Value used for positions past the end of the input
    pub fn fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }

    /// Force the output element kind, casting the input if needed
    pub fn element_type(mut self, kind: ElementKind) -> Self {
        self.element_type = Some(kind);
        self
    }

    pub fn target_len(&self) -> usize {
        self.len
    }

    /// Pad or truncate `input`, or produce zeros when there is no input
    pub fn apply(&self, input: Option<&NumericArray>) -> Result<NumericArray> {
        let kind = resolve_kind(self.element_type, input);

        let Some(input) = input else {
            trace!(len = self.len, %kind, "padding without input, returning zeros");
            return Ok(NumericArray::zeros(kind, self.len));
        };

        if input.ndim() != 1 {
            return Err(Error::dimension_mismatch(1, input.ndim()));
        }

        let source = if input.kind() == kind {
            Cow::Borrowed(input)
        } else {
            trace!(from = %input.kind(), to = %kind, "casting input before padding");
            Cow::Owned(input.cast(kind))
        };

        trace!(len = self.len, input_len = source.len(), %kind, "padding array");
        dispatch_array!(source.as_ref(), a => pad_dyn(self.len, a, self.fill_value))
    }
}

fn pad_dyn<T: ArrayElement>(n: usize, input: &ArrayD<T>, fill_value: f64) -> Result<NumericArray> {
    let view = input
        .view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| Error::dimension_mismatch(1, input.ndim()))?;
    Ok(NumericArray::from(pad1d(n, &view, <T as Element>::from_f64(fill_value))))
}

/// Conform `input` to exactly `n` elements
///
/// The element kind is `element_type` if given, else the kind of `input`,
/// else `float32`. Without an input the result is `n` zeros. Inputs of a
/// different kind are cast first; inputs with more than one dimension are
/// rejected with [`Error::Shape`].
pub fn pad_to_length(
    n: usize,
    input: Option<&NumericArray>,
    fill_value: f64,
    element_type: Option<ElementKind>,
) -> Result<NumericArray> {
    let mut padding = Padding::new(n).fill_value(fill_value);
    if let Some(kind) = element_type {
        padding = padding.element_type(kind);
    }
    padding.apply(input)
}

//! Arrays whose element kind is chosen at runtime
//!
//! `NumericArray` wraps an `ndarray::ArrayD` for each supported element type.
//! Dimensionality is kept dynamic so callers can hand over arrays of any shape
//! and operations that need one dimension can reject the rest with a proper
//! error instead of a type mismatch.

use ndarray::{Array1, ArrayD, ArrayView1, Ix1};
use num_traits::AsPrimitive;

use crate::error::{Error, Result};
use crate::numeric::{Element, ElementKind};

/// Element types that can live inside a `NumericArray`
///
/// Bundles the numeric conversion into every other kind together with the
/// wrapping and unwrapping of the matching enum variant.
pub trait ArrayElement:
    Element
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
    + AsPrimitive<u64>
{
    /// Wrap an owned array in the matching variant
    fn wrap(array: ArrayD<Self>) -> NumericArray;

    /// Borrow the inner array if the variant matches
    fn peek(array: &NumericArray) -> Option<&ArrayD<Self>>;

    /// Take the inner array if the variant matches
    fn take(array: NumericArray) -> Option<ArrayD<Self>>;
}

/// Dense array with a runtime element kind
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I8(ArrayD<i8>),
    I16(ArrayD<i16>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
    U8(ArrayD<u8>),
    U16(ArrayD<u16>),
    U32(ArrayD<u32>),
    U64(ArrayD<u64>),
}

/// Run `$body` with `$arr` bound to the inner array, whatever its element type
#[macro_export]
macro_rules! dispatch_array {
    ($value:expr, $arr:ident => $body:expr) => {
        match $value {
            $crate::NumericArray::F32($arr) => $body,
            $crate::NumericArray::F64($arr) => $body,
            $crate::NumericArray::I8($arr) => $body,
            $crate::NumericArray::I16($arr) => $body,
            $crate::NumericArray::I32($arr) => $body,
            $crate::NumericArray::I64($arr) => $body,
            $crate::NumericArray::U8($arr) => $body,
            $crate::NumericArray::U16($arr) => $body,
            $crate::NumericArray::U32($arr) => $body,
            $crate::NumericArray::U64($arr) => $body,
        }
    };
}

macro_rules! impl_array_element {
    ($ty:ty, $variant:ident) => {
        impl ArrayElement for $ty {
            fn wrap(array: ArrayD<Self>) -> NumericArray {
                NumericArray::$variant(array)
            }

            fn peek(array: &NumericArray) -> Option<&ArrayD<Self>> {
                match array {
                    NumericArray::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn take(array: NumericArray) -> Option<ArrayD<Self>> {
                match array {
                    NumericArray::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

impl_array_element!(f32, F32);
impl_array_element!(f64, F64);
impl_array_element!(i8, I8);
impl_array_element!(i16, I16);
impl_array_element!(i32, I32);
impl_array_element!(i64, I64);
impl_array_element!(u8, U8);
impl_array_element!(u16, U16);
impl_array_element!(u32, U32);
impl_array_element!(u64, U64);

fn cast_into<T: ArrayElement>(array: &ArrayD<T>, kind: ElementKind) -> NumericArray {
    match kind {
        ElementKind::F32 => NumericArray::F32(array.mapv(AsPrimitive::<f32>::as_)),
        ElementKind::F64 => NumericArray::F64(array.mapv(AsPrimitive::<f64>::as_)),
        ElementKind::I8 => NumericArray::I8(array.mapv(AsPrimitive::<i8>::as_)),
        ElementKind::I16 => NumericArray::I16(array.mapv(AsPrimitive::<i16>::as_)),
        ElementKind::I32 => NumericArray::I32(array.mapv(AsPrimitive::<i32>::as_)),
        ElementKind::I64 => NumericArray::I64(array.mapv(AsPrimitive::<i64>::as_)),
        ElementKind::U8 => NumericArray::U8(array.mapv(AsPrimitive::<u8>::as_)),
        ElementKind::U16 => NumericArray::U16(array.mapv(AsPrimitive::<u16>::as_)),
        ElementKind::U32 => NumericArray::U32(array.mapv(AsPrimitive::<u32>::as_)),
        ElementKind::U64 => NumericArray::U64(array.mapv(AsPrimitive::<u64>::as_)),
    }
}

fn full_of<T: ArrayElement>(n: usize, value: f64) -> NumericArray {
    T::wrap(Array1::from_elem(n, T::from_f64(value)).into_dyn())
}

impl NumericArray {
    /// One-dimensional array of `n` zeros
    pub fn zeros(kind: ElementKind, n: usize) -> Self {
        Self::full(kind, n, 0.0)
    }

    /// One-dimensional array of `n` copies of `value`, converted to `kind`
    pub fn full(kind: ElementKind, n: usize, value: f64) -> Self {
        match kind {
            ElementKind::F32 => full_of::<f32>(n, value),
            ElementKind::F64 => full_of::<f64>(n, value),
            ElementKind::I8 => full_of::<i8>(n, value),
            ElementKind::I16 => full_of::<i16>(n, value),
            ElementKind::I32 => full_of::<i32>(n, value),
            ElementKind::I64 => full_of::<i64>(n, value),
            ElementKind::U8 => full_of::<u8>(n, value),
            ElementKind::U16 => full_of::<u16>(n, value),
            ElementKind::U32 => full_of::<u32>(n, value),
            ElementKind::U64 => full_of::<u64>(n, value),
        }
    }

    /// One-dimensional array from a vector
    pub fn from_vec<T: ArrayElement>(values: Vec<T>) -> Self {
        T::wrap(Array1::from_vec(values).into_dyn())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            NumericArray::F32(_) => ElementKind::F32,
            NumericArray::F64(_) => ElementKind::F64,
            NumericArray::I8(_) => ElementKind::I8,
            NumericArray::I16(_) => ElementKind::I16,
            NumericArray::I32(_) => ElementKind::I32,
            NumericArray::I64(_) => ElementKind::I64,
            NumericArray::U8(_) => ElementKind::U8,
            NumericArray::U16(_) => ElementKind::U16,
            NumericArray::U32(_) => ElementKind::U32,
            NumericArray::U64(_) => ElementKind::U64,
        }
    }

    pub fn ndim(&self) -> usize {
        dispatch_array!(self, a => a.ndim())
    }

    pub fn shape(&self) -> &[usize] {
        dispatch_array!(self, a => a.shape())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        dispatch_array!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert every element to `kind` with `as` semantics
    ///
    /// Returns a clone when the kind already matches.
    pub fn cast(&self, kind: ElementKind) -> Self {
        if self.kind() == kind {
            return self.clone();
        }
        dispatch_array!(self, a => cast_into(a, kind))
    }

    /// Borrow the inner array as `T`, if that is its element type
    pub fn as_array<T: ArrayElement>(&self) -> Option<&ArrayD<T>> {
        T::peek(self)
    }

    /// Unwrap the inner array as `T`, if that is its element type
    pub fn into_array<T: ArrayElement>(self) -> Option<ArrayD<T>> {
        T::take(self)
    }

    /// One-dimensional view of the inner array as `T`
    pub fn view1<T: ArrayElement>(&self) -> Result<ArrayView1<'_, T>> {
        let array = T::peek(self).ok_or_else(|| {
            Error::InvalidInput(format!(
                "Expected {} elements, array holds {}",
                T::KIND,
                self.kind()
            ))
        })?;
        array
            .view()
            .into_dimensionality::<Ix1>()
            .map_err(|_| Error::dimension_mismatch(1, array.ndim()))
    }

    /// All elements in logical order, converted to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        dispatch_array!(self, a => a.iter().map(|&x| Element::as_f64(x)).collect())
    }
}

impl<T: ArrayElement> From<ArrayD<T>> for NumericArray {
    fn from(array: ArrayD<T>) -> Self {
        T::wrap(array)
    }
}

impl<T: ArrayElement> From<Array1<T>> for NumericArray {
    fn from(array: Array1<T>) -> Self {
        T::wrap(array.into_dyn())
    }
}

impl<T: ArrayElement> From<Vec<T>> for NumericArray {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_constructors() {
        let zeros = NumericArray::zeros(ElementKind::F32, 3);
        assert_eq!(zeros.kind(), ElementKind::F32);
        assert_eq!(zeros.shape(), &[3]);
        assert_eq!(zeros.to_f64_vec(), vec![0.0, 0.0, 0.0]);

        let full = NumericArray::full(ElementKind::U8, 2, 7.9);
        assert_eq!(full.as_array::<u8>().unwrap().as_slice().unwrap(), &[7, 7]);

        let empty = NumericArray::zeros(ElementKind::I64, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.ndim(), 1);
    }

    #[test]
    fn test_cast_converts_values() {
        let floats = NumericArray::from(array![1.7f64, -2.2, 300.0]);

        let ints = floats.cast(ElementKind::I32);
        assert_eq!(ints.kind(), ElementKind::I32);
        assert_eq!(ints.to_f64_vec(), vec![1.0, -2.0, 300.0]);

        // Saturates like a Rust `as` cast
        let bytes = floats.cast(ElementKind::U8);
        assert_eq!(bytes.as_array::<u8>().unwrap().as_slice().unwrap(), &[1, 0, 255]);

        let singles = floats.cast(ElementKind::F32);
        let values = singles.to_f64_vec();
        assert_relative_eq!(values[0], 1.7, epsilon = 1e-6);
        assert_relative_eq!(values[1], -2.2, epsilon = 1e-6);
    }

    #[test]
    fn test_cast_to_same_kind_is_a_copy() {
        let original = NumericArray::from_vec(vec![1i16, 2, 3]);
        let copy = original.cast(ElementKind::I16);
        assert_eq!(copy, original);
    }

    #[test]
    fn test_typed_access() {
        let arr = NumericArray::from_vec(vec![1u32, 2, 3]);
        assert!(arr.as_array::<u32>().is_some());
        assert!(arr.as_array::<i32>().is_none());

        let view = arr.view1::<u32>().unwrap();
        assert_eq!(view.len(), 3);
        assert!(matches!(arr.view1::<f64>(), Err(Error::InvalidInput(_))));

        let owned = arr.into_array::<u32>().unwrap();
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_view1_rejects_matrices() {
        let matrix = NumericArray::from(Array2::<f64>::zeros((2, 2)).into_dyn());
        assert_eq!(matrix.ndim(), 2);
        assert_eq!(matrix.len(), 4);
        assert!(matches!(
            matrix.view1::<f64>(),
            Err(Error::Shape { expected: 1, actual: 2 })
        ));
    }
}

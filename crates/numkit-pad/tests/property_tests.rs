//! Property-based tests for fixed-length padding

use ndarray::Array1;
use numkit_core::{ElementKind, NumericArray};
use numkit_pad::{pad1d, pad_to_length};
use proptest::prelude::*;

fn kinds() -> impl Strategy<Value = ElementKind> {
    prop::sample::select(ElementKind::ALL.to_vec())
}

proptest! {
    // Property: the output always has exactly the requested length
    #[test]
    fn prop_output_length_is_target(
        n in 0usize..64,
        values in prop::collection::vec(-1000.0f64..1000.0, 0..64),
        fill in -10.0f64..10.0,
        kind in prop::option::of(kinds()),
    ) {
        let input = NumericArray::from_vec(values);
        let padded = pad_to_length(n, Some(&input), fill, kind).unwrap();
        prop_assert_eq!(padded.len(), n);
        prop_assert_eq!(padded.ndim(), 1);
        prop_assert_eq!(padded.kind(), kind.unwrap_or(ElementKind::F64));
    }

    // Property: the kept prefix matches the input and the tail is all fill
    #[test]
    fn prop_prefix_preserved_and_tail_filled(
        n in 0usize..64,
        values in prop::collection::vec(any::<i32>(), 0..64),
        fill in any::<i32>(),
    ) {
        let input = Array1::from_vec(values.clone());
        let padded = pad1d(n, &input, fill);

        let kept = values.len().min(n);
        prop_assert_eq!(&padded.as_slice().unwrap()[..kept], &values[..kept]);
        prop_assert!(padded.iter().skip(kept).all(|&v| v == fill));
    }

    // Property: without input the result is n zeros of the resolved kind
    #[test]
    fn prop_no_input_gives_zeros(n in 0usize..128, kind in prop::option::of(kinds())) {
        let padded = pad_to_length(n, None, 1.0, kind).unwrap();
        prop_assert_eq!(padded.kind(), kind.unwrap_or(ElementKind::F32));
        prop_assert!(padded.to_f64_vec().iter().all(|&v| v == 0.0));
        prop_assert_eq!(padded.len(), n);
    }
}

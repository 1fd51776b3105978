//! Property-based agreement of the uniqueness strategies

use bikesample_kem::bike::UniquenessEngine;
use proptest::prelude::*;

/// Lists with many repeated values and a valid `ctr`
fn list_and_ctr() -> impl Strategy<Value = (Vec<u32>, usize)> {
    (1usize..=96).prop_flat_map(|len| (prop::collection::vec(0u32..48, len), 0..len))
}

/// `ctr` at, just below and just above a multiple of the batch width
fn boundary_ctr() -> impl Strategy<Value = usize> {
    (prop::sample::select(vec![8usize, 16]), 1usize..5, prop::sample::select(vec![-1isize, 0, 1]))
        .prop_map(|(w, k, delta)| (w * k) as isize + delta)
        .prop_map(|c| c as usize)
}

fn scalar_reference(list: &[u32], ctr: usize) -> bool {
    !list[..ctr].contains(&list[ctr])
}

proptest! {
    #[test]
    fn strategies_agree_on_arbitrary_lists((list, ctr) in list_and_ctr()) {
        let expected = scalar_reference(&list, ctr);
        for engine in UniquenessEngine::ALL {
            prop_assert_eq!(engine.is_new(&list, ctr), expected, "{:?}", engine);
        }
    }

    #[test]
    fn strategies_agree_at_batch_boundaries(
        ctr in boundary_ctr(),
        values in prop::collection::vec(0u32..64, 96),
        duplicate_from in any::<prop::sample::Index>(),
        make_duplicate in any::<bool>(),
    ) {
        let mut list = values;
        if make_duplicate && ctr > 0 {
            list[ctr] = list[duplicate_from.index(ctr)];
        }
        let expected = scalar_reference(&list, ctr);
        for engine in UniquenessEngine::ALL {
            prop_assert_eq!(engine.is_new(&list, ctr), expected, "{:?} ctr={}", engine, ctr);
        }
    }

    #[test]
    fn zero_candidate_is_not_matched_by_padding(
        prior in prop::collection::vec(1u32..1000, 0..40),
        capacity_extra in 0usize..17,
    ) {
        // Non-zero prior entries, a zero candidate and zero-filled capacity
        let ctr = prior.len();
        let mut list = prior;
        list.push(0);
        list.extend(std::iter::repeat(0).take(capacity_extra));
        for engine in UniquenessEngine::ALL {
            prop_assert!(engine.is_new(&list, ctr), "{:?}", engine);
        }
    }
}

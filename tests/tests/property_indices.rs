//! Property-based tests for index-set generation

use bikesample_algorithms::ChaChaPrf;
use bikesample_common::SecretBuffer;
use bikesample_kem::bike::{generate_indices_mod_z, UniquenessEngine};
use bikesample_params::pqc::bike::{padded_index_capacity, BIKE_MAX_PRF_INVOCATIONS};
use proptest::prelude::*;

fn request() -> impl Strategy<Value = (usize, usize)> {
    (1usize..3000).prop_flat_map(|z| (Just(z), 0..=z.min(80)))
}

fn prf(seed: [u8; 32]) -> ChaChaPrf {
    ChaChaPrf::init(BIKE_MAX_PRF_INVOCATIONS, &SecretBuffer::new(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn index_sets_are_distinct_and_in_range(seed in any::<[u8; 32]>(), (z, n) in request()) {
        let mut out = vec![0u32; padded_index_capacity(n.max(1))];
        generate_indices_mod_z(&mut out, n, z, &mut prf(seed), UniquenessEngine::detect()).unwrap();

        let set = &out[..n];
        for (i, &v) in set.iter().enumerate() {
            prop_assert!((v as usize) < z);
            prop_assert!(!set[..i].contains(&v));
        }
        prop_assert!(out[n..].iter().all(|&v| v == 0));
    }

    #[test]
    fn index_sets_do_not_depend_on_engine(seed in any::<[u8; 32]>(), (z, n) in request()) {
        let mut reference = vec![0u32; padded_index_capacity(n.max(1))];
        generate_indices_mod_z(&mut reference, n, z, &mut prf(seed), UniquenessEngine::Scalar).unwrap();

        for engine in UniquenessEngine::ALL {
            let mut out = vec![0u32; reference.len()];
            generate_indices_mod_z(&mut out, n, z, &mut prf(seed), engine).unwrap();
            prop_assert_eq!(&out, &reference);
        }
    }

    #[test]
    fn impossible_requests_fail_without_drawing(seed in any::<[u8; 32]>(), z in 1usize..64) {
        let mut out = vec![0u32; 128];
        let mut p = prf(seed);
        prop_assert!(generate_indices_mod_z(&mut out, z + 1, z, &mut p, UniquenessEngine::Scalar).is_err());
        prop_assert_eq!(p.invocations(), 0);
    }
}

//! End-to-end sampling scenarios

use bikesample_algorithms::ChaChaPrf;
use bikesample_api::Error as CoreError;
use bikesample_kem::bike::{
    generate_indices_mod_z, get_seeds, sample_error_vector, sample_sparse_support,
    sample_uniform_bitstring, BikeParams, Seed, UniquenessEngine,
};
use bikesample_kem::Error;
use bikesample_params::pqc::bike::BIKE_MAX_PRF_INVOCATIONS;
use bikesample_tests::fixtures::{FailingPrf, Toy587};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn zero_seed_indices(engine: UniquenessEngine) -> [u32; 16] {
    let seed = Seed::from_bytes([0u8; 32]);
    let mut prf = ChaChaPrf::init(BIKE_MAX_PRF_INVOCATIONS, seed.as_secret()).unwrap();
    let mut out = [0u32; 16];
    generate_indices_mod_z(&mut out, 5, 16, &mut prf, engine).unwrap();
    out
}

#[test]
fn zero_seed_five_of_sixteen() {
    let first = zero_seed_indices(UniquenessEngine::detect());
    let set = &first[..5];
    for (i, &v) in set.iter().enumerate() {
        assert!(v < 16);
        assert!(!set[..i].contains(&v));
    }

    // identical on re-run and under every strategy
    for engine in UniquenessEngine::ALL {
        assert_eq!(zero_seed_indices(engine), first);
    }
}

#[test]
fn toy_error_vector_weight_ten() {
    let seed = Seed::from_bytes([0x11; 32]);
    let e = sample_error_vector::<Toy587>(&seed).unwrap();
    assert_eq!(e.weight(), 10);
    assert!(e.e0().is_padding_clear());
    assert!(e.e1().is_padding_clear());
    assert_eq!(e.e0().as_bytes()[74..], [0u8; 54]);
    assert_eq!(e.e0().as_bytes()[73] & 0xF8, 0);
}

#[test]
fn keygen_style_run_is_reproducible() {
    fn run(rng_seed: u64) -> (Vec<u32>, Vec<u32>, Vec<u8>) {
        let seeds = get_seeds(&mut ChaChaRng::seed_from_u64(rng_seed)).unwrap();
        let mut prf = ChaChaPrf::init(BIKE_MAX_PRF_INVOCATIONS, seeds.first().as_secret()).unwrap();
        let h0 = sample_sparse_support::<Toy587, _>(&mut prf).unwrap();
        let h1 = sample_sparse_support::<Toy587, _>(&mut prf).unwrap();
        let sigma = sample_uniform_bitstring::<Toy587>(seeds.second(), true).unwrap();
        (
            h0.indices().to_vec(),
            h1.indices().to_vec(),
            sigma.as_bytes().to_vec(),
        )
    }

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));

    let (h0, h1, _) = run(42);
    assert_eq!(h0.len(), Toy587::D);
    assert_eq!(h1.len(), Toy587::D);
}

#[test]
fn failing_prf_aborts_without_output() {
    // enough for a handful of candidates, never for fifteen distinct ones
    let err = sample_sparse_support::<Toy587, _>(&mut FailingPrf::after(16)).unwrap_err();
    assert!(matches!(err, Error::Generation { .. }));

    let err = bikesample_kem::bike::sample_uniform_bitstring_with_prf::<Toy587, _>(
        &mut FailingPrf::after(10),
        true,
    )
    .unwrap_err();
    assert!(err.is_generation());
    assert!(matches!(
        CoreError::from(err),
        CoreError::RandomGenerationError { .. }
    ));
}

#[test]
fn small_prf_budget_rekeys_transparently() {
    use bikesample_kem::bike::{BikeSampler, SamplerConfig};

    let sampler =
        BikeSampler::<Toy587>::with_config(SamplerConfig::default().with_max_invocations(1));
    let seed = Seed::from_bytes([0x77; 32]);
    let e = sampler.error_vector(&seed).unwrap();
    assert_eq!(e.weight(), Toy587::T);
    assert!(e.is_padding_clear());
    assert_eq!(sampler.error_vector(&seed).unwrap(), e);
}

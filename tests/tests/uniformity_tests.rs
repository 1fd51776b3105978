//! Chi-square uniformity of the samplers

use bikesample_kem::bike::{sample_uniform_bitstring, Seed};
use bikesample_tests::fixtures::Toy587;
use bikesample_tests::suites::uniformity::UniformityTester;
use bikesample_tests::uniformity::UniformityConfig;

fn tester() -> UniformityTester {
    UniformityTester::new(UniformityConfig::default())
}

#[test]
fn rand_mod_len_is_uniform_for_small_bounds() {
    let tester = tester();
    for (i, len) in [2u32, 3, 10, 16, 17].into_iter().enumerate() {
        let counts = tester
            .rand_mod_len_histogram(&Seed::from_bytes([i as u8; 32]), len)
            .unwrap();
        let outcome = tester.assert_uniform(&counts).unwrap();
        assert_eq!(outcome.degrees_of_freedom, (len - 1) as f64);
    }
}

#[test]
fn rand_mod_len_is_uniform_just_above_power_of_two() {
    // 1025 keeps an 11-bit mask: almost half of all draws are rejected
    let tester = tester();
    let counts = tester
        .rand_mod_len_histogram(&Seed::from_bytes([0xA5; 32]), 1025)
        .unwrap();
    tester.assert_uniform(&counts).unwrap();
    assert!(counts.iter().all(|&c| c > 0));
}

#[test]
fn rand_mod_len_is_uniform_for_block_length() {
    let tester = tester();
    let counts = tester
        .rand_mod_len_histogram(&Seed::from_bytes([0x3C; 32]), 587)
        .unwrap();
    tester.assert_uniform(&counts).unwrap();
}

#[test]
fn error_vector_positions_are_uniform() {
    let tester = tester();
    let counts = tester
        .error_vector_position_histogram::<Toy587>(42, 3000)
        .unwrap();
    assert_eq!(counts.len(), 2 * 587);
    assert_eq!(counts.iter().sum::<u64>(), 3000 * 10);
    tester.assert_uniform(&counts).unwrap();
}

#[test]
fn uniform_bitstring_bytes_are_uniform() {
    let tester = tester();
    let mut counts = vec![0u64; 256];
    for i in 0..1000u32 {
        let mut seed = [0u8; 32];
        seed[..4].copy_from_slice(&i.to_le_bytes());
        let r = sample_uniform_bitstring::<Toy587>(&Seed::from_bytes(seed), false).unwrap();
        // the last logical byte is masked, skip it
        for &b in &r.logical_bytes()[..73] {
            counts[b as usize] += 1;
        }
    }
    tester.assert_uniform(&counts).unwrap();
}

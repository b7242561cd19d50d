// File: crates/scatter-core/tests/generator.rs
// Purpose: Generated samples have the right shape and stay within the noise band.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::sample::{GeneratorParams, Sample, SAMPLE_SIZE};

#[test]
fn sample_has_n_points_with_ordered_integer_x() {
    let params = GeneratorParams::default();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let s = Sample::generate(&params, &mut rng);
        assert_eq!(s.len(), SAMPLE_SIZE);
        let xs: Vec<f64> = s.points().iter().map(|p| p.x).collect();
        let want: Vec<f64> = (1..=SAMPLE_SIZE).map(|i| i as f64).collect();
        assert_eq!(xs, want);
    }
}

#[test]
fn noise_stays_within_bound() {
    let params = GeneratorParams::default();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let s = Sample::generate(&params, &mut rng);
        for p in s.points() {
            let off = (p.y - params.expected_y(p.x)).abs();
            assert!(off <= params.noise_bound, "x={} y={} off={off}", p.x, p.y);
        }
    }
}

#[test]
fn zero_noise_lands_on_the_trend() {
    let params = GeneratorParams { noise_bound: 0.0, ..GeneratorParams::default() };
    let s = Sample::generate_seeded(&params, 3);
    for p in s.points() {
        assert_eq!(p.y, params.expected_y(p.x));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let params = GeneratorParams::default();
    assert_eq!(Sample::generate_seeded(&params, 9), Sample::generate_seeded(&params, 9));
    assert_ne!(Sample::generate_seeded(&params, 9), Sample::generate_seeded(&params, 10));
}

#[test]
fn extents() {
    let s = Sample::generate_seeded(&GeneratorParams::default(), 5);
    assert_eq!(s.x_extent(), Some((1.0, SAMPLE_SIZE as f64)));
    assert_eq!(s.max_x(), Some(SAMPLE_SIZE as f64));
    let max_y = s.points().iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(s.max_y(), Some(max_y));
    assert_eq!(Sample::default().max_y(), None);
}

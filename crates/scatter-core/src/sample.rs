// File: crates/scatter-core/src/sample.rs
// Summary: Synthetic sample generation along a known linear trend with bounded uniform noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of points per generated sample.
pub const SAMPLE_SIZE: usize = 20;

/// A single (x, y) observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Trend and noise parameters for the generator.
/// Contract: `size >= 2` and `noise_bound >= 0` for the fit to be defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorParams {
    pub size: usize,
    pub slope: f64,
    pub intercept: f64,
    pub noise_bound: f64,
}

impl GeneratorParams {
    /// Noiseless trend value at `x`.
    #[inline]
    pub fn expected_y(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self { size: SAMPLE_SIZE, slope: 2.0, intercept: 5.0, noise_bound: 5.0 }
    }
}

/// Ordered sequence of points; x runs over 1..=N for generated samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sample {
    points: Vec<Point>,
}

impl Sample {
    /// Wrap arbitrary points (used for fixed data and degenerate inputs).
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Draw a fresh sample: for i in 1..=N, x = i and y = a*x + c + U(-b, b).
    pub fn generate<R: Rng + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Self {
        let b = params.noise_bound.abs();
        let points = (1..=params.size)
            .map(|i| {
                let x = i as f64;
                let noise = if b > 0.0 { rng.random_range(-b..=b) } else { 0.0 };
                Point::new(x, params.expected_y(x) + noise)
            })
            .collect();
        Self { points }
    }

    /// Deterministic variant for reproducible renders.
    pub fn generate_seeded(params: &GeneratorParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(params, &mut rng)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest x, or `None` when empty.
    pub fn max_x(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x).reduce(f64::max)
    }

    /// Largest y, or `None` when empty.
    pub fn max_y(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }

    /// (min x, max x), or `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let min = self.points.iter().map(|p| p.x).reduce(f64::min)?;
        let max = self.max_x()?;
        Some((min, max))
    }
}

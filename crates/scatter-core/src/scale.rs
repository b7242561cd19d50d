// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scales for the X and Y axes.

use crate::grid::nice_ticks;

/// Maps a data interval onto a pixel interval.
/// For Y the range is given as (bottom, top) so larger values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut s = Self { domain, range };
        if (s.domain.1 - s.domain.0).abs() < 1e-12 { s.domain.1 = s.domain.0 + 1.0; }
        s
    }

    #[inline]
    fn span(&self) -> f64 {
        let d = self.domain.1 - self.domain.0;
        if d.abs() < 1e-12 { 1.0 } else { d }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.domain.0) / self.span();
        self.range.0 + t as f32 * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let extent = self.range.1 - self.range.0;
        if extent.abs() < f32::EPSILON {
            return self.domain.0;
        }
        let t = ((px - self.range.0) / extent) as f64;
        self.domain.0 + t * self.span()
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

// File: crates/scatter-core/src/regression.rs
// Summary: Closed-form ordinary least squares fit (slope/intercept) over a sample.

use thiserror::Error;

use crate::sample::Point;

/// Why a fit could not be produced.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FitError {
    #[error("cannot fit an empty sample")]
    EmptySample,

    /// Every point shares the same x, so the slope has no value.
    #[error("fit undefined: all {n} points share x = {x}")]
    Undefined { n: usize, x: f64 },
}

/// Least-squares line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub slope: f64,
    pub intercept: f64,
}

impl Fit {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient of determination of this line over `points`.
    /// Returns 1.0 when every y is identical (nothing left to explain).
    pub fn r_squared(&self, points: &[Point]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64;
        let mut ss_tot = 0.0f64;
        let mut ss_res = 0.0f64;
        for p in points {
            let d = p.y - mean_y;
            let r = p.y - self.predict(p.x);
            ss_tot += d * d;
            ss_res += r * r;
        }
        if ss_tot <= f64::EPSILON {
            1.0
        } else {
            1.0 - ss_res / ss_tot
        }
    }

    /// Legend text, e.g. `y = 2.01x + 4.87`.
    pub fn equation(&self) -> String {
        let sign = if self.intercept < 0.0 { '-' } else { '+' };
        format!("y = {:.2}x {} {:.2}", self.slope, sign, self.intercept.abs())
    }
}

/// Fit a line through `points` with the normal-equation closed form:
///   slope     = (n*Sxy - Sx*Sy) / (n*Sxx - Sx^2)
///   intercept = (Sy - slope*Sx) / n
pub fn fit(points: &[Point]) -> Result<Fit, FitError> {
    let first = points.first().ok_or(FitError::EmptySample)?;
    let n = points.len() as f64;

    let (mut sx, mut sy, mut sxy, mut sxx) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for p in points {
        sx += p.x;
        sy += p.y;
        sxy += p.x * p.y;
        sxx += p.x * p.x;
    }

    let denom = n * sxx - sx * sx;
    // Identical x values cancel exactly for small integer inputs; the spread check
    // catches the same condition when rounding leaves a tiny residue.
    let spread = points.iter().any(|p| p.x != first.x);
    if denom == 0.0 || !denom.is_finite() || !spread {
        return Err(FitError::Undefined { n: points.len(), x: first.x });
    }

    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(FitError::Undefined { n: points.len(), x: first.x });
    }
    Ok(Fit { slope, intercept })
}

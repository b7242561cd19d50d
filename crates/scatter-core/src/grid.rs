// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout and path sampling helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Values from `start` to `end` inclusive every `step` (the last sample lands on `end`).
pub fn sample_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || end < start { return vec![start]; }
    let steps = ((end - start) / step).round() as usize;
    linspace(start, end, steps + 1)
}

/// Tick step of the form 1, 2 or 5 times a power of ten giving about `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if span == 0.0 || count == 0 { return 0.0; }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Round tick values inside [start, stop].
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    let step = tick_step(lo, hi, count);
    if !(step > 0.0) || !step.is_finite() { return vec![lo]; }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    // k * step keeps tick values free of accumulated drift
    (first..=last).map(|k| k as f64 * step).collect()
}

// File: crates/scatter-core/src/animation.rs
// Summary: Generation-keyed animation clock for point pop-in and progressive line drawing.
// Notes:
// - Each new sample bumps the generation; frame requests carrying an older
//   generation get `None`, so a leftover tick task can never draw stale data.
// - Frames are a pure function of elapsed time; the scene is rebuilt from scratch.

use std::time::{Duration, Instant};

/// Final point radius in pixels.
pub const POINT_RADIUS: f32 = 5.0;
/// Time for a point to grow from 0 to `POINT_RADIUS`.
pub const POINT_POP_DURATION: Duration = Duration::from_millis(500);
/// Delay between successive line samples becoming visible.
pub const LINE_STAGGER: Duration = Duration::from_millis(10);
/// Data-space distance between line samples.
pub const LINE_STEP: f64 = 0.1;

/// Progress of one generation at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub generation: u64,
    pub point_radius: f32,
    /// How many line samples (prefix) are visible.
    pub line_samples: usize,
    pub done: bool,
}

impl AnimationFrame {
    /// Fully drawn frame, used for exports and static renders.
    pub fn finished(generation: u64, line_total: usize) -> Self {
        Self { generation, point_radius: POINT_RADIUS, line_samples: line_total, done: true }
    }
}

#[derive(Clone, Debug)]
pub struct Animator {
    generation: u64,
    started: Option<Instant>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self { generation: 0, started: None }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.started.is_some() && generation == self.generation
    }

    /// Start a new animation, invalidating every earlier generation.
    pub fn restart(&mut self, now: Instant) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.started = Some(now);
        self.generation
    }

    /// Frame for `generation` at `now`, or `None` if that generation is stale.
    pub fn frame(&self, generation: u64, now: Instant, line_total: usize) -> Option<AnimationFrame> {
        if !self.is_current(generation) {
            return None;
        }
        let elapsed = self.started.map(|t| now.saturating_duration_since(t)).unwrap_or_default();
        Some(frame_at(generation, elapsed, line_total))
    }

    /// Frame for the current generation; fully drawn when nothing was started.
    pub fn current_frame(&self, now: Instant, line_total: usize) -> AnimationFrame {
        self.frame(self.generation, now, line_total)
            .unwrap_or_else(|| AnimationFrame::finished(self.generation, line_total))
    }
}

/// Frame after `elapsed` time; line sample `i` appears at `i * LINE_STAGGER`.
pub fn frame_at(generation: u64, elapsed: Duration, line_total: usize) -> AnimationFrame {
    let t = (elapsed.as_secs_f64() / POINT_POP_DURATION.as_secs_f64()).clamp(0.0, 1.0);
    let point_radius = POINT_RADIUS * ease_cubic_in_out(t) as f32;
    let line_samples = if line_total == 0 {
        0
    } else {
        let shown = (elapsed.as_nanos() / LINE_STAGGER.as_nanos()) as usize + 1;
        shown.min(line_total)
    };
    let done = t >= 1.0 && line_samples == line_total;
    AnimationFrame { generation, point_radius, line_samples, done }
}

pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

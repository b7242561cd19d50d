// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with labels, orientation and laid-out ticks.

use crate::grid::tick_step;
use crate::scale::LinearScale;

/// Default number of ticks requested per axis.
pub const DEFAULT_TICKS: usize = 10;
/// Tick mark length in pixels.
pub const TICK_SIZE: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One laid-out tick: data value, pixel position along the axis, label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub orient: AxisOrient,
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, orient: AxisOrient) -> Self {
        Self { label: label.into(), orient, tick_count: DEFAULT_TICKS }
    }

    pub fn default_x() -> Self {
        Self::new("x", AxisOrient::Bottom)
    }

    pub fn default_y() -> Self {
        Self::new("y", AxisOrient::Left)
    }

    /// Ticks for `scale`, labelled with just enough decimals for the step.
    pub fn layout(&self, scale: &LinearScale) -> Vec<Tick> {
        let step = tick_step(scale.domain.0, scale.domain.1, self.tick_count);
        let decimals = if step > 0.0 && step < 1.0 { (-step.log10()).ceil() as usize } else { 0 };
        scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick { value, px: scale.to_px(value), label: format!("{:.*}", decimals, value) })
            .collect()
    }
}

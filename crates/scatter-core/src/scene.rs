// File: crates/scatter-core/src/scene.rs
// Summary: Declarative scene snapshot (axes, points, fit line, legend, tooltip) built from state.
// Notes:
// - A Scene is rebuilt from scratch for every frame/event; nothing is retained
//   between frames, so there is no drawing state for late callbacks to touch.
// - Point and line positions are in scene pixels (before the zoom transform);
//   the tooltip anchor is in screen pixels.

use crate::animation::{AnimationFrame, LINE_STEP};
use crate::axis::{Axis, Tick};
use crate::chart::RenderOptions;
use crate::geometry::{distance, RectI32};
use crate::grid::sample_range;
use crate::regression::{Fit, FitError};
use crate::sample::{Point, Sample};
use crate::scale::LinearScale;
use crate::tooltip::TooltipState;
use crate::view::ViewState;

/// Headroom added above the largest y.
pub const Y_HEADROOM: f64 = 5.0;
/// Headroom added right of the largest x.
pub const X_HEADROOM: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePoint {
    pub datum: Point,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipOverlay {
    pub anchor: (f32, f32),
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub plot: RectI32,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub points: Vec<ScenePoint>,
    /// Visible prefix of the fit line.
    pub line: Vec<(f32, f32)>,
    pub legend: Option<String>,
    pub view: ViewState,
    pub tooltip: Option<TooltipOverlay>,
}

/// X scale over [0, max x + 1] and Y scale over [0, max y + 5], mapped onto `plot`.
pub fn chart_scales(sample: &Sample, plot: &RectI32) -> (LinearScale, LinearScale) {
    let x_max = sample.max_x().unwrap_or(0.0) + X_HEADROOM;
    let y_max = sample.max_y().unwrap_or(0.0) + Y_HEADROOM;
    let x = LinearScale::new((0.0, x_max), (plot.left as f32, plot.right as f32));
    let y = LinearScale::new((0.0, y_max), (plot.bottom as f32, plot.top as f32));
    (x, y)
}

/// Data-space samples of the fit from min x to max x every `LINE_STEP`.
pub fn fit_line_samples(sample: &Sample, fit: &Fit) -> Vec<Point> {
    match sample.x_extent() {
        Some((lo, hi)) => sample_range(lo, hi, LINE_STEP)
            .into_iter()
            .map(|x| Point::new(x, fit.predict(x)))
            .collect(),
        None => Vec::new(),
    }
}

/// Legend for a fit result.
pub fn legend_text(sample: &Sample, fit: &Result<Fit, FitError>) -> Option<String> {
    if sample.is_empty() {
        return None;
    }
    Some(match fit {
        Ok(f) => format!("{}   R\u{b2} = {:.2}", f.equation(), f.r_squared(sample.points())),
        Err(_) => "fit undefined".to_string(),
    })
}

impl Scene {
    pub fn build(
        sample: &Sample,
        fit: &Result<Fit, FitError>,
        view: &ViewState,
        tooltip: &TooltipState,
        frame: &AnimationFrame,
        opts: &RenderOptions,
    ) -> Self {
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let (x_scale, y_scale) = chart_scales(sample, &plot);
        let x_axis = Axis::default_x();
        let y_axis = Axis::default_y();
        let x_ticks = x_axis.layout(&x_scale);
        let y_ticks = y_axis.layout(&y_scale);

        let points = sample
            .points()
            .iter()
            .map(|p| ScenePoint { datum: *p, cx: x_scale.to_px(p.x), cy: y_scale.to_px(p.y), radius: frame.point_radius })
            .collect();

        let line = match fit {
            Ok(f) => fit_line_samples(sample, f)
                .into_iter()
                .take(frame.line_samples)
                .map(|p| (x_scale.to_px(p.x), y_scale.to_px(p.y)))
                .collect(),
            Err(_) => Vec::new(),
        };

        let tooltip = tooltip.label().map(|text| TooltipOverlay { anchor: tooltip.anchor(), text });

        Self {
            width: opts.width,
            height: opts.height,
            plot,
            x_scale,
            y_scale,
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            points,
            line,
            legend: legend_text(sample, fit),
            view: *view,
            tooltip,
        }
    }

    /// True when there is no data to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Point under the screen-space `cursor`, nearest first. `radius` is the drawn
/// point radius; nothing is hit while points are still invisible.
pub fn hit_test(
    sample: &Sample,
    view: &ViewState,
    opts: &RenderOptions,
    radius: f32,
    cursor: (f32, f32),
) -> Option<Point> {
    if radius <= 0.0 {
        return None;
    }
    let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
    let (xs, ys) = chart_scales(sample, &plot);
    let (sx, sy) = view.invert((cursor.0 as f64, cursor.1 as f64));
    let at = (sx as f32, sy as f32);
    sample
        .points()
        .iter()
        .map(|p| (distance(at, (xs.to_px(p.x), ys.to_px(p.y))), *p))
        .filter(|(d, _)| *d <= radius)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p)
}

// File: crates/scatter-core/src/state.rs
// Summary: Widget state machine; named events in, scene snapshots out.
// Notes:
// - The fit is recomputed inside `set_sample`, the only place the sample changes,
//   so a scene never pairs a newer sample with an older fit.
// - Export goes through `export::export_png`, which reads this state.

use std::time::Instant;

use log::{debug, warn};
use rand::Rng;

use crate::animation::{AnimationFrame, Animator};
use crate::chart::RenderOptions;
use crate::regression::{fit, Fit, FitError};
use crate::sample::{GeneratorParams, Sample};
use crate::scene::{fit_line_samples, hit_test, Scene};
use crate::tooltip::TooltipState;
use crate::view::{ViewState, WheelMode};

/// Inputs the widget reacts to. Pointer coordinates are screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    Generate,
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    DragStart { x: f32, y: f32 },
    DragEnd,
    Wheel { x: f32, y: f32, delta_y: f64, mode: WheelMode },
    ResetZoom,
}

#[derive(Clone, Debug)]
pub struct ChartState {
    params: GeneratorParams,
    opts: RenderOptions,
    sample: Sample,
    fit: Result<Fit, FitError>,
    view: ViewState,
    tooltip: TooltipState,
    animator: Animator,
    drag_from: Option<(f32, f32)>,
}

impl ChartState {
    /// Empty, unrendered state. Nothing is drawn until a sample arrives.
    pub fn new(params: GeneratorParams, opts: RenderOptions) -> Self {
        Self {
            params,
            opts,
            sample: Sample::default(),
            fit: Err(FitError::EmptySample),
            view: ViewState::identity(opts.width, opts.height),
            tooltip: TooltipState::default(),
            animator: Animator::new(),
            drag_from: None,
        }
    }

    pub fn params(&self) -> &GeneratorParams { &self.params }
    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn sample(&self) -> &Sample { &self.sample }
    pub fn fit(&self) -> &Result<Fit, FitError> { &self.fit }
    pub fn view(&self) -> &ViewState { &self.view }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }
    pub fn generation(&self) -> u64 { self.animator.generation() }
    pub fn is_dragging(&self) -> bool { self.drag_from.is_some() }

    /// Replace the sample, refit, and start a new animation generation.
    /// Returns the generation so the caller's tick task can tell when it is stale.
    pub fn set_sample(&mut self, sample: Sample, now: Instant) -> u64 {
        self.fit = fit(sample.points());
        match &self.fit {
            Ok(f) => debug!("fit {} over {} points", f.equation(), sample.len()),
            Err(e) => warn!("{e}"),
        }
        self.sample = sample;
        self.tooltip.hide();
        let generation = self.animator.restart(now);
        debug!("animation generation {generation} started");
        generation
    }

    /// Apply one event. Returns the new generation when the event started one.
    pub fn apply<R: Rng + ?Sized>(&mut self, event: ChartEvent, rng: &mut R, now: Instant) -> Option<u64> {
        match event {
            ChartEvent::Generate => {
                let sample = Sample::generate(&self.params, rng);
                return Some(self.set_sample(sample, now));
            }
            ChartEvent::PointerMove { x, y } => {
                if let Some((px, py)) = self.drag_from {
                    self.view.pan_by_pixels((x - px) as f64, (y - py) as f64);
                    self.drag_from = Some((x, y));
                }
                self.hover((x, y), now);
            }
            ChartEvent::PointerLeave => {
                self.drag_from = None;
                self.tooltip.hide();
            }
            ChartEvent::DragStart { x, y } => {
                self.drag_from = Some((x, y));
            }
            ChartEvent::DragEnd => {
                self.drag_from = None;
            }
            ChartEvent::Wheel { x, y, delta_y, mode } => {
                self.view.zoom_at_pixel(delta_y, mode, x as f64, y as f64);
                debug!("zoom k={:.3} t=({:.1}, {:.1})", self.view.k, self.view.x, self.view.y);
                self.hover((x, y), now);
            }
            ChartEvent::ResetZoom => {
                self.view.reset();
                self.tooltip.hide();
            }
        }
        None
    }

    /// Hit-test against the radius points are drawn with at `now`.
    fn hover(&mut self, cursor: (f32, f32), now: Instant) {
        let radius = self.animator.current_frame(now, self.line_total()).point_radius;
        match hit_test(&self.sample, &self.view, &self.opts, radius, cursor) {
            Some(p) if self.tooltip.datum == Some(p) => self.tooltip.move_to(cursor),
            Some(p) => self.tooltip.show(p, cursor),
            None => self.tooltip.hide(),
        }
    }

    fn line_total(&self) -> usize {
        self.fit.as_ref().map(|f| fit_line_samples(&self.sample, f).len()).unwrap_or(0)
    }

    /// Animation progress for `generation`, `None` once a newer sample exists.
    pub fn frame_for(&self, generation: u64, now: Instant) -> Option<AnimationFrame> {
        self.animator.frame(generation, now, self.line_total())
    }

    /// Scene for the current generation at `now`.
    pub fn scene_at(&self, now: Instant) -> Scene {
        let frame = self.animator.current_frame(now, self.line_total());
        Scene::build(&self.sample, &self.fit, &self.view, &self.tooltip, &frame, &self.opts)
    }

    /// Scene with every animation finished.
    pub fn settled_scene(&self) -> Scene {
        let frame = AnimationFrame::finished(self.animator.generation(), self.line_total());
        Scene::build(&self.sample, &self.fit, &self.view, &self.tooltip, &frame, &self.opts)
    }
}

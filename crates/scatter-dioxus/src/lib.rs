// File: crates/scatter-dioxus/src/lib.rs
// Summary: Dioxus desktop widget: "Generate Data" / "Download as PNG" buttons over an interactive scatter chart.
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - `ChartSession` (always compiled) owns the state, the RNG and the last export
//   outcome; the component only forwards DOM events to it.
// - The chart surface is a PNG data-URL <img> re-rendered from a fresh Scene on
//   every state change or animation tick.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::sample::Sample;
use scatter_core::{export_png, ChartEvent, ChartState, GeneratorParams, RenderOptions};

/// Outcome of the last "Download as PNG" click, shown under the buttons.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportStatus::Saved(path) => write!(f, "Saved {}", path.display()),
            ExportStatus::Failed(reason) => write!(f, "Export failed: {reason}"),
        }
    }
}

pub struct ChartSession {
    pub state: ChartState,
    rng: StdRng,
    status: Option<ExportStatus>,
}

impl ChartSession {
    pub fn new(opts: RenderOptions) -> Self {
        Self::with_rng(opts, StdRng::from_os_rng())
    }

    pub fn seeded(opts: RenderOptions, seed: u64) -> Self {
        Self::with_rng(opts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(opts: RenderOptions, rng: StdRng) -> Self {
        Self { state: ChartState::new(GeneratorParams::default(), opts), rng, status: None }
    }

    /// New sample; returns the animation generation to drive.
    pub fn generate(&mut self, now: Instant) -> u64 {
        let params = *self.state.params();
        let sample = Sample::generate(&params, &mut self.rng);
        self.status = None;
        self.state.set_sample(sample, now)
    }

    pub fn apply(&mut self, event: ChartEvent, now: Instant) -> Option<u64> {
        self.state.apply(event, &mut self.rng, now)
    }

    /// Capture what is on screen now and save it as `dir/chart.png`.
    pub fn export(&mut self, now: Instant, dir: &Path) -> &ExportStatus {
        let status = match export_png(&self.state, now).and_then(|img| img.save_in(dir)) {
            Ok(path) => ExportStatus::Saved(path),
            Err(e) => {
                warn!("download failed: {e}");
                ExportStatus::Failed(e.to_string())
            }
        };
        self.status.insert(status)
    }

    pub fn status(&self) -> Option<&ExportStatus> {
        self.status.as_ref()
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use std::time::Duration;

    use base64::Engine as _;
    use dioxus::html::geometry::WheelDelta;
    use dioxus::prelude::*;
    use scatter_core::{render_to_png_bytes, Theme, WheelMode};

    /// Animation tick interval (~60 fps).
    const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    #[derive(Props, Clone, PartialEq)]
    pub struct RegressionChartProps {
        #[props(default = Theme::light())]
        pub theme: Theme,
        #[props(default = scatter_core::types::WIDTH)]
        pub width_px: i32,
        #[props(default = scatter_core::types::HEIGHT)]
        pub height_px: i32,
        /// Where "Download as PNG" writes chart.png; current directory when unset.
        #[props(default)]
        pub download_dir: Option<PathBuf>,
    }

    fn png_data_url(state: &ChartState, now: Instant) -> Option<String> {
        match render_to_png_bytes(&state.scene_at(now), state.options()) {
            Ok(bytes) => {
                let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                Some(format!("data:image/png;base64,{}", b64))
            }
            Err(e) => {
                warn!("render failed: {e}");
                None
            }
        }
    }

    fn wheel_delta(delta: WheelDelta) -> (f64, WheelMode) {
        match delta {
            WheelDelta::Pixels(v) => (v.y, WheelMode::Pixel),
            WheelDelta::Lines(v) => (v.y, WheelMode::Line),
            WheelDelta::Pages(v) => (v.y, WheelMode::Page),
        }
    }

    #[component]
    pub fn RegressionChart(props: RegressionChartProps) -> Element {
        let mut opts = RenderOptions::default();
        opts.width = props.width_px;
        opts.height = props.height_px;
        opts.theme = props.theme;

        // Generate on mount
        let mut session = use_signal(move || {
            let mut s = ChartSession::new(opts);
            s.generate(Instant::now());
            s
        });
        let mut tick = use_signal(Instant::now);

        // One task per generation; it exits as soon as a newer sample exists.
        let start_animation = move |generation: u64| {
            spawn(async move {
                loop {
                    tokio::time::sleep(FRAME_INTERVAL).await;
                    let now = Instant::now();
                    let frame = session.read().state.frame_for(generation, now);
                    let Some(frame) = frame else { break };
                    tick.set(now);
                    if frame.done {
                        break;
                    }
                }
            });
        };

        use_hook(move || start_animation(session.peek().state.generation()));

        let download_dir = props.download_dir.clone().unwrap_or_else(|| PathBuf::from("."));

        let _ = tick.read();
        let src = png_data_url(&session.read().state, Instant::now());
        let status = session.read().status().map(|s| s.to_string());
        let cursor = if session.read().state.is_dragging() { "grabbing" } else { "crosshair" };

        rsx! {
            div {
                style: "display:flex; flex-direction:column; gap:8px; font-family:sans-serif;",
                div { style: "display:flex; gap:6px; align-items:center;",
                    button { onclick: move |_| {
                            let generation = session.write().generate(Instant::now());
                            start_animation(generation);
                        }, "Generate Data" }
                    button { onclick: move |_| {
                            session.write().export(Instant::now(), &download_dir);
                        }, "Download as PNG" }
                    button { onclick: move |_| {
                            session.write().apply(ChartEvent::ResetZoom, Instant::now());
                        }, "Reset Zoom" }
                    if let Some(msg) = status {
                        span { style: "margin-left:12px; font-size:12px;", "{msg}" }
                    }
                }
                div {
                    style: format!("position:relative; width:{}px; height:{}px; cursor:{};", props.width_px, props.height_px, cursor),
                    onmousemove: move |evt: MouseEvent| {
                        let p = evt.element_coordinates();
                        let (x, y) = (p.x as f32, p.y as f32);
                        session.write().apply(ChartEvent::PointerMove { x, y }, Instant::now());
                    },
                    onmouseleave: move |_| {
                        session.write().apply(ChartEvent::PointerLeave, Instant::now());
                    },
                    onmousedown: move |evt: MouseEvent| {
                        let p = evt.element_coordinates();
                        session.write().apply(ChartEvent::DragStart { x: p.x as f32, y: p.y as f32 }, Instant::now());
                    },
                    onmouseup: move |_| {
                        session.write().apply(ChartEvent::DragEnd, Instant::now());
                    },
                    onwheel: move |evt: WheelEvent| {
                        evt.prevent_default();
                        let p = evt.element_coordinates();
                        let (x, y) = (p.x as f32, p.y as f32);
                        let (delta_y, mode) = wheel_delta(evt.delta());
                        session.write().apply(ChartEvent::Wheel { x, y, delta_y, mode }, Instant::now());
                    },
                    if let Some(src) = src {
                        img {
                            style: "position:absolute; inset:0; width:100%; height:100%; pointer-events:none; user-select:none;",
                            draggable: "false",
                            src: "{src}",
                        }
                    }
                }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { super::ui::RegressionChart { theme: Theme::light() } }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Scatterfit"));
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals)
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("scatter-dioxus built without `desktop` feature; enable features to run UI demo")
}

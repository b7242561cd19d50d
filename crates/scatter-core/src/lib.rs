// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; sample generation, OLS fit, scene model, rendering and export.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod regression;
pub mod sample;
pub mod scale;
pub mod scene;
pub mod state;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use animation::{AnimationFrame, Animator};
pub use chart::{render_to_png, render_to_png_bytes, RenderOptions};
pub use error::ChartError;
pub use export::{export_png, export_settled_png, ExportedImage, EXPORT_FILE_NAME};
pub use regression::{fit, Fit, FitError};
pub use sample::{GeneratorParams, Point, Sample};
pub use scene::Scene;
pub use state::{ChartEvent, ChartState};
pub use theme::Theme;
pub use tooltip::TooltipState;
pub use view::{ViewState, WheelMode};

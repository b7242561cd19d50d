// File: crates/scatter-core/src/export.rs
// Summary: Captures the current scene as `chart.png` and reports success or failure explicitly.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};

use crate::chart::render_to_png_bytes;
use crate::error::{ChartError, Result};
use crate::scene::Scene;
use crate::state::ChartState;

/// File name of every export.
pub const EXPORT_FILE_NAME: &str = "chart.png";

/// An encoded PNG ready to be handed to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    /// Write into `dir` as `chart.png`, returning the full path.
    pub fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.bytes)?;
        info!("saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Export the scene exactly as it is on screen at `now` (zoom, tooltip and
/// animation progress included).
pub fn export_png(state: &ChartState, now: Instant) -> Result<ExportedImage> {
    export_scene(&state.scene_at(now), state)
}

/// Export with all animations completed.
pub fn export_settled_png(state: &ChartState) -> Result<ExportedImage> {
    export_scene(&state.settled_scene(), state)
}

fn export_scene(scene: &Scene, state: &ChartState) -> Result<ExportedImage> {
    if scene.is_empty() {
        warn!("export requested before any data was rendered");
        return Err(ChartError::NothingToExport);
    }
    let bytes = render_to_png_bytes(scene, state.options()).map_err(|e| {
        warn!("export failed: {e}");
        e
    })?;
    info!("exported {} ({} bytes)", EXPORT_FILE_NAME, bytes.len());
    Ok(ExportedImage { file_name: EXPORT_FILE_NAME, bytes })
}

// File: crates/scatter-core/src/error.rs
// Summary: Error types for rendering and export (fit errors live in `regression`).

use thiserror::Error;

/// Result alias for rendering and export operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors surfaced by the render/export pipeline.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The scene holds no points; there is nothing worth exporting.
    #[error("nothing to export: the chart has not been rendered with any data")]
    NothingToExport,

    /// Skia could not allocate a raster surface of the requested size.
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    /// The PNG encoder returned no data.
    #[error("encode PNG failed")]
    Encode,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

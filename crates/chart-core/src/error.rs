// File: crates/chart-core/src/error.rs
// Summary: Error type for the rendering pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error("figure has no panels")]
    EmptyFigure,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

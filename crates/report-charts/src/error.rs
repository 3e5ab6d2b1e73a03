// File: crates/report-charts/src/error.rs
// Summary: Error type for report chart generation.

use loadchart_core::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("chart rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid statistics CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown stat category `{0}` (expected test, page or response)")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

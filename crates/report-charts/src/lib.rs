// File: crates/report-charts/src/lib.rs
// Summary: Chart renderer for load-test reports. Consumes pre-aggregated per-cycle
// statistics and writes the fixed-name PNGs embedded by the HTML report.

pub mod apdex;
pub mod config;
pub mod error;
pub mod load;
pub mod renderer;
pub mod sink;
pub mod stats;

pub use apdex::{apdex_bucket, ApdexRating, APDEX_THRESHOLDS};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use load::{load_csv, load_csv_path};
pub use renderer::{files, ChartRenderer};
pub use sink::{ChartSink, PngSink};
pub use stats::{Apdex, Category, Cycle, Percentiles, ReportStats, StatRecord};

// File: crates/report-charts/src/config.rs
// Summary: Output location and render settings for report charts.

use std::path::{Path, PathBuf};

use loadchart_core::{RenderOptions, Theme};

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Directory the chart files are written into.
    pub output_dir: PathBuf,
    pub render: RenderOptions,
    /// Height of the two-panel throughput + Apdex figures.
    pub stacked_height: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new("target/report")
    }
}

impl ReportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), render: RenderOptions::default(), stacked_height: 900 }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.render.theme = theme;
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.render.width = width;
        self.render.height = height;
        self.stacked_height = height * 3 / 2;
        self
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render options for the stacked figures.
    pub(crate) fn stacked_render(&self) -> RenderOptions {
        let mut opts = self.render.clone();
        opts.height = self.stacked_height;
        opts
    }
}

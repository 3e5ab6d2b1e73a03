// File: crates/report-charts/src/sink.rs
// Summary: Where finished figures go. The PNG sink is the production path; tests
// plug in recording sinks to inspect figures without decoding pixels.

use std::path::Path;

use loadchart_core::{Figure, RenderOptions};

use crate::error::Result;

pub trait ChartSink {
    fn write(&mut self, figure: &Figure, opts: &RenderOptions, path: &Path) -> Result<()>;
}

/// Renders figures on a Skia raster surface and writes them as PNG files.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngSink;

impl ChartSink for PngSink {
    fn write(&mut self, figure: &Figure, opts: &RenderOptions, path: &Path) -> Result<()> {
        figure.render_to_png(opts, path)?;
        Ok(())
    }
}

impl<S: ChartSink + ?Sized> ChartSink for &mut S {
    fn write(&mut self, figure: &Figure, opts: &RenderOptions, path: &Path) -> Result<()> {
        (**self).write(figure, opts, path)
    }
}

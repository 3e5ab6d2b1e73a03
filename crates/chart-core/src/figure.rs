// File: crates/chart-core/src/figure.rs
// Summary: Figures stack one or more chart panels vertically and run the headless
// PNG/RGBA rendering pipeline on a Skia CPU raster surface.

use skia_safe as skia;
use std::path::Path;
use std::time::Instant;

use crate::chart::{Chart, RenderOptions};
use crate::error::{RenderError, Result};
use crate::geometry::RectI32;
use crate::text::TextShaper;

#[derive(Clone, Debug)]
pub struct Panel {
    pub chart: Chart,
    /// Share of the figure height relative to the other panels.
    pub weight: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    pub fn single(chart: Chart) -> Self {
        Self::new().with_panel(chart, 1.0)
    }

    pub fn with_panel(mut self, chart: Chart, weight: f32) -> Self {
        self.panels.push(Panel { chart, weight: weight.max(0.01) });
        self
    }

    /// Panel rectangles top to bottom for a `width` x `height` surface.
    pub fn layout(&self, width: i32, height: i32) -> Vec<RectI32> {
        let total: f32 = self.panels.iter().map(|p| p.weight).sum();
        let mut top = 0.0f32;
        self.panels
            .iter()
            .map(|p| {
                let h = height as f32 * p.weight / total.max(0.01);
                let rect = RectI32::from_ltrb(0, top.round() as i32, width, (top + h).round() as i32);
                top += h;
                rect
            })
            .collect()
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if self.panels.is_empty() {
            return Err(RenderError::EmptyFigure);
        }
        let started = Instant::now();
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        for (panel, rect) in self.panels.iter().zip(self.layout(opts.width, opts.height)) {
            panel.chart.draw(canvas, rect, opts, shaper.as_ref());
        }
        tracing::trace!(panels = self.panels.len(), elapsed = ?started.elapsed(), "figure rendered");
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "png written");
        Ok(())
    }

    /// Returns (pixels, width, height, stride) in RGBA8 unpremultiplied order.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None::<skia::ColorSpace>);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

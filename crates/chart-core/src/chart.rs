// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the drawing of one chart panel onto a Skia canvas.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::Result;
use crate::figure::Figure;
use crate::geometry::RectI32;
use crate::scale::{ValueScale, XScale};
use crate::series::{Marker, Series, SeriesType, YAxisSide};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (titles, tick labels, legend). Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Secondary Y axis drawn on the right edge; series opt in with `on_secondary_axis`.
    pub y2_axis: Option<Axis>,
    /// Categorical X ticks as (position, label). Replaces numeric X tick labels.
    pub x_ticks: Vec<(f64, String)>,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: None,
            x_ticks: Vec::new(),
            show_grid: true,
            show_legend: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn has_secondary_axis(&self) -> bool {
        self.y2_axis.is_some()
    }

    /// Fit both axes to the data of the primary-axis series; `margin` is the
    /// fraction of the Y span added above and below.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
        let v = ViewState::from_chart_secondary(self, margin);
        if let Some(y2) = self.y2_axis.as_mut() {
            y2.min = v.y_min;
            y2.max = v.y_max;
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        Figure::single(self.clone()).render_to_png(opts, output_png_path)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        Figure::single(self.clone()).render_to_png_bytes(opts)
    }

    /// Returns (pixels, width, height, stride) in RGBA8 unpremultiplied order.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        Figure::single(self.clone()).render_to_rgba8(opts)
    }

    /// Half the smallest distance between X positions of bar-like series, so that
    /// bars at the edges stay inside the plot. Zero for line-only charts.
    fn x_padding(&self) -> f64 {
        let xs = bar_positions(&self.series);
        if xs.is_empty() { return 0.0; }
        min_gap(&xs).map(|g| g * 0.5).unwrap_or(0.5)
    }

    /// Draw this chart into `area` of `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, area: RectI32, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        let plot = area.inset(&opts.insets);
        let xs = XScale::new(&plot, &self.x_axis, self.x_padding());
        let ys = ValueScale::for_axis(&plot, &self.y_axis);
        let ys2 = self.y2_axis.as_ref().map(|a| ValueScale::for_axis(&plot, a));

        if self.show_grid {
            draw_grid(canvas, &plot, theme, &self.grid_x_positions(&xs), &self.y_axis, &ys);
        }
        draw_axes(canvas, &plot, theme, self.y2_axis.is_some());

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, false);
        let bar_px = self.bar_slot_px(&xs);
        let mut palette_index = 0usize;
        for s in &self.series {
            let color = s.color.unwrap_or_else(|| {
                let c = theme.series_color(palette_index);
                palette_index += 1;
                c
            });
            let scale = match (s.y_axis, ys2.as_ref()) {
                (YAxisSide::Secondary, Some(y2)) => y2,
                _ => &ys,
            };
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &xs, scale, s, color),
                SeriesType::Candlestick => draw_candle_series(canvas, &xs, scale, s, theme, bar_px),
                SeriesType::Histogram => draw_histogram_series(canvas, &xs, scale, s, color, bar_px),
            }
        }
        canvas.restore();

        if let Some(text) = text {
            self.draw_labels(canvas, &area, &plot, &xs, &ys, ys2.as_ref(), theme, text);
            if self.show_legend {
                self.draw_legend(canvas, &plot, theme, text);
            }
        }
    }

    fn grid_x_positions(&self, xs: &XScale) -> Vec<f32> {
        if self.x_ticks.is_empty() {
            self.x_axis.tick_values().into_iter().map(|x| xs.to_px(x)).collect()
        } else {
            self.x_ticks.iter().map(|(x, _)| xs.to_px(*x)).collect()
        }
    }

    /// Width in pixels available to one X position for bars and candle bodies.
    fn bar_slot_px(&self, xs: &XScale) -> f32 {
        let positions = bar_positions(&self.series);
        let gap = min_gap(&positions).unwrap_or(1.0);
        (gap as f32 * xs.px_per_unit()).max(3.0) * 0.8
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        area: &RectI32,
        plot: &RectI32,
        xs: &XScale,
        ys: &ValueScale,
        ys2: Option<&ValueScale>,
        theme: &Theme,
        text: &TextShaper,
    ) {
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        if let Some(title) = &self.title {
            let y = (area.top as f32 + t) * 0.5 + TITLE_SIZE * 0.4;
            text.draw_centered(canvas, title, (l + r) * 0.5, y, TITLE_SIZE, theme.title, false);
        }

        // X ticks
        if self.x_ticks.is_empty() {
            for v in self.x_axis.tick_values() {
                text.draw_centered(canvas, &self.x_axis.format.format(v), xs.to_px(v), b + 16.0, TICK_SIZE, theme.tick, true);
            }
        } else {
            for (v, label) in &self.x_ticks {
                text.draw_centered(canvas, label, xs.to_px(*v), b + 16.0, TICK_SIZE, theme.tick, true);
            }
        }
        text.draw_centered(canvas, &self.x_axis.label, (l + r) * 0.5, b + 38.0, LABEL_SIZE, theme.axis_label, false);

        // Primary Y ticks on the left
        for v in self.y_axis.tick_values() {
            text.draw_right(canvas, &self.y_axis.format.format(v), l - 6.0, ys.to_px(v) + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, true);
        }
        text.draw_vertical(canvas, &self.y_axis.label, area.left as f32 + LABEL_SIZE, (t + b) * 0.5, LABEL_SIZE, theme.axis_label);

        // Secondary Y ticks on the right
        if let (Some(axis), Some(scale)) = (self.y2_axis.as_ref(), ys2) {
            for v in axis.tick_values() {
                text.draw_left(canvas, &axis.format.format(v), r + 6.0, scale.to_px(v) + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, true);
            }
            text.draw_vertical(canvas, &axis.label, area.right as f32 - LABEL_SIZE * 0.5, (t + b) * 0.5, LABEL_SIZE, theme.axis_label);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: &RectI32, theme: &Theme, text: &TextShaper) {
        let mut entries = Vec::new();
        let mut palette_index = 0usize;
        for s in &self.series {
            let color = s.color.unwrap_or_else(|| {
                let c = theme.series_color(palette_index);
                palette_index += 1;
                c
            });
            if let Some(name) = &s.name {
                entries.push((name.as_str(), color));
            }
        }
        if entries.is_empty() { return; }

        let row_h = LABEL_SIZE + 6.0;
        let swatch = 14.0;
        let text_w = entries
            .iter()
            .map(|(n, _)| text.measure_width(n, LABEL_SIZE, false))
            .fold(0.0f32, f32::max);
        let w = swatch + 14.0 + text_w + 8.0;
        let h = row_h * entries.len() as f32 + 8.0;
        let right = plot.right as f32 - 8.0;
        let top = plot.top as f32 + 8.0;
        let bg = skia::Rect::from_ltrb(right - w, top, right, top + h);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.legend_background);
        canvas.draw_rect(bg, &fill);
        let mut border = skia::Paint::default();
        border.set_style(skia::paint::Style::Stroke);
        border.set_color(theme.grid);
        canvas.draw_rect(bg, &border);

        for (i, (name, color)) in entries.iter().enumerate() {
            let y = top + 4.0 + row_h * i as f32;
            let mut paint = skia::Paint::default();
            paint.set_color(*color);
            canvas.draw_rect(skia::Rect::from_xywh(bg.left + 6.0, y + 3.0, swatch, row_h - 8.0), &paint);
            text.draw_left(canvas, name, bg.left + swatch + 12.0, y + LABEL_SIZE + 1.0, LABEL_SIZE, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn bar_positions(series: &[Series]) -> Vec<f64> {
    let mut xs: Vec<f64> = series
        .iter()
        .flat_map(|s| -> Vec<f64> {
            match s.series_type {
                SeriesType::Histogram => s.data_xy.iter().map(|p| p.0).collect(),
                SeriesType::Candlestick => s.data_ohlc.iter().map(|c| c.t).collect(),
                SeriesType::Line => Vec::new(),
            }
        })
        .filter(|x| x.is_finite())
        .collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
    xs
}

fn min_gap(sorted: &[f64]) -> Option<f64> {
    sorted.windows(2).map(|w| w[1] - w[0]).filter(|g| *g > 1e-12).reduce(f64::min)
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme, x_px: &[f32], y_axis: &Axis, ys: &ValueScale) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    if let Some(dash) = skia::PathEffect::dash(&[4.0, 3.0], 0.0) {
        paint.set_path_effect(dash);
    }

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals
    for &x in x_px {
        if x >= l && x <= r {
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
    // horizontals
    for v in y_axis.tick_values() {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme, secondary: bool) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
    if secondary {
        canvas.draw_line((r, t), (r, b), &axis_paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &XScale, ys: &ValueScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(color);

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((xs.to_px(x), ys.to_px(y)));
        }
        canvas.draw_path(&path, &stroke);
    }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for &(x, y) in data {
        draw_marker(canvas, series.marker, xs.to_px(x), ys.to_px(y), &fill);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, paint: &skia::Paint) {
    match marker {
        Marker::None => {}
        Marker::Dot => {
            canvas.draw_circle((x, y), 3.0, paint);
        }
        Marker::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((x, y - 5.0));
            path.line_to((x + 4.5, y + 3.5));
            path.line_to((x - 4.5, y + 3.5));
            path.close();
            canvas.draw_path(&path, paint);
        }
    }
}

fn draw_candle_series(canvas: &skia::Canvas, xs: &XScale, ys: &ValueScale, series: &Series, theme: &Theme, slot_px: f32) {
    if series.data_ohlc.is_empty() { return; }

    // style
    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let bar_px = slot_px * 0.6;
    let half = bar_px * 0.5;

    for c in &series.data_ohlc {
        let x = xs.to_px(c.t);
        let y_o = ys.to_px(c.o);
        let y_h = ys.to_px(c.h);
        let y_l = ys.to_px(c.l);
        let y_c = ys.to_px(c.c);

        let color = series.color.unwrap_or(if c.c >= c.o { theme.candle_up } else { theme.candle_down });
        wick.set_color(color);
        body.set_color(color);

        // wick with whisker caps
        canvas.draw_line((x, y_h), (x, y_l), &wick);
        canvas.draw_line((x - half * 0.5, y_h), (x + half * 0.5, y_h), &wick);
        canvas.draw_line((x - half * 0.5, y_l), (x + half * 0.5, y_l), &wick);

        // body rect
        let top = y_o.min(y_c);
        let bot = y_o.max(y_c);
        let rect = skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_histogram_series(canvas: &skia::Canvas, xs: &XScale, ys: &ValueScale, series: &Series, color: skia::Color, slot_px: f32) {
    if series.data_xy.is_empty() { return; }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);

    let y_base = ys.to_px(series.baseline_value());
    for &(x, y) in &series.data_xy {
        let center = xs.to_px(x);
        let (left, width) = match series.group {
            Some(g) => {
                let w = slot_px / g.count as f32;
                (center - slot_px * 0.5 + w * g.index as f32, w)
            }
            None => (center - slot_px * 0.375, slot_px * 0.75),
        };
        let y_v = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(left, y_v.min(y_base), left + width, y_v.max(y_base));
        canvas.draw_rect(rect, &paint);
    }
}

// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use loadchart_core::{Axis, Candle, Chart, RenderOptions, Series, SeriesType, Theme};
use skia_safe::Color;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin and carries the opaque theme background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background_in_margin() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    opts.width = 200;
    opts.height = 120;
    let (px, _, _, _) = Chart::new().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

// Default 800x600 with insets (80, 80, 40, 56): plot spans x 80..720, y 40..544.
// Positions 0..=2 padded by half a gap give 213.3 px per unit, so x = 1 sits at 400 px.
fn bar_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 2.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart
}

fn no_labels() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts
}

#[test]
fn grouped_bars_fill_their_own_slot() {
    let mut chart = bar_chart();
    let data = vec![(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)];
    chart.add_series(Series::with_data(SeriesType::Histogram, data.clone()).with_color(Color::from_rgb(255, 0, 0)).in_group(0, 2));
    chart.add_series(Series::with_data(SeriesType::Histogram, data).with_color(Color::from_rgb(0, 0, 255)).in_group(1, 2));

    let (px, _, _, stride) = chart.render_to_rgba8(&no_labels()).expect("rgba render");
    // Bars reach from the baseline (544 px) up to y = 2 (292 px).
    assert_eq!(pixel(&px, stride, 360, 400), [255, 0, 0, 255], "slot 0 left of center");
    assert_eq!(pixel(&px, stride, 440, 400), [0, 0, 255, 255], "slot 1 right of center");
    assert_ne!(pixel(&px, stride, 360, 250), [255, 0, 0, 255], "bar stops at its value");
}

#[test]
fn candle_body_uses_series_color() {
    let mut chart = bar_chart();
    let candles = (0..3).map(|i| Candle::from_box(i as f64, 0.5, 1.0, 3.0, 3.5)).collect();
    chart.add_series(Series::from_candles(candles).with_color(Color::from_rgb(0, 160, 0)));

    let (px, _, _, stride) = chart.render_to_rgba8(&no_labels()).expect("rgba render");
    // Body spans y = 1 (418 px) to y = 3 (166 px), about 51 px either side of 400.
    assert_eq!(pixel(&px, stride, 420, 300), [0, 160, 0, 255]);
    assert_eq!(pixel(&px, stride, 380, 300), [0, 160, 0, 255]);
    assert_ne!(pixel(&px, stride, 470, 300), [0, 160, 0, 255], "outside the body");
}

// File: crates/chart-core/benches/render_bench.rs
// Summary: Render throughput for single and stacked report-sized figures.

use loadchart_core::{Axis, Candle, Chart, Figure, Marker, RenderOptions, Series, SeriesType};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new();
    let data = (0..n)
        .map(|i| (i as f64, (i as f64 * 0.3).sin() * 10.0 + 12.0))
        .collect::<Vec<_>>();
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", 0.0, 24.0);
    ch.add_series(Series::with_data(SeriesType::Line, data).with_marker(Marker::Dot));
    ch
}

fn build_bands(n: usize) -> Chart {
    let mut ch = Chart::new();
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", 0.0, 10.0);
    ch.add_series(Series::from_candles((0..n).map(|i| Candle::from_box(i as f64, 0.5, 1.0, 2.0, 2.0)).collect()));
    ch.add_series(Series::from_candles((0..n).map(|i| Candle::from_box(i as f64, 2.0, 2.0, 4.0, 6.0)).collect()));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    for &n in &[10usize, 100usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let ch = build_chart_xy(n);
            b.iter(|| black_box(ch.render_to_png_bytes(&opts).expect("render")));
        });
        group.bench_function(format!("stacked_{n}"), |b| {
            let fig = Figure::new().with_panel(build_chart_xy(n), 2.0).with_panel(build_bands(n), 1.0);
            b.iter(|| black_box(fig.render_to_png_bytes(&opts).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

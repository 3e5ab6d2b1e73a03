// File: crates/report-charts/src/renderer.rs
// Summary: Builds the report figures from per-cycle statistics and hands them to a sink.
// Notes:
// - Every operation is independent: it reads the stats, builds figures, writes them and
//   returns the written paths. Nothing is kept between calls.
// - An operation with fewer than two qualifying cycles writes nothing.

use std::path::PathBuf;

use loadchart_core::grid::nice_ceiling;
use loadchart_core::{Axis, Candle, Chart, Figure, Marker, Series, SeriesType, Theme, TickFormat};
use tracing::{debug, info};

use crate::apdex::ApdexRating;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::sink::{ChartSink, PngSink};
use crate::stats::{Category, ReportStats, StatRecord};

/// File names written into the output directory.
pub mod files {
    pub const TESTS: &str = "tests.png";
    pub const PAGES_SPPS: &str = "pages_spps.png";
    pub const PAGES: &str = "pages.png";
    pub const REQUESTS_RPS: &str = "requests_rps.png";
    pub const REQUESTS: &str = "requests.png";
}

/// Fewer qualifying cycles than this and a chart is not drawn.
const MIN_CYCLES: usize = 2;

/// Names and labels of one throughput + response-time chart pair.
struct ChartPair {
    category: Category,
    rate_file: &'static str,
    time_file: &'static str,
    rate_title: &'static str,
    rate_label: &'static str,
    rate_legend: &'static str,
    time_title: &'static str,
}

const PAGE_PAIR: ChartPair = ChartPair {
    category: Category::Page,
    rate_file: files::PAGES_SPPS,
    time_file: files::PAGES,
    rate_title: "Successful Pages Per Second",
    rate_label: "Pages per second",
    rate_legend: "SPPS",
    time_title: "Page response time",
};

const REQUEST_PAIR: ChartPair = ChartPair {
    category: Category::Response,
    rate_file: files::REQUESTS_RPS,
    time_file: files::REQUESTS,
    rate_title: "Requests Per Second",
    rate_label: "Requests per second",
    rate_legend: "RPS",
    time_title: "Request response time",
};

pub struct ChartRenderer<S: ChartSink = PngSink> {
    config: ReportConfig,
    sink: S,
}

impl ChartRenderer<PngSink> {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_sink(config, PngSink)
    }
}

impl<S: ChartSink> ChartRenderer<S> {
    pub fn with_sink(config: ReportConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// `tests.png`: successful tests per second for each cycle, with the error
    /// percentage on a secondary axis when any cycle reports errors.
    pub fn create_test_chart(&mut self, stats: &ReportStats) -> Result<Vec<PathBuf>> {
        let records: Vec<&StatRecord> = stats.records(Category::Test).map(|(_, r)| r).collect();
        if records.len() < MIN_CYCLES {
            debug!(cycles = records.len(), "not enough test cycles, skipping test chart");
            return Ok(Vec::new());
        }
        let figure = Figure::single(test_chart(&records, &self.config.render.theme));
        let opts = self.config.render.clone();
        self.write(&figure, &opts, files::TESTS).map(|p| vec![p])
    }

    /// `pages_spps.png` (SPPS over Apdex histogram) and `pages.png` (response times).
    pub fn create_page_chart(&mut self, stats: &ReportStats) -> Result<Vec<PathBuf>> {
        self.create_pair(stats, &PAGE_PAIR)
    }

    /// `requests_rps.png` and `requests.png`, the page pair drawn from response records.
    pub fn create_all_response_chart(&mut self, stats: &ReportStats) -> Result<Vec<PathBuf>> {
        self.create_pair(stats, &REQUEST_PAIR)
    }

    /// Per-step response charts are not rendered by this backend.
    pub fn create_response_chart(&mut self, step: &str) -> Result<Vec<PathBuf>> {
        debug!(step, "per-step response charts are not supported, nothing written");
        Ok(Vec::new())
    }

    /// Server monitoring charts are not rendered by this backend.
    pub fn create_monitor_charts(&mut self) -> Result<Vec<PathBuf>> {
        debug!("monitoring charts are not supported, nothing written");
        Ok(Vec::new())
    }

    /// Monitoring chart of a single host; not rendered by this backend.
    pub fn create_monitor_chart(&mut self, host: &str) -> Result<Vec<PathBuf>> {
        debug!(host, "monitoring charts are not supported, nothing written");
        Ok(Vec::new())
    }

    /// Every chart of the report, in report order.
    pub fn render_all(&mut self, stats: &ReportStats) -> Result<Vec<PathBuf>> {
        let mut written = self.create_test_chart(stats)?;
        written.extend(self.create_page_chart(stats)?);
        written.extend(self.create_all_response_chart(stats)?);
        written.extend(self.create_monitor_charts()?);
        info!(count = written.len(), dir = %self.config.output_dir.display(), "report charts done");
        Ok(written)
    }

    fn create_pair(&mut self, stats: &ReportStats, pair: &ChartPair) -> Result<Vec<PathBuf>> {
        let records: Vec<&StatRecord> = stats.records(pair.category).map(|(_, r)| r).collect();
        if records.len() < MIN_CYCLES {
            debug!(category = %pair.category, cycles = records.len(), "not enough cycles, skipping charts");
            return Ok(Vec::new());
        }
        let theme = self.config.render.theme;

        let rate = Figure::new()
            .with_panel(rate_chart(&records, pair, &theme), 2.0)
            .with_panel(apdex_chart(&records), 1.0);
        let stacked = self.config.stacked_render();
        let rate_path = self.write(&rate, &stacked, pair.rate_file)?;

        let times = Figure::single(response_time_chart(&records, pair, &theme));
        let opts = self.config.render.clone();
        let time_path = self.write(&times, &opts, pair.time_file)?;

        Ok(vec![rate_path, time_path])
    }

    fn write(&mut self, figure: &Figure, opts: &loadchart_core::RenderOptions, file_name: &str) -> Result<PathBuf> {
        let path = self.config.path_for(file_name);
        self.sink.write(figure, opts, &path)?;
        info!(path = %path.display(), "chart written");
        Ok(path)
    }
}

// ---- figure builders --------------------------------------------------------

fn test_chart(records: &[&StatRecord], theme: &Theme) -> Chart {
    let stps: Vec<(f64, f64)> = records.iter().enumerate().map(|(i, r)| (i as f64, r.throughput)).collect();
    let has_error = records.iter().any(|r| r.error_percent != 0.0);
    let max_stps = records.iter().map(|r| r.throughput).fold(0.0, f64::max);

    let mut chart = Chart::new().with_title("Successful Tests Per Second");
    chart.x_axis = Axis::new("Concurrent Users", 0.0, (records.len() - 1) as f64).with_format(TickFormat::Integer);
    chart.y_axis = Axis::new("Tests per second", 0.0, if max_stps > 0.0 { max_stps } else { 1.0 });
    chart.x_ticks = records.iter().enumerate().map(|(i, r)| (i as f64, r.cvus.to_string())).collect();
    chart.show_legend = true;
    chart.add_series(
        Series::with_data(SeriesType::Line, stps)
            .named("STPS")
            .with_color(theme.series_color(0))
            .with_marker(Marker::Dot),
    );

    if has_error {
        chart.y2_axis = Some(Axis::new("Error %", 0.0, 100.0).with_format(TickFormat::Percent(2)));
        let errors = records.iter().enumerate().map(|(i, r)| (i as f64, r.error_percent)).collect();
        chart.add_series(
            Series::with_data(SeriesType::Line, errors)
                .named("Error %")
                .with_color(theme.series_color(3))
                .with_marker(Marker::Triangle)
                .on_secondary_axis(),
        );
    }
    chart
}

/// X axis over the CVUs of `records`, one tick per cycle.
fn cvus_axis(chart: &mut Chart, records: &[&StatRecord]) {
    let min = records.iter().map(|r| r.cvus).min().unwrap_or(0) as f64;
    let max = records.iter().map(|r| r.cvus).max().unwrap_or(1) as f64;
    chart.x_axis = Axis::new("Concurrent Users", min, max).with_format(TickFormat::Integer);
    chart.x_ticks = records.iter().map(|r| (r.cvus as f64, r.cvus.to_string())).collect();
}

fn rate_chart(records: &[&StatRecord], pair: &ChartPair, theme: &Theme) -> Chart {
    let max_rate = records.iter().map(|r| r.throughput).fold(0.0, f64::max);
    let mut chart = Chart::new().with_title(pair.rate_title);
    cvus_axis(&mut chart, records);
    chart.y_axis = Axis::new(pair.rate_label, 0.0, nice_ceiling(max_rate));
    chart.show_legend = true;
    chart.add_series(
        Series::with_data(SeriesType::Line, records.iter().map(|r| (r.cvus as f64, r.throughput)).collect())
            .named(pair.rate_legend)
            .with_color(theme.series_color(0))
            .with_marker(Marker::Dot),
    );
    chart
}

/// One bar slot per rating; each cycle's score sits in the slot of its rating.
fn apdex_chart(records: &[&StatRecord]) -> Chart {
    let threshold = records.first().map(|r| r.apdex.threshold).unwrap_or(0.0);
    let mut chart = Chart::new().with_title(format!("Apdex T={threshold:.1}"));
    cvus_axis(&mut chart, records);
    chart.y_axis = Axis::new("Apdex score", 0.0, 1.0).with_format(TickFormat::Fixed(1));
    chart.show_legend = true;
    for rating in ApdexRating::ALL {
        let data = records
            .iter()
            .map(|r| {
                let v = if r.apdex.rating() == rating { r.apdex.score } else { 0.0 };
                (r.cvus as f64, v)
            })
            .collect();
        chart.add_series(
            Series::with_data(SeriesType::Histogram, data)
                .named(rating.label())
                .with_color(rating.color())
                .in_group(rating.bucket(), ApdexRating::ALL.len()),
        );
    }
    chart
}

fn response_time_chart(records: &[&StatRecord], pair: &ChartPair, theme: &Theme) -> Chart {
    let top = records
        .iter()
        .map(|r| r.percentiles.p95.max(r.avg).max(r.percentiles.p50))
        .fold(0.0, f64::max);

    let mut chart = Chart::new().with_title(pair.time_title);
    cvus_axis(&mut chart, records);
    chart.y_axis = Axis::new("Duration (s)", 0.0, nice_ceiling(top));
    chart.show_legend = true;

    let lower = records
        .iter()
        .map(|r| Candle::from_box(r.cvus as f64, r.min, r.percentiles.p10, r.percentiles.p50, r.percentiles.p50))
        .collect();
    let upper = records
        .iter()
        .map(|r| Candle::from_box(r.cvus as f64, r.percentiles.p50, r.percentiles.p50, r.percentiles.p90, r.percentiles.p95))
        .collect();
    let avg = records.iter().map(|r| (r.cvus as f64, r.avg)).collect();

    chart.add_series(Series::from_candles(lower).named("min/p10/med").with_color(theme.series_color(2)));
    chart.add_series(Series::from_candles(upper).named("med/p90/p95").with_color(theme.series_color(1)));
    chart.add_series(
        Series::with_data(SeriesType::Line, avg)
            .named("avg")
            .with_color(theme.series_color(0))
            .with_marker(Marker::Dot),
    );
    chart
}

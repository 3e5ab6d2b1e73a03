// File: crates/report-charts/tests/spy.rs
// Purpose: Inspect the figures handed to the sink: error overlay, Apdex slots, bands.

use loadchart_core::{Figure, RenderOptions, SeriesType, YAxisSide};
use loadchart_report::{files, Category, ChartRenderer, ChartSink, Cycle, ReportConfig, ReportStats, Result, StatRecord};
use std::path::{Path, PathBuf};

#[derive(Default)]
struct RecordingSink {
    written: Vec<(PathBuf, Figure, RenderOptions)>,
}

impl ChartSink for RecordingSink {
    fn write(&mut self, figure: &Figure, opts: &RenderOptions, path: &Path) -> Result<()> {
        self.written.push((path.to_path_buf(), figure.clone(), opts.clone()));
        Ok(())
    }
}

impl RecordingSink {
    fn figure(&self, name: &str) -> &Figure {
        &self
            .written
            .iter()
            .find(|(p, _, _)| p.file_name().and_then(|n| n.to_str()) == Some(name))
            .unwrap_or_else(|| panic!("{name} not written"))
            .1
    }
}

fn test_stats(errors: &[f64]) -> ReportStats {
    let mut stats = ReportStats::default();
    for (i, &e) in errors.iter().enumerate() {
        let cvus = (i as u32 + 1) * 10;
        stats.insert(Cycle(i as u32), Category::Test, StatRecord::new(cvus, 5.0 + i as f64).with_errors(e));
    }
    stats
}

fn render_tests(stats: &ReportStats) -> RecordingSink {
    let mut renderer = ChartRenderer::with_sink(ReportConfig::new("out"), RecordingSink::default());
    renderer.create_test_chart(stats).expect("test chart");
    renderer.into_sink()
}

#[test]
fn errors_add_secondary_axis() {
    let sink = render_tests(&test_stats(&[0.0, 1.5, 0.0]));
    let chart = &sink.figure(files::TESTS).panels[0].chart;

    let y2 = chart.y2_axis.as_ref().expect("error axis present");
    assert_eq!((y2.min, y2.max), (0.0, 100.0));
    let errors = chart.series.iter().find(|s| s.y_axis == YAxisSide::Secondary).expect("error series");
    assert_eq!(errors.name.as_deref(), Some("Error %"));
    assert_eq!(errors.data_xy, vec![(0.0, 0.0), (1.0, 1.5), (2.0, 0.0)]);
}

#[test]
fn no_errors_no_secondary_axis() {
    let sink = render_tests(&test_stats(&[0.0, 0.0, 0.0]));
    let chart = &sink.figure(files::TESTS).panels[0].chart;

    assert!(!chart.has_secondary_axis());
    assert_eq!(chart.series.len(), 1);
}

#[test]
fn test_chart_plots_index_with_cvus_ticks() {
    let sink = render_tests(&test_stats(&[0.0, 0.0, 0.0]));
    let chart = &sink.figure(files::TESTS).panels[0].chart;

    assert_eq!(chart.title.as_deref(), Some("Successful Tests Per Second"));
    assert_eq!(chart.series[0].data_xy, vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);
    let labels: Vec<&str> = chart.x_ticks.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(labels, vec!["10", "20", "30"]);
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 7.0));
}

fn page_stats() -> ReportStats {
    let mut stats = ReportStats::default();
    let scores = [0.95, 0.80, 0.40];
    for (i, &score) in scores.iter().enumerate() {
        let cvus = (i as u32 + 1) * 10;
        let rec = StatRecord::new(cvus, 3.0 * cvus as f64)
            .with_delays(0.1, 0.4, 2.0)
            .with_percentiles(0.2, 0.3, 0.8, 1.0)
            .with_apdex(score, 1.5);
        stats.insert(Cycle(i as u32), Category::Page, rec);
    }
    stats
}

#[test]
fn apdex_panel_places_each_score_in_its_slot() {
    let mut renderer = ChartRenderer::with_sink(ReportConfig::new("out"), RecordingSink::default());
    renderer.create_page_chart(&page_stats()).expect("page chart");
    let sink = renderer.into_sink();

    let figure = sink.figure(files::PAGES_SPPS);
    assert_eq!(figure.panels.len(), 2);
    let apdex = &figure.panels[1].chart;
    assert_eq!(apdex.title.as_deref(), Some("Apdex T=1.5"));
    assert_eq!(apdex.series.len(), 5);

    // bucket 0 holds 0.95 at 10 CVUs, bucket 2 holds 0.80 at 20, bucket 4 holds 0.40 at 30
    let value = |slot: usize, x: f64| apdex.series[slot].data_xy.iter().find(|p| p.0 == x).map(|p| p.1);
    assert_eq!(value(0, 10.0), Some(0.95));
    assert_eq!(value(2, 20.0), Some(0.80));
    assert_eq!(value(4, 30.0), Some(0.40));
    assert_eq!(value(1, 10.0), Some(0.0));
    for (i, s) in apdex.series.iter().enumerate() {
        assert_eq!(s.series_type, SeriesType::Histogram);
        assert_eq!(s.group.map(|g| (g.index, g.count)), Some((i, 5)));
    }
}

#[test]
fn response_time_bands_and_mean() {
    let mut renderer = ChartRenderer::with_sink(ReportConfig::new("out"), RecordingSink::default());
    renderer.create_page_chart(&page_stats()).expect("page chart");
    let sink = renderer.into_sink();

    let chart = &sink.figure(files::PAGES).panels[0].chart;
    assert_eq!(chart.title.as_deref(), Some("Page response time"));
    let lower = &chart.series[0].data_ohlc[0];
    let upper = &chart.series[1].data_ohlc[0];
    assert_eq!((lower.t, lower.l, lower.o, lower.c, lower.h), (10.0, 0.1, 0.2, 0.3, 0.3));
    assert_eq!((upper.t, upper.l, upper.o, upper.c, upper.h), (10.0, 0.3, 0.3, 0.8, 1.0));
    assert_eq!(chart.series[2].series_type, SeriesType::Line);
    assert_eq!(chart.series[2].data_xy[0], (10.0, 0.4));
}

#[test]
fn stacked_figure_uses_stacked_height() {
    let mut renderer = ChartRenderer::with_sink(ReportConfig::new("out").with_size(600, 400), RecordingSink::default());
    renderer.create_page_chart(&page_stats()).expect("page chart");
    let sink = renderer.into_sink();

    let heights: Vec<(String, i32)> = sink
        .written
        .iter()
        .map(|(p, _, o)| (p.file_name().unwrap().to_string_lossy().into_owned(), o.height))
        .collect();
    assert_eq!(heights, vec![(files::PAGES_SPPS.to_string(), 600), (files::PAGES.to_string(), 400)]);
}

#[test]
fn whole_apdex_threshold_keeps_one_decimal() {
    let mut stats = ReportStats::default();
    for i in 0..2u32 {
        let rec = StatRecord::new((i + 1) * 10, 4.0).with_apdex(0.9, 2.0);
        stats.insert(Cycle(i), Category::Page, rec);
    }
    let mut renderer = ChartRenderer::with_sink(ReportConfig::new("out"), RecordingSink::default());
    renderer.create_page_chart(&stats).expect("page chart");
    let sink = renderer.into_sink();

    let apdex = &sink.figure(files::PAGES_SPPS).panels[1].chart;
    assert_eq!(apdex.title.as_deref(), Some("Apdex T=2.0"));
}

#[test]
fn repeated_cycle_ids_are_plotted_once() {
    let mut stats = ReportStats::new(vec![Cycle(0), Cycle(1), Cycle(0), Cycle(2), Cycle(1)]);
    assert_eq!(stats.cycles(), &[Cycle(0), Cycle(1), Cycle(2)]);
    for i in 0..3u32 {
        stats.insert(Cycle(i), Category::Test, StatRecord::new((i + 1) * 10, 5.0));
    }
    assert_eq!(stats.count(Category::Test), 3);

    let sink = render_tests(&stats);
    let chart = &sink.figure(files::TESTS).panels[0].chart;
    assert_eq!(chart.series[0].data_xy.len(), 3);
    assert_eq!(chart.x_ticks.len(), 3);
}

// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and axis sides.

use loadchart_core::{Axis, Candle, Chart, Series, SeriesType, ViewState};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Candles
    chart.add_series(Series::from_candles(vec![
        Candle { t: 2.0, o: 2.0, h: 6.0, l: 1.5, c: 4.0 },
        Candle { t: 3.0, o: 4.0, h: 5.5, l: 2.0, c: 2.5 },
    ]));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from line vs 2..3 from candles => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Y min uses line min 1.0 vs candle low 1.5 => expect <= 1.0
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    // Y max uses candle high 6.0 => expect >= 6.0
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn secondary_series_do_not_stretch_primary_axis() {
    let mut chart = Chart::new();
    chart.y2_axis = Some(Axis::new("Error %", 0.0, 100.0));
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 10.0), (1.0, 20.0)]));
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 90.0)]).on_secondary_axis());

    chart.autoscale_axes(0.0);

    assert_eq!(chart.y_axis.min, 10.0);
    assert_eq!(chart.y_axis.max, 20.0);
    let y2 = chart.y2_axis.as_ref().expect("secondary axis kept");
    assert_eq!((y2.min, y2.max), (0.0, 90.0));
}

#[test]
fn histogram_range_includes_baseline() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Histogram, vec![(1.0, 0.6), (2.0, 0.9)]));
    let v = ViewState::from_chart(&chart, 0.0);
    assert_eq!(v.y_min, 0.0);
    assert_eq!(v.y_max, 0.9);
}

#[test]
fn empty_chart_falls_back_to_unit_square() {
    let v = ViewState::from_chart(&Chart::new(), 0.1);
    assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}

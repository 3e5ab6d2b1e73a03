// File: crates/chart-core/src/view.rs
// Summary: Data extents of a chart and helpers to apply them to its axes.

use crate::series::{Series, SeriesType, YAxisSide};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of all primary-axis series, with `margin` (a fraction of the Y span)
    /// added above and below. Falls back to the unit square when there is no data.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        extents(chart.series.iter().filter(|s| s.y_axis == YAxisSide::Primary), margin)
    }

    /// Same as [`ViewState::from_chart`] for series on the secondary Y axis.
    pub fn from_chart_secondary(chart: &Chart, margin: f64) -> Self {
        extents(chart.series.iter().filter(|s| s.y_axis == YAxisSide::Secondary), margin)
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn extents<'a>(series: impl Iterator<Item = &'a Series>, margin: f64) -> ViewState {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in series {
        match s.series_type {
            SeriesType::Line | SeriesType::Histogram => {
                for &(x, y) in &s.data_xy {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
                if s.series_type == SeriesType::Histogram {
                    let b = s.baseline_value();
                    y_min = y_min.min(b);
                    y_max = y_max.max(b);
                }
            }
            SeriesType::Candlestick => {
                for c in &s.data_ohlc {
                    x_min = x_min.min(c.t);
                    x_max = x_max.max(c.t);
                    y_min = y_min.min(c.l);
                    y_max = y_max.max(c.h);
                }
            }
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
        return ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
    }
    if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
    if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
    let ym = (y_max - y_min) * margin.max(0.0);
    ViewState { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
}

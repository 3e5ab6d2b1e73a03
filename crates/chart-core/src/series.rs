// File: crates/chart-core/src/series.rs
// Summary: Series model for line, candlestick and histogram data.
// Notes:
// - Line and Histogram read `data_xy`; Candlestick reads `data_ohlc`.
// - A series may be attached to the secondary Y axis of its chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Candlestick, // box from open to close, whiskers to low/high
    Histogram,   // (x, y) bars from baseline (0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Dot,
    Triangle,
}

/// Which Y axis a series is scaled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YAxisSide {
    Primary,
    Secondary,
}

/// Slot of a histogram inside a group of side-by-side bars sharing one X value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGroup {
    pub index: usize,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    pub t: f64, // position on X
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl Candle {
    /// Candle whose body spans `[box_lo, box_hi]` and whiskers `[whisker_lo, whisker_hi]`.
    /// Values are clamped so the OHLC invariants hold even for inconsistent input.
    pub fn from_box(t: f64, whisker_lo: f64, box_lo: f64, box_hi: f64, whisker_hi: f64) -> Self {
        let o = box_lo.min(box_hi);
        let c = box_lo.max(box_hi);
        Self { t, o, c, l: whisker_lo.min(o), h: whisker_hi.max(c) }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: Option<String>,
    pub data_xy: Vec<(f64, f64)>, // used by Line/Histogram
    pub data_ohlc: Vec<Candle>,   // used by Candlestick
    pub baseline: Option<f64>,    // used by Histogram (origin)
    pub color: Option<skia::Color>,
    pub marker: Marker,
    pub stroke_width: f32,
    pub y_axis: YAxisSide,
    pub group: Option<BarGroup>,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self::with_data(series_type, Vec::new())
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            name: None,
            data_xy: data,
            data_ohlc: Vec::new(),
            baseline: None,
            color: None,
            marker: Marker::None,
            stroke_width: 2.0,
            y_axis: YAxisSide::Primary,
            group: None,
        }
    }

    pub fn from_candles(candles: Vec<Candle>) -> Self {
        let mut s = Self::new(SeriesType::Candlestick);
        s.data_ohlc = candles;
        s
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn on_secondary_axis(mut self) -> Self {
        self.y_axis = YAxisSide::Secondary;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Place this histogram in slot `index` of `count` side-by-side bars.
    pub fn in_group(mut self, index: usize, count: usize) -> Self {
        let count = count.max(1);
        self.group = Some(BarGroup { index: index.min(count - 1), count });
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    pub fn is_empty(&self) -> bool {
        match self.series_type {
            SeriesType::Line | SeriesType::Histogram => self.data_xy.is_empty(),
            SeriesType::Candlestick => self.data_ohlc.is_empty(),
        }
    }
}

// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick label formatting.

/// How tick values are printed next to an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Fixed number of decimals, e.g. `Fixed(2)` prints `12.50`.
    Fixed(usize),
    /// Fixed decimals followed by ` %`.
    Percent(usize),
    /// Rounded to the nearest integer.
    Integer,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Fixed(p) => format!("{:.*}", p, v),
            TickFormat::Percent(p) => format!("{:.*} %", p, v),
            TickFormat::Integer => format!("{}", v.round() as i64),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Number of evenly spaced ticks (including both ends).
    pub ticks: usize,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: 6, format: TickFormat::Fixed(2) }
    }

    pub fn default_x() -> Self {
        let mut a = Self::new("Concurrent Users", 0.0, 10.0);
        a.format = TickFormat::Integer;
        a
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn tick_values(&self) -> Vec<f64> {
        crate::grid::linspace(self.min, self.max, self.ticks)
    }
}

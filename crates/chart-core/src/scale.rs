// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Horizontal scale mapping `[vmin, vmax]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct XScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl XScale {
    /// `pad` widens the data range by that many units on each side so bars at the
    /// extremes are not clipped.
    pub fn new(rect: &RectI32, axis: &Axis, pad: f64) -> Self {
        let mut s = Self { left_px: rect.left as f32, right_px: rect.right as f32, vmin: axis.min - pad, vmax: axis.max + pad };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.left_px + ((x - self.vmin) / span) as f32 * (self.right_px - self.left_px)
    }
    /// Pixels covered by one data unit.
    pub fn px_per_unit(&self) -> f32 {
        (self.right_px - self.left_px) / (self.vmax - self.vmin).max(1e-12) as f32
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    pub fn for_axis(rect: &RectI32, axis: &Axis) -> Self {
        Self::new_linear(rect.top as f32, rect.bottom as f32, axis.min, axis.max)
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

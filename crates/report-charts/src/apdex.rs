// File: crates/report-charts/src/apdex.rs
// Summary: Five-tier Apdex rating used by the histogram panels.

use skia_safe as skia;

/// Lower bounds of Excellent, Good, Fair and Poor. A score equal to a bound
/// belongs to the tier that bound opens.
pub const APDEX_THRESHOLDS: [f64; 4] = [0.94, 0.85, 0.7, 0.5];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApdexRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl ApdexRating {
    pub const ALL: [ApdexRating; 5] = [
        ApdexRating::Excellent,
        ApdexRating::Good,
        ApdexRating::Fair,
        ApdexRating::Poor,
        ApdexRating::Unacceptable,
    ];

    pub fn from_score(score: f64) -> Self {
        Self::ALL[apdex_bucket(score)]
    }

    /// Index 0 (Excellent) to 4 (Unacceptable).
    pub fn bucket(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ApdexRating::Excellent => "Excellent",
            ApdexRating::Good => "Good",
            ApdexRating::Fair => "Fair",
            ApdexRating::Poor => "Poor",
            ApdexRating::Unacceptable => "Unacceptable",
        }
    }

    pub fn color(self) -> skia::Color {
        match self {
            ApdexRating::Excellent => skia::Color::from_argb(255, 46, 160, 67),
            ApdexRating::Good => skia::Color::from_argb(255, 140, 200, 60),
            ApdexRating::Fair => skia::Color::from_argb(255, 240, 200, 40),
            ApdexRating::Poor => skia::Color::from_argb(255, 240, 130, 30),
            ApdexRating::Unacceptable => skia::Color::from_argb(255, 210, 40, 40),
        }
    }
}

/// Bucket index of an Apdex score. NaN lands in Unacceptable.
pub fn apdex_bucket(score: f64) -> usize {
    APDEX_THRESHOLDS
        .iter()
        .position(|&lower| score >= lower)
        .unwrap_or(APDEX_THRESHOLDS.len())
}

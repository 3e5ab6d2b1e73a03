// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod figure;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use figure::{Figure, Panel};
pub use series::{BarGroup, Candle, Marker, Series, SeriesType, YAxisSide};
pub use axis::{Axis, TickFormat};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use error::RenderError;

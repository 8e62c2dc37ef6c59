// File: crates/logmap-core/src/lib.rs
// Summary: Core library entry point; exports the orbit engine, tick selection, and chart API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod figures;
pub mod grid;
pub mod map;
pub mod series;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::Error;
pub use figures::{divergence_chart, first_orbit_chart, orbit_figures, orbit_pair_chart, FigureSet};
pub use map::{iterate, step, OrbitPair, OrbitRow};
pub use series::{Marker, Series, SeriesStyle};
pub use text::TextShaper;
pub use theme::Theme;
pub use ticks::{delta_for, select_ticks};

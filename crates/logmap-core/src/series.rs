// File: crates/logmap-core/src/series.rs
// Summary: Point series model with per-series stroke and marker styling.

use skia_safe as skia;

/// Marker drawn at each data point on top of the polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Diamond,
}

/// Stroke and marker styling for one series.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub stroke_width: f32,
    pub marker: Marker,
    pub marker_size: f32,
    /// 0..=255 applied to both stroke and markers.
    pub alpha: u8,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::from_argb(255, 64, 160, 255),
            stroke_width: 1.0,
            marker: Marker::None,
            marker_size: 4.0,
            alpha: 255,
        }
    }
}

impl SeriesStyle {
    pub fn new(color: skia::Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn with_marker(mut self, marker: Marker, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Stroke color with the series alpha folded in.
    pub fn effective_color(&self) -> skia::Color {
        skia::Color::from_argb(self.alpha, self.color.r(), self.color.g(), self.color.b())
    }
}

#[derive(Clone)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, style: SeriesStyle::default() }
    }

    pub fn styled(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }
}

// File: crates/logmap-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    /// Stroke for the first orbit (red in the classic rendering).
    pub orbit_a: skia::Color,
    /// Stroke for the second orbit (blue).
    pub orbit_b: skia::Color,
    /// Stroke for the divergence series (green).
    pub divergence: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            orbit_a: skia::Color::from_argb(255, 235, 80, 80),
            orbit_b: skia::Color::from_argb(255, 90, 140, 255),
            divergence: skia::Color::from_argb(255, 60, 190, 110),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            orbit_a: skia::Color::from_argb(255, 200, 40, 40),
            orbit_b: skia::Color::from_argb(255, 40, 80, 200),
            divergence: skia::Color::from_argb(255, 30, 140, 70),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

// File: crates/logmap-core/src/axis.rs
// Summary: Axis model with label, bounds, and explicit tick positions.

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Positions (in axis units) where tick marks, labels, and grid lines
    /// are drawn. Positions outside [min, max] are skipped at draw time.
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new() }
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Iteration (n)", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("x(n)", 0.0, 1.0)
    }

    /// Label text for a tick position: integers render bare, fractional
    /// positions with one decimal (the 0.1-spaced value ladders).
    pub fn format_tick(v: f64) -> String {
        if v.fract() == 0.0 {
            format!("{}", v as i64)
        } else {
            format!("{v:.1}")
        }
    }
}

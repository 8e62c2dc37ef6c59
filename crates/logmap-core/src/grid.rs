// File: crates/logmap-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Fixed-step value ladder from `min` to `max` inclusive (the 0.1-spaced
/// Y ticks of the orbit figures). `step` must divide the span evenly.
pub fn value_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max <= min { return vec![min]; }
    let count = ((max - min) / step).round() as usize + 1;
    linspace(min, max, count)
}

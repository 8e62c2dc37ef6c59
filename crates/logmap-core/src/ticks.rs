// File: crates/logmap-core/src/ticks.rs
// Summary: X-axis tick selection; coarser spacing as the step count grows.

use crate::error::Error;

/// Spacing table, scanned top-down; the first row whose threshold exceeds
/// the step count wins. Breakpoints are empirical, not derived.
const SPACING: &[(i64, i64)] = &[
    (10, 1),
    (20, 2),
    (100, 5),
    (200, 10),
    (500, 25),
];

/// Fallback spacing for step counts at or beyond the last threshold.
const SPACING_MAX: i64 = 50;

/// Tick spacing for a given step count.
pub fn delta_for(steps: i64) -> i64 {
    for &(threshold, delta) in SPACING {
        if steps < threshold {
            return delta;
        }
    }
    SPACING_MAX
}

/// Tick positions `0, delta, 2*delta, ..` ending at the smallest multiple
/// of delta at or beyond `steps`, so the axis always covers the full orbit.
/// `steps = 0` yields `[0]`.
///
/// Fails with [`Error::InvalidArgument`] when `steps` is negative.
pub fn select_ticks(steps: i64) -> Result<Vec<i64>, Error> {
    if steps < 0 {
        return Err(Error::negative_steps(steps));
    }
    let delta = delta_for(steps);
    let last = ((steps + delta - 1) / delta) * delta;
    Ok((0..=last).step_by(delta as usize).collect())
}

// File: crates/logmap-core/src/figures.rs
// Summary: The three standard orbit figures (first orbit, overlay, divergence).

use crate::axis::Axis;
use crate::chart::Chart;
use crate::error::Error;
use crate::grid::value_ticks;
use crate::map::OrbitPair;
use crate::series::{Marker, Series, SeriesStyle};
use crate::theme::Theme;
use crate::ticks::select_ticks;

/// The standard figure triple rendered for every orbit computation.
pub struct FigureSet {
    pub first: Chart,
    pub pair: Chart,
    pub divergence: Chart,
}

/// X axis spanning [-1, steps + 1] with selector-chosen ticks.
fn x_axis(steps: i64, ticks: &[i64]) -> Axis {
    Axis::new("Iteration (n)", -1.0, (steps + 1) as f64)
        .with_ticks(ticks.iter().map(|&t| t as f64).collect())
}

/// Orbit values live in [0, 1]; ticks every 0.1.
fn orbit_y_axis(label: &str) -> Axis {
    Axis::new(label, 0.0, 1.0).with_ticks(value_ticks(0.0, 1.0, 0.1))
}

/// Divergence lives in [-1, 1]; ticks every 0.1.
fn divergence_y_axis() -> Axis {
    Axis::new("x(n) - y(n)", -1.0, 1.0).with_ticks(value_ticks(-1.0, 1.0, 0.1))
}

/// Figure 1: the first orbit alone.
pub fn first_orbit_chart(orbits: &OrbitPair, steps: i64, ticks: &[i64], theme: &Theme) -> Chart {
    let mut chart = Chart::new().with_title("Results of the first iteration");
    chart.x_axis = x_axis(steps, ticks);
    chart.y_axis = orbit_y_axis("x(n)");
    chart.add_series(
        Series::with_data(OrbitPair::indexed(&orbits.a))
            .styled(SeriesStyle::new(theme.orbit_a).with_marker(Marker::Circle, 8.0)),
    );
    chart
}

/// Figure 2: both orbits overlaid; the second orbit draws diamond markers
/// at half opacity over the first.
pub fn orbit_pair_chart(orbits: &OrbitPair, steps: i64, ticks: &[i64], theme: &Theme) -> Chart {
    let mut chart = Chart::new().with_title("Results of the first and the second iterations");
    chart.x_axis = x_axis(steps, ticks);
    chart.y_axis = orbit_y_axis("x(n), y(n)");
    chart.add_series(
        Series::with_data(OrbitPair::indexed(&orbits.a))
            .styled(SeriesStyle::new(theme.orbit_a).with_marker(Marker::Circle, 5.0)),
    );
    chart.add_series(
        Series::with_data(OrbitPair::indexed(&orbits.b))
            .styled(SeriesStyle::new(theme.orbit_b).with_marker(Marker::Diamond, 5.0).with_alpha(128)),
    );
    chart
}

/// Figure 3: the pointwise difference of the two orbits.
pub fn divergence_chart(orbits: &OrbitPair, steps: i64, ticks: &[i64], theme: &Theme) -> Chart {
    let mut chart = Chart::new().with_title("The difference of two iterations");
    chart.x_axis = x_axis(steps, ticks);
    chart.y_axis = divergence_y_axis();
    chart.add_series(
        Series::with_data(OrbitPair::indexed(&orbits.diff))
            .styled(SeriesStyle::new(theme.divergence).with_marker(Marker::Circle, 5.0)),
    );
    chart
}

/// Build all three figures for an orbit pair. The step count is recovered
/// from the sequence length; tick selection runs on it once.
pub fn orbit_figures(orbits: &OrbitPair, theme: &Theme) -> Result<FigureSet, Error> {
    let steps = orbits.len() as i64 - 1;
    let ticks = select_ticks(steps)?;
    Ok(FigureSet {
        first: first_orbit_chart(orbits, steps, &ticks, theme),
        pair: orbit_pair_chart(orbits, steps, &ticks, theme),
        divergence: divergence_chart(orbits, steps, &ticks, theme),
    })
}

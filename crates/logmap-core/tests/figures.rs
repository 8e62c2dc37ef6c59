// File: crates/logmap-core/tests/figures.rs
// Purpose: Validate the standard figure triple (bounds, ticks, series wiring).

use logmap_core::{iterate, orbit_figures, select_ticks, Theme};

#[test]
fn figures_use_the_fixed_bounds() {
    let orbits = iterate(20, 0.4, 0.6, 1.5).unwrap();
    let figs = orbit_figures(&orbits, &Theme::dark()).expect("figures");

    for chart in [&figs.first, &figs.pair, &figs.divergence] {
        assert_eq!(chart.x_axis.min, -1.0);
        assert_eq!(chart.x_axis.max, 21.0);
    }
    assert_eq!(figs.first.y_axis.min, 0.0);
    assert_eq!(figs.first.y_axis.max, 1.0);
    assert_eq!(figs.pair.y_axis.min, 0.0);
    assert_eq!(figs.pair.y_axis.max, 1.0);
    assert_eq!(figs.divergence.y_axis.min, -1.0);
    assert_eq!(figs.divergence.y_axis.max, 1.0);
}

#[test]
fn x_ticks_come_from_the_selector() {
    let orbits = iterate(150, 0.4, 0.6, 3.2).unwrap();
    let figs = orbit_figures(&orbits, &Theme::dark()).expect("figures");
    let want: Vec<f64> = select_ticks(150).unwrap().iter().map(|&t| t as f64).collect();
    assert_eq!(figs.first.x_axis.ticks, want);
    assert_eq!(figs.pair.x_axis.ticks, want);
    assert_eq!(figs.divergence.x_axis.ticks, want);
}

#[test]
fn series_carry_the_orbit_data() {
    let orbits = iterate(12, 0.4, 0.6, 3.7).unwrap();
    let figs = orbit_figures(&orbits, &Theme::light()).expect("figures");

    assert_eq!(figs.first.series.len(), 1);
    assert_eq!(figs.pair.series.len(), 2);
    assert_eq!(figs.divergence.series.len(), 1);

    assert_eq!(figs.first.series[0].data_xy.len(), 13);
    let (x, y) = figs.pair.series[1].data_xy[0];
    assert_eq!(x, 0.0);
    assert_eq!(y, 0.6);
    let (_, d) = figs.divergence.series[0].data_xy[3];
    assert_eq!(d, orbits.diff[3]);
}

// File: crates/map-examples/src/bin/sensitivity.rs
// Summary: Minimal example rendering sensitive dependence on initial conditions.

use logmap_core::{divergence_chart, iterate, select_ticks, RenderOptions, Theme};

fn main() {
    // Two seeds differing by 1e-7 at fully chaotic r = 4.0. The orbits
    // track each other for a while, then decorrelate completely.
    let steps = 60;
    let orbits = iterate(steps, 0.2, 0.2000001, 4.0).expect("iterate");
    let ticks = select_ticks(steps).expect("ticks");

    let chart = divergence_chart(&orbits, steps, &ticks, &Theme::dark());

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_sensitivity.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}

// File: crates/demo/src/main.rs
// Summary: Demo computes two logistic-map orbits and renders the standard figure triple to PNGs.

use anyhow::{Context, Result};
use logmap_core::{iterate, orbit_figures, theme, OrbitPair, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Positional parameters: steps x0 y0 r, all optional. A trailing
    // `table` flag also writes the numeric table as CSV; `theme=<name>`
    // picks a color preset.
    let mut positional: Vec<String> = Vec::new();
    let mut want_table = false;
    let mut theme_name = "dark".to_string();
    for arg in std::env::args().skip(1) {
        if arg == "table" || arg == "--table" {
            want_table = true;
        } else if let Some(name) = arg.strip_prefix("theme=") {
            theme_name = name.to_string();
        } else {
            positional.push(arg);
        }
    }

    let steps: i64 = parse_or(positional.first(), 20).context("parsing steps")?;
    let x0: f64 = parse_or(positional.get(1), 0.4).context("parsing x0")?;
    let y0: f64 = parse_or(positional.get(2), 0.6).context("parsing y0")?;
    let r: f64 = parse_or(positional.get(3), 1.5).context("parsing r")?;

    println!("Iterating {steps} steps from x0={x0}, y0={y0} at growth rate r={r}");

    let orbits = iterate(steps, x0, y0, r)?;
    let figs = orbit_figures(&orbits, &theme::find(&theme_name))?;

    let opts = RenderOptions::default();
    let out_dir = PathBuf::from("target/out");
    for (chart, name) in [
        (&figs.first, "orbit_first.png"),
        (&figs.pair, "orbit_pair.png"),
        (&figs.divergence, "orbit_diff.png"),
    ] {
        let out = out_dir.join(name);
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    if want_table {
        let out = out_dir.join("orbit_table.csv");
        write_table(&orbits, &out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Parse an optional positional argument, falling back to `default`.
fn parse_or<T: std::str::FromStr>(arg: Option<&String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(s) => s.parse::<T>().with_context(|| format!("invalid value '{s}'")),
        None => Ok(default),
    }
}

/// Numeric table of the run: one row per index, columns x, y, x-y.
fn write_table(orbits: &OrbitPair, path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["x", "y", "x-y"])?;
    for row in orbits.rows() {
        wtr.write_record([
            row.x.to_string(),
            row.y.to_string(),
            row.diff.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

// File: crates/logmap-core/src/map.rs
// Summary: Logistic-map orbit engine: two seeds iterated in lockstep plus their divergence.

use crate::error::Error;

/// One application of the logistic map `x -> r * x * (1 - x)`.
#[inline]
pub fn step(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Two orbits of the logistic map, iterated with a shared growth rate,
/// plus their pointwise difference. All three sequences have the same
/// length and share indices: entry 0 is the seed, entry i the i-th iterate.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPair {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub diff: Vec<f64>,
}

/// One row of the numeric table view: both iterates and their difference
/// at a single index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRow {
    pub x: f64,
    pub y: f64,
    pub diff: f64,
}

impl OrbitPair {
    /// Number of entries per sequence (steps + 1).
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Zip the three sequences into per-index rows for tabular display.
    pub fn rows(&self) -> Vec<OrbitRow> {
        self.a
            .iter()
            .zip(&self.b)
            .zip(&self.diff)
            .map(|((&x, &y), &diff)| OrbitRow { x, y, diff })
            .collect()
    }

    /// Sequence values paired with their iteration index, for plotting.
    pub fn indexed(seq: &[f64]) -> Vec<(f64, f64)> {
        seq.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect()
    }
}

/// Iterate the logistic map `steps` times from two independent seeds
/// sharing growth rate `r`.
///
/// Returns sequences of length `steps + 1`; index 0 holds the seeds
/// untouched. Values outside the nominal ranges (`x` in [0, 1], `r` in
/// [0, 4]) are not rejected: the recurrence is total over f64, and any
/// overflow to infinity or NaN flows through unmodified.
///
/// Fails with [`Error::InvalidArgument`] when `steps` is negative.
pub fn iterate(steps: i64, x0: f64, y0: f64, r: f64) -> Result<OrbitPair, Error> {
    if steps < 0 {
        return Err(Error::negative_steps(steps));
    }
    let n = steps as usize + 1;
    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut diff = Vec::with_capacity(n);

    a.push(x0);
    b.push(y0);
    diff.push(x0 - y0);

    let mut x = x0;
    let mut y = y0;
    for _ in 0..steps {
        let x1 = step(x, r);
        let y1 = step(y, r);
        a.push(x1);
        b.push(y1);
        diff.push(x1 - y1);
        x = x1;
        y = y1;
    }

    Ok(OrbitPair { a, b, diff })
}

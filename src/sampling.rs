//! Uniform time grids and dense-solution sampling

use crate::solver::DenseSolution;

/// Build `n` evenly spaced time points covering `[start, end]` inclusive
///
/// The first element is exactly `start` and the last exactly `end`; with
/// fewer than two points the grid degenerates to `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    // Pin the endpoint so accumulated rounding never overshoots the window
    grid[n - 1] = end;
    grid
}

/// Evaluate the position component of a dense solution at each grid time
pub fn sample_positions(solution: &DenseSolution, times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| solution.position(t)).collect()
}

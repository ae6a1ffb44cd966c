// Simulation API: error type, orchestrating solver, result series
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::constants::DEFAULT_SAMPLE_COUNT;
use crate::derivatives::{
    horizontal_derivatives, vertical_derivatives, HorizontalParams, VerticalParams,
};
use crate::inputs::{DragModel, Overrides, SimConstants};
use crate::sampling::{linspace, sample_positions};
use crate::solver::Rk45;

/// Error type for simulation failures
#[derive(Debug)]
pub struct SimulationError {
    message: String,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SimulationError {}

impl From<String> for SimulationError {
    fn from(msg: String) -> Self {
        SimulationError { message: msg }
    }
}

impl From<&str> for SimulationError {
    fn from(msg: &str) -> Self {
        SimulationError {
            message: msg.to_string(),
        }
    }
}

/// One sampled point of the simulated trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// Sampled trajectory: three equal-length series sharing one time grid
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub times: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// View the series as per-point records, e.g. for rendering
    pub fn points(&self) -> Vec<TrajectoryPoint> {
        self.times
            .iter()
            .zip(self.xs.iter().zip(self.ys.iter()))
            .map(|(&time, (&x, &y))| TrajectoryPoint { time, x, y })
            .collect()
    }

    /// Horizontal distance covered at the sample closest to the ground
    ///
    /// Picks the sample minimizing |y| and reports its x. `None` only for
    /// an empty result.
    pub fn jump_distance(&self) -> Option<f64> {
        let mut best: Option<usize> = None;
        for (i, y) in self.ys.iter().enumerate() {
            match best {
                Some(j) if self.ys[j].abs() <= y.abs() => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| self.xs[i])
    }
}

/// Two-dimensional skydiver trajectory simulator
///
/// Resolves constants once at construction; each `solve` call is an
/// independent pure computation producing a fresh result.
pub struct Simulator {
    constants: SimConstants,
    drag_model: DragModel,
    sample_count: usize,
    solver: Rk45,
}

impl Simulator {
    pub fn new(overrides: &Overrides, drag_model: DragModel) -> Self {
        Self {
            constants: SimConstants::resolve(overrides),
            drag_model,
            sample_count: DEFAULT_SAMPLE_COUNT,
            solver: Rk45::default(),
        }
    }

    pub fn set_sample_count(&mut self, count: usize) {
        self.sample_count = count;
    }

    pub fn constants(&self) -> &SimConstants {
        &self.constants
    }

    /// Integrate both axes and sample them on a shared uniform grid
    ///
    /// The axes are independent: each solve sees only its own axis's
    /// constants. Failures (degenerate window, non-finite states from
    /// pathological inputs) abort the whole simulation; there is no
    /// partial result.
    pub fn solve(&self) -> Result<SimulationResult, SimulationError> {
        let c = &self.constants;
        let t_span = (c.t_start, c.t_end);
        let times = linspace(c.t_start, c.t_end, self.sample_count);
        let model = self.drag_model;

        let hp = HorizontalParams::from_constants(c);
        let x_solution = self.solver.integrate(
            move |_, u| horizontal_derivatives(u, model, &hp),
            Vector2::new(c.x0, c.vx0),
            t_span,
        )?;

        let vp = VerticalParams::from_constants(c);
        let y_solution = self.solver.integrate(
            move |_, u| vertical_derivatives(u, model, &vp),
            Vector2::new(c.y0, c.vy0),
            t_span,
        )?;

        let xs = sample_positions(&x_solution, &times);
        let ys = sample_positions(&y_solution, &times);

        Ok(SimulationResult { times, xs, ys })
    }
}

/// Convenience wrapper: resolve, integrate, and sample in one call
pub fn simulate(
    overrides: &Overrides,
    drag_model: DragModel,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new(overrides, drag_model).solve()
}

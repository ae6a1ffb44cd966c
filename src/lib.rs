//! # Skydive Engine
//!
//! Two-dimensional skydiver trajectory engine: gravity, quadratic air
//! drag, and wind, integrated per axis with an adaptive RK45 solver and
//! sampled on a uniform time grid.

// Re-export the main types and functions
pub use inputs::{
    kmph_to_mps, DragModel, Overrides, SimConstants, WindDirectionX, WindDirectionY,
};
pub use simulator::{simulate, SimulationError, SimulationResult, Simulator, TrajectoryPoint};
pub use solver::{DenseSolution, Rk45};

// Module declarations
pub mod constants;
pub mod derivatives;
pub mod inputs;
pub mod sampling;
pub mod simulator;
pub mod solver;

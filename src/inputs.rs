// Input parameter types: resolved constants, sparse overrides, drag regime
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Drag regime selecting which equations of motion are integrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum DragModel {
    /// Quadratic air drag plus wind on both axes
    Air,
    /// No air resistance: constant horizontal velocity, vertical free fall
    Vacuum,
}

/// Horizontal wind orientation relative to the jump direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum WindDirectionX {
    /// Wind blows along +x and pushes the jumper forward
    Push,
    /// Wind blows along -x and holds the jumper back
    Pull,
}

impl WindDirectionX {
    pub fn sign(self) -> f64 {
        match self {
            WindDirectionX::Push => 1.0,
            WindDirectionX::Pull => -1.0,
        }
    }
}

/// Vertical wind orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum WindDirectionY {
    /// Updraft, slows the fall
    Up,
    /// Downdraft, speeds the fall
    Down,
}

impl WindDirectionY {
    pub fn sign(self) -> f64 {
        match self {
            WindDirectionY::Up => 1.0,
            WindDirectionY::Down => -1.0,
        }
    }
}

/// Complete, resolved set of physical constants for one simulation
///
/// Every field is always present; a value is either the built-in default
/// or an explicit override. The drag factors `alpha_x`/`alpha_y` are
/// derived from drag coefficient, air density, and frontal area and are
/// never overridden directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConstants {
    /// Horizontal drag factor, 0.5 * Cx * rho * Sx (kg/m)
    pub alpha_x: f64,
    /// Vertical drag factor, 0.5 * Cx * rho * Sy (kg/m)
    pub alpha_y: f64,
    pub wind_x_dir: WindDirectionX,
    pub wind_y_dir: WindDirectionY,
    /// Horizontal wind speed magnitude (m/s, non-negative)
    pub wind_x: f64,
    /// Vertical wind speed magnitude (m/s, non-negative)
    pub wind_y: f64,
    /// Jumper mass (kg)
    pub mass: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Integration window start (s)
    pub t_start: f64,
    /// Integration window end (s)
    pub t_end: f64,
    pub x0: f64,
    pub vx0: f64,
    pub y0: f64,
    pub vy0: f64,
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            alpha_x: 0.5 * DRAG_COEFFICIENT_HUMAN * AIR_DENSITY_SEA_LEVEL * FRONTAL_AREA_HORIZONTAL_M2,
            alpha_y: 0.5 * DRAG_COEFFICIENT_HUMAN * AIR_DENSITY_SEA_LEVEL * FRONTAL_AREA_VERTICAL_M2,
            wind_x_dir: WindDirectionX::Push,
            wind_y_dir: WindDirectionY::Up,
            wind_x: 0.0,
            wind_y: 0.0,
            mass: DEFAULT_MASS_KG,
            gravity: G_ACCEL_MPS2,
            t_start: DEFAULT_T_START_S,
            t_end: DEFAULT_T_END_S,
            x0: DEFAULT_X0_M,
            vx0: DEFAULT_VX0_MPS,
            y0: DEFAULT_Y0_M,
            vy0: DEFAULT_VY0_MPS,
        }
    }
}

impl SimConstants {
    /// Resolve a complete constants record from defaults plus a sparse
    /// override set
    pub fn resolve(overrides: &Overrides) -> Self {
        overrides.apply(Self::default())
    }
}

/// Sparse set of user-supplied parameter overrides
///
/// `None` means "use the default". The derived drag factors are not
/// overridable; callers tune speeds, heights, and wind instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub wind_x_dir: Option<WindDirectionX>,
    pub wind_y_dir: Option<WindDirectionY>,
    pub wind_x: Option<f64>,
    pub wind_y: Option<f64>,
    pub mass: Option<f64>,
    pub gravity: Option<f64>,
    pub t_start: Option<f64>,
    pub t_end: Option<f64>,
    pub x0: Option<f64>,
    pub vx0: Option<f64>,
    pub y0: Option<f64>,
    pub vy0: Option<f64>,
}

impl Overrides {
    /// Apply this override set on top of `defaults`, field by field
    pub fn apply(&self, defaults: SimConstants) -> SimConstants {
        SimConstants {
            alpha_x: defaults.alpha_x,
            alpha_y: defaults.alpha_y,
            wind_x_dir: self.wind_x_dir.unwrap_or(defaults.wind_x_dir),
            wind_y_dir: self.wind_y_dir.unwrap_or(defaults.wind_y_dir),
            wind_x: self.wind_x.unwrap_or(defaults.wind_x),
            wind_y: self.wind_y.unwrap_or(defaults.wind_y),
            mass: self.mass.unwrap_or(defaults.mass),
            gravity: self.gravity.unwrap_or(defaults.gravity),
            t_start: self.t_start.unwrap_or(defaults.t_start),
            t_end: self.t_end.unwrap_or(defaults.t_end),
            x0: self.x0.unwrap_or(defaults.x0),
            vx0: self.vx0.unwrap_or(defaults.vx0),
            y0: self.y0.unwrap_or(defaults.y0),
            vy0: self.vy0.unwrap_or(defaults.vy0),
        }
    }
}

/// Convert a speed from km/h to m/s
///
/// The core only consumes m/s; this helper lives at the boundary for
/// callers whose inputs arrive in km/h.
pub fn kmph_to_mps(speed_kmph: f64) -> f64 {
    speed_kmph * KMPH_TO_MPS
}

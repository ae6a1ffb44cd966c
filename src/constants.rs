/// Physical constants and default jump parameters

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.8;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Drag coefficient of a human body in free fall
///
/// Value: 1.2 (dimensionless)
/// A belly-to-earth skydiver behaves like a blunt body; published values
/// cluster around 1.0-1.3 depending on posture.
pub const DRAG_COEFFICIENT_HUMAN: f64 = 1.2;

/// Frontal area presented to horizontal motion (m²)
///
/// Approximated as a 0.4 m x 1.8 m silhouette: the full body profile seen
/// from the side. This is the larger of the two reference areas.
pub const FRONTAL_AREA_HORIZONTAL_M2: f64 = 0.4 * 1.8;

/// Frontal area presented to vertical motion (m²)
///
/// Approximated as a 0.15 m x 0.15 m cross-section: the body seen from
/// directly below. Much smaller than the horizontal area, so vertical
/// drag is comparatively weak.
pub const FRONTAL_AREA_VERTICAL_M2: f64 = 0.15 * 0.15;

/// Default jumper mass (kg)
pub const DEFAULT_MASS_KG: f64 = 70.0;

/// Default integration window start (s)
pub const DEFAULT_T_START_S: f64 = 0.0;

/// Default integration window end (s)
pub const DEFAULT_T_END_S: f64 = 2.0;

/// Default initial horizontal position (m)
pub const DEFAULT_X0_M: f64 = 0.0;

/// Default initial horizontal velocity (m/s)
pub const DEFAULT_VX0_MPS: f64 = 5.0;

/// Default initial height (m)
pub const DEFAULT_Y0_M: f64 = 10.0;

/// Default initial vertical velocity (m/s)
pub const DEFAULT_VY0_MPS: f64 = 0.0;

/// Number of evenly spaced output samples over the integration window
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Conversion factor: kilometers per hour to meters per second
pub const KMPH_TO_MPS: f64 = 1.0 / 3.6;

// Solver defaults. These match the accuracy class of standard adaptive
// RK45 implementations (relative 1e-3, absolute 1e-6).

/// Default relative tolerance for the adaptive step controller
pub const DEFAULT_RTOL: f64 = 1e-3;

/// Default absolute tolerance for the adaptive step controller
pub const DEFAULT_ATOL: f64 = 1e-6;

/// Hard cap on accepted solver steps before the solve is declared failed
pub const MAX_SOLVER_STEPS: usize = 100_000;

//! Per-axis equations of motion reduced to first-order systems
//!
//! Each axis integrates a state `U = (position, velocity)` whose
//! derivative is `U' = (velocity, acceleration)`. The two axes never
//! couple: each right-hand side sees only its own axis's constants.

use nalgebra::Vector2;

use crate::inputs::{DragModel, SimConstants};

/// Axis state vector: `[position, velocity]`
pub type AxisState = Vector2<f64>;

/// Constants feeding the horizontal equation of motion
#[derive(Debug, Clone, Copy)]
pub struct HorizontalParams {
    pub alpha: f64,
    pub mass: f64,
    pub wind_sign: f64,
    pub wind_speed: f64,
}

impl HorizontalParams {
    pub fn from_constants(c: &SimConstants) -> Self {
        Self {
            alpha: c.alpha_x,
            mass: c.mass,
            wind_sign: c.wind_x_dir.sign(),
            wind_speed: c.wind_x,
        }
    }
}

/// Constants feeding the vertical equation of motion
#[derive(Debug, Clone, Copy)]
pub struct VerticalParams {
    pub alpha: f64,
    pub mass: f64,
    pub wind_sign: f64,
    pub wind_speed: f64,
    pub gravity: f64,
}

impl VerticalParams {
    pub fn from_constants(c: &SimConstants) -> Self {
        Self {
            alpha: c.alpha_y,
            mass: c.mass,
            wind_sign: c.wind_y_dir.sign(),
            wind_speed: c.wind_y,
            gravity: c.gravity,
        }
    }
}

/// Horizontal right-hand side: `x'' = -(alpha/m)·(v² - s·w²)`
///
/// The drag term uses `v²`, not `v·|v|`, matching the source model. It is
/// not sign-correct for negative velocities, which never occur over the
/// simulated window (vx0 >= 0 and drag only decelerates toward zero).
pub fn horizontal_derivatives(state: AxisState, model: DragModel, p: &HorizontalParams) -> AxisState {
    let v = state[1];
    let accel = match model {
        DragModel::Air => {
            -(p.alpha / p.mass) * (v * v - p.wind_sign * p.wind_speed * p.wind_speed)
        }
        DragModel::Vacuum => 0.0,
    };
    Vector2::new(v, accel)
}

/// Vertical right-hand side: `y'' = (alpha/m)·(v² + s·w²) - g`
///
/// Falling motion has negative velocity, so the `v²` drag term opposes the
/// fall; an updraft (`s = +1`) slows it further, a downdraft speeds it.
pub fn vertical_derivatives(state: AxisState, model: DragModel, p: &VerticalParams) -> AxisState {
    let v = state[1];
    let accel = match model {
        DragModel::Air => {
            (p.alpha / p.mass) * (v * v + p.wind_sign * p.wind_speed * p.wind_speed) - p.gravity
        }
        DragModel::Vacuum => -p.gravity,
    };
    Vector2::new(v, accel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{WindDirectionX, WindDirectionY};

    fn constants() -> SimConstants {
        SimConstants::default()
    }

    #[test]
    fn test_vacuum_horizontal_is_constant_velocity() {
        let p = HorizontalParams::from_constants(&constants());
        let d = horizontal_derivatives(Vector2::new(3.0, 5.0), DragModel::Vacuum, &p);
        assert_eq!(d[0], 5.0);
        assert_eq!(d[1], 0.0);
    }

    #[test]
    fn test_vacuum_vertical_is_free_fall() {
        let p = VerticalParams::from_constants(&constants());
        let d = vertical_derivatives(Vector2::new(10.0, -2.0), DragModel::Vacuum, &p);
        assert_eq!(d[0], -2.0);
        assert_eq!(d[1], -9.8);
    }

    #[test]
    fn test_horizontal_drag_decelerates_forward_motion() {
        let p = HorizontalParams::from_constants(&constants());
        let d = horizontal_derivatives(Vector2::new(0.0, 5.0), DragModel::Air, &p);
        let expected = -(p.alpha / p.mass) * 25.0;
        assert!((d[1] - expected).abs() < 1e-12);
        assert!(d[1] < 0.0);
    }

    #[test]
    fn test_horizontal_wind_sign_enters_squared() {
        let mut c = constants();
        c.wind_x = 10.0;
        c.wind_x_dir = WindDirectionX::Push;
        let push = HorizontalParams::from_constants(&c);
        c.wind_x_dir = WindDirectionX::Pull;
        let pull = HorizontalParams::from_constants(&c);

        let state = Vector2::new(0.0, 5.0);
        let a_push = horizontal_derivatives(state, DragModel::Air, &push)[1];
        let a_pull = horizontal_derivatives(state, DragModel::Air, &pull)[1];

        // Push subtracts w² inside the drag term, pull adds it
        assert!(a_push > a_pull);
        let alpha_m = push.alpha / push.mass;
        assert!((a_push - (-alpha_m * (25.0 - 100.0))).abs() < 1e-12);
        assert!((a_pull - (-alpha_m * (25.0 + 100.0))).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_drag_opposes_fall() {
        let p = VerticalParams::from_constants(&constants());
        let falling = Vector2::new(5.0, -10.0);
        let a_air = vertical_derivatives(falling, DragModel::Air, &p)[1];
        let a_vac = vertical_derivatives(falling, DragModel::Vacuum, &p)[1];
        assert!(a_air > a_vac);
    }

    #[test]
    fn test_vertical_updraft_slows_fall_more_than_downdraft() {
        let mut c = constants();
        c.wind_y = 8.0;
        c.wind_y_dir = WindDirectionY::Up;
        let up = VerticalParams::from_constants(&c);
        c.wind_y_dir = WindDirectionY::Down;
        let down = VerticalParams::from_constants(&c);

        let state = Vector2::new(5.0, -3.0);
        let a_up = vertical_derivatives(state, DragModel::Air, &up)[1];
        let a_down = vertical_derivatives(state, DragModel::Air, &down)[1];
        assert!(a_up > a_down);
    }
}

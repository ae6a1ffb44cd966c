// End-to-end properties of the simulation pipeline
use approx::assert_relative_eq;
use nalgebra::Vector2;

use skydive_engine::derivatives::{horizontal_derivatives, HorizontalParams};
use skydive_engine::{simulate, DragModel, Overrides, Rk45, SimConstants, Simulator};

#[test]
fn test_solve_returns_equal_length_series_at_default_count() {
    let result = simulate(&Overrides::default(), DragModel::Air).unwrap();
    assert_eq!(result.times.len(), 200);
    assert_eq!(result.xs.len(), 200);
    assert_eq!(result.ys.len(), 200);
}

#[test]
fn test_time_grid_is_uniform_and_covers_the_window() {
    let result = simulate(&Overrides::default(), DragModel::Vacuum).unwrap();
    let c = SimConstants::default();

    assert_eq!(result.times[0], c.t_start);
    assert_eq!(*result.times.last().unwrap(), c.t_end);

    let step = (c.t_end - c.t_start) / 199.0;
    for w in result.times.windows(2) {
        assert!(w[1] > w[0], "time grid must be strictly increasing");
        assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-12);
    }
}

#[test]
fn test_vacuum_vertical_matches_free_fall_closed_form() {
    // y(t) = y0 + vy0*t - (g/2)*t² with y0=10, vy0=0, g=9.8
    let result = simulate(&Overrides::default(), DragModel::Vacuum).unwrap();

    for (t, y) in result.times.iter().zip(result.ys.iter()) {
        let expected = 10.0 - 4.9 * t * t;
        assert_relative_eq!(*y, expected, epsilon = 1e-6);
    }
    // Spot checks from the closed form
    let mid = result.times.iter().position(|&t| (t - 1.0).abs() < 6e-3).unwrap();
    assert_relative_eq!(result.ys[mid], 10.0 - 4.9 * result.times[mid] * result.times[mid], epsilon = 1e-6);
    assert_relative_eq!(*result.ys.last().unwrap(), -9.6, epsilon = 1e-6);
}

#[test]
fn test_vacuum_horizontal_is_linear() {
    // x(t) = x0 + vx0*t with x0=0, vx0=5
    let result = simulate(&Overrides::default(), DragModel::Vacuum).unwrap();
    for (t, x) in result.times.iter().zip(result.xs.iter()) {
        assert_relative_eq!(*x, 5.0 * t, epsilon = 1e-8);
    }
    assert_relative_eq!(*result.xs.last().unwrap(), 10.0, epsilon = 1e-8);
}

#[test]
fn test_drag_reduces_horizontal_distance_and_fall_speed() {
    // Zero wind by default, so the only difference is quadratic drag
    let air = simulate(&Overrides::default(), DragModel::Air).unwrap();
    let vacuum = simulate(&Overrides::default(), DragModel::Vacuum).unwrap();

    assert!(air.xs.last().unwrap() < vacuum.xs.last().unwrap());
    // Less distance fallen under drag: the air trajectory stays higher
    assert!(air.ys.last().unwrap() > vacuum.ys.last().unwrap());
}

#[test]
fn test_more_drag_means_less_horizontal_distance() {
    let c = SimConstants::default();
    let solver = Rk45::default();

    let distance_for = |alpha: f64| {
        let p = HorizontalParams {
            alpha,
            mass: c.mass,
            wind_sign: 1.0,
            wind_speed: 0.0,
        };
        let solution = solver
            .integrate(
                move |_, u| horizontal_derivatives(u, DragModel::Air, &p),
                Vector2::new(c.x0, c.vx0),
                (c.t_start, c.t_end),
            )
            .unwrap();
        solution.position(c.t_end)
    };

    let light_drag = distance_for(c.alpha_x);
    let heavy_drag = distance_for(4.0 * c.alpha_x);
    assert!(heavy_drag < light_drag);
    assert!(light_drag < c.x0 + c.vx0 * (c.t_end - c.t_start));
}

#[test]
fn test_simulation_is_idempotent() {
    let overrides = Overrides {
        vx0: Some(8.0),
        y0: Some(15.0),
        wind_x: Some(3.0),
        ..Default::default()
    };
    let first = simulate(&overrides, DragModel::Air).unwrap();
    let second = simulate(&overrides, DragModel::Air).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_overrides_flow_through_the_simulation() {
    let overrides = Overrides {
        y0: Some(100.0),
        vx0: Some(0.0),
        ..Default::default()
    };
    let result = simulate(&overrides, DragModel::Vacuum).unwrap();
    assert_eq!(result.ys[0], 100.0);
    // No initial horizontal velocity: x never moves in vacuum
    for x in &result.xs {
        assert_relative_eq!(*x, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_jump_distance_for_a_landing_trajectory() {
    // From 10 m the vacuum fall passes y=0 at t = sqrt(10/4.9) ≈ 1.43 s,
    // inside the 2 s window, so the jump distance is about 5 * 1.43 m
    let result = simulate(&Overrides::default(), DragModel::Vacuum).unwrap();
    let distance = result.jump_distance().unwrap();
    let t_ground = (10.0f64 / 4.9).sqrt();
    assert_relative_eq!(distance, 5.0 * t_ground, epsilon = 0.1);
}

#[test]
fn test_custom_sample_count_flows_to_all_series() {
    let mut simulator = Simulator::new(&Overrides::default(), DragModel::Air);
    simulator.set_sample_count(17);
    let result = simulator.solve().unwrap();
    assert_eq!(result.times.len(), 17);
    assert_eq!(result.xs.len(), 17);
    assert_eq!(result.ys.len(), 17);
}

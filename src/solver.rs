//! Adaptive Runge-Kutta 4(5) integration with dense output
//!
//! Dormand-Prince pair: six stages build a fifth-order solution, the
//! embedded fourth-order solution supplies the error estimate, and the
//! first-same-as-last property recycles the final slope evaluation. Each
//! accepted step records the endpoint states and slopes so the continuous
//! solution can be evaluated at arbitrary times inside the window.

use crate::derivatives::AxisState;

// Dormand-Prince stage coefficients
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth-order solution weights
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Error weights: difference between the fifth- and fourth-order solutions
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

// Step controller limits
const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

/// One accepted integration step with the data needed for interpolation
#[derive(Debug, Clone)]
struct StepSegment {
    t0: f64,
    t1: f64,
    y0: AxisState,
    y1: AxisState,
    f0: AxisState,
    f1: AxisState,
}

impl StepSegment {
    /// Cubic Hermite interpolation inside the step
    fn evaluate(&self, t: f64) -> AxisState {
        let h = self.t1 - self.t0;
        if h.abs() < f64::EPSILON {
            return self.y0;
        }
        let s = (t - self.t0) / h;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * self.y0 + (h10 * h) * self.f0 + h01 * self.y1 + (h11 * h) * self.f1
    }
}

/// Continuous solution over the full integration window
#[derive(Debug, Clone)]
pub struct DenseSolution {
    t_start: f64,
    t_end: f64,
    segments: Vec<StepSegment>,
}

impl DenseSolution {
    /// Evaluate the full state `(position, velocity)` at time `t`
    ///
    /// Times outside the window clamp to the nearest endpoint.
    pub fn state(&self, t: f64) -> AxisState {
        let t = t.clamp(self.t_start, self.t_end);

        // Binary search for the segment owning t
        let mut left = 0;
        let mut right = self.segments.len() - 1;
        while left < right {
            let mid = (left + right) / 2;
            if self.segments[mid].t1 < t {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        self.segments[left].evaluate(t)
    }

    /// Evaluate the position component at time `t`
    pub fn position(&self, t: f64) -> f64 {
        self.state(t)[0]
    }

    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }
}

/// Adaptive RK45 solver configuration
#[derive(Debug, Clone)]
pub struct Rk45 {
    pub rtol: f64,
    pub atol: f64,
    pub max_steps: usize,
}

impl Default for Rk45 {
    fn default() -> Self {
        Self {
            rtol: crate::constants::DEFAULT_RTOL,
            atol: crate::constants::DEFAULT_ATOL,
            max_steps: crate::constants::MAX_SOLVER_STEPS,
        }
    }
}

impl Rk45 {
    /// Integrate `y' = f(t, y)` over `t_span`, producing a dense solution
    ///
    /// Fails when the time span is degenerate, the state stops being
    /// finite (division by zero mass and the like), the step size
    /// underflows, or the step budget is exhausted. There is no partial
    /// result on failure.
    pub fn integrate<F>(&self, f: F, y0: AxisState, t_span: (f64, f64)) -> Result<DenseSolution, String>
    where
        F: Fn(f64, AxisState) -> AxisState,
    {
        let (t_start, t_end) = t_span;
        if !t_start.is_finite() || !t_end.is_finite() || t_end <= t_start {
            return Err(format!(
                "invalid time span [{}, {}]: end must be finite and after start",
                t_start, t_end
            ));
        }
        if !is_finite(&y0) {
            return Err("initial state is not finite".to_string());
        }

        let span = t_end - t_start;
        let min_step = span * 1e-14;

        let mut t = t_start;
        let mut y = y0;
        let mut k1 = f(t, y);
        if !is_finite(&k1) {
            return Err("derivative is not finite at the initial state".to_string());
        }

        let mut h = span / 100.0;
        let mut segments = Vec::new();
        let mut evaluations = 0usize;

        while t < t_end {
            evaluations += 1;
            if evaluations > self.max_steps {
                return Err(format!(
                    "integration exceeded {} steps without covering the time span",
                    self.max_steps
                ));
            }
            if h < min_step {
                return Err("step size underflow during integration".to_string());
            }
            if t + h > t_end {
                h = t_end - t;
            }

            let k2 = f(t + C2 * h, y + h * (A21 * k1));
            let k3 = f(t + C3 * h, y + h * (A31 * k1 + A32 * k2));
            let k4 = f(t + C4 * h, y + h * (A41 * k1 + A42 * k2 + A43 * k3));
            let k5 = f(t + C5 * h, y + h * (A51 * k1 + A52 * k2 + A53 * k3 + A54 * k4));
            let k6 = f(t + h, y + h * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5));

            let y_new = y + h * (B1 * k1 + B3 * k3 + B4 * k4 + B5 * k5 + B6 * k6);
            let k7 = f(t + h, y_new);

            if !is_finite(&y_new) || !is_finite(&k7) {
                return Err("trajectory integration produced a non-finite state".to_string());
            }

            let err = h * (E1 * k1 + E3 * k3 + E4 * k4 + E5 * k5 + E6 * k6 + E7 * k7);
            let err_norm = self.error_norm(&err, &y, &y_new);

            if err_norm <= 1.0 {
                segments.push(StepSegment {
                    t0: t,
                    t1: t + h,
                    y0: y,
                    y1: y_new,
                    f0: k1,
                    f1: k7,
                });
                t += h;
                y = y_new;
                k1 = k7;

                let factor = if err_norm == 0.0 {
                    MAX_FACTOR
                } else {
                    (SAFETY * err_norm.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
                };
                h *= factor;
            } else {
                // Rejected: shrink and retry from the same point
                let factor = (SAFETY * err_norm.powf(-0.2)).clamp(MIN_FACTOR, 1.0);
                h *= factor;
            }
        }

        Ok(DenseSolution {
            t_start,
            t_end,
            segments,
        })
    }

    /// Scaled RMS norm of the embedded error estimate
    fn error_norm(&self, err: &AxisState, y: &AxisState, y_new: &AxisState) -> f64 {
        let mut sum = 0.0;
        for i in 0..2 {
            let scale = self.atol + self.rtol * y[i].abs().max(y_new[i].abs());
            let ratio = err[i] / scale;
            sum += ratio * ratio;
        }
        (sum / 2.0).sqrt()
    }
}

fn is_finite(v: &AxisState) -> bool {
    v[0].is_finite() && v[1].is_finite()
}

use log::{
    trace,
    warn
};

use crate::math::function::mathfunction::MathFunction;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;

use super::solvererror::{
    SolverError,
    SolverResult
};

/// Integration stops once the target is closer than this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-10;

/// Steps shorter than this end the integration (covers a zero nominal step).
pub const MINIMUM_STEP: f64 = 1e-14;

/// Classical 4th-order Runge-Kutta solution of `dy/dx = f(x, y)`,
/// `y(x0) = y0`, evaluated on demand.
///
/// Nothing is cached: every evaluation integrates again from `(x0, y0)`
/// towards the requested x, shortening the last step to land on it.
pub struct RungeKuttaSolver<F> {
    rhs: F,
    x0: f64,
    y0: f64,
    step: f64,
}

impl<F> RungeKuttaSolver<F>
    where F: Fn(f64, f64) -> f64 + Send + Sync {
    /// Only the magnitude of `step` is used; the sign follows the target.
    pub fn new(rhs: F, x0: f64, y0: f64, step: f64) -> SolverResult<RungeKuttaSolver<F>> {
        if !(x0.is_finite() && y0.is_finite()) {
            return Err(SolverError::InvalidInitialCondition { x0, y0 });
        }
        if !step.is_finite() {
            return Err(SolverError::InvalidStep(step));
        }
        Ok(RungeKuttaSolver { rhs, x0, y0, step })
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn solve(&self, x_target: f64) -> f64 {
        if x_target.is_nan() {
            return f64::NAN;
        }
        if x_target == self.x0 {
            return self.y0;
        }

        let nominal = self.step.abs().copysign(x_target - self.x0);
        let mut x = self.x0;
        let mut y = self.y0;
        let mut steps = 0_usize;

        loop {
            let remaining = x_target - x;
            if remaining.abs() < CONVERGENCE_TOLERANCE {
                break;
            }
            let h = if nominal.abs() > remaining.abs() { remaining } else { nominal };
            if h.abs() < MINIMUM_STEP {
                break;
            }
            // Below the float spacing of x the position cannot advance.
            if x + h == x {
                warn!("runge-kutta step {:e} vanishes at x = {}, stopping short of {}", h, x, x_target);
                break;
            }

            y = self.advance(x, y, h);
            x += h;
            steps += 1;
        }

        trace!("runge-kutta reached x = {} from x0 = {} in {} steps", x, self.x0, steps);
        y
    }

    fn advance(&self, x: f64, y: f64, h: f64) -> f64 {
        let k1 = (self.rhs)(x, y);
        let k2 = (self.rhs)(x + h / 2.0, y + h * k1 / 2.0);
        let k3 = (self.rhs)(x + h / 2.0, y + h * k2 / 2.0);
        let k4 = (self.rhs)(x + h, y + h * k3);
        y + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }

    /// Samples the solution through `factory`.
    pub fn to_tabulated(
        &self,
        factory: &dyn TabulatedFunctionFactory,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> SolverResult<Box<dyn TabulatedFunction>> {
        Ok(factory.create_from_function(self, x_from, x_to, count)?)
    }
}

impl<F> MathFunction for RungeKuttaSolver<F>
    where F: Fn(f64, f64) -> f64 + Send + Sync {
    fn apply(&self, x: f64) -> f64 {
        self.solve(x)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::tabulated::tabulatedfunctionfactory::ArrayTabulatedFunctionFactory;

    fn exact(x: f64) -> f64 {
        2.0 * x.exp() - x - 1.0
    }

    #[test]
    fn test_linear_problem_accuracy() {
        let coarse = RungeKuttaSolver::new(|x, y| x + y, 0.0, 1.0, 0.01).unwrap();
        let fine = RungeKuttaSolver::new(|x, y| x + y, 0.0, 1.0, 0.001).unwrap();
        let coarse_error = (coarse.apply(1.0) - exact(1.0)).abs();
        let fine_error = (fine.apply(1.0) - exact(1.0)).abs();
        assert!(coarse_error < 1e-5, "coarse error {}", coarse_error);
        assert!(fine_error <= coarse_error, "fine {} vs coarse {}", fine_error, coarse_error);
    }

    #[test]
    fn test_initial_point_and_backwards() {
        let solver = RungeKuttaSolver::new(|_, y| y, 0.0, 1.0, 0.01).unwrap();
        assert_eq!(solver.apply(0.0), 1.0);
        assert_abs_diff_eq!(solver.apply(-1.0), (-1.0_f64).exp(), epsilon = 1e-8);
        // The sign of the nominal step is irrelevant.
        let negative = RungeKuttaSolver::new(|_, y| y, 0.0, 1.0, -0.01).unwrap();
        assert_abs_diff_eq!(negative.apply(0.5), 0.5_f64.exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_lands_on_target_between_steps() {
        let solver = RungeKuttaSolver::new(|_, _| 3.0, 1.0, 0.0, 0.4).unwrap();
        assert_abs_diff_eq!(solver.apply(2.0), 3.0, epsilon = 1e-12);
        assert_eq!(solver.apply(2.0), solver.apply(2.0));
    }

    #[test]
    fn test_zero_step_terminates() {
        let solver = RungeKuttaSolver::new(|_, y| y, 0.0, 2.0, 0.0).unwrap();
        assert_eq!(solver.apply(1.0), 2.0);
    }

    #[test]
    fn test_step_below_float_spacing_terminates() {
        // Near 1e6 adjacent doubles are ~1.2e-10 apart.
        let solver = RungeKuttaSolver::new(|_, y| y, 1.0e6, 1.0, 1.0e-11).unwrap();
        assert_eq!(solver.apply(1.0e6 + 1.0), 1.0);
        assert_eq!(solver.apply(1.0e6 - 1.0), 1.0);
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        assert!(matches!(
            RungeKuttaSolver::new(|_, y| y, 0.0, 1.0, f64::NAN),
            Err(SolverError::InvalidStep(_))
        ));
        assert!(matches!(
            RungeKuttaSolver::new(|_, y| y, f64::INFINITY, 1.0, 0.1),
            Err(SolverError::InvalidInitialCondition { .. })
        ));
    }

    #[test]
    fn test_to_tabulated() {
        let solver = RungeKuttaSolver::new(|x, y| x + y, 0.0, 1.0, 0.01).unwrap();
        let table = solver.to_tabulated(&ArrayTabulatedFunctionFactory, 0.0, 1.0, 11).unwrap();
        assert_eq!(table.count(), 11);
        for point in table.points() {
            assert_abs_diff_eq!(point.y(), exact(point.x()), epsilon = 1e-6);
        }
    }
}

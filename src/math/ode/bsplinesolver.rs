use log::debug;
use nalgebra::{
    DMatrix,
    DVector
};

use crate::math::function::mathfunction::MathFunction;
use crate::math::linear::gaussianelimination::{
    self,
    LinearSolverSettings
};
use crate::math::spline::bsplinebasis::BSplineBasis;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;

use super::boundaryvalueproblem::BoundaryValueProblem;
use super::solvererror::{
    SolverError,
    SolverResult
};

pub const BSPLINE_DEGREE: usize = 3;

pub const MINIMUM_INTERVALS: usize = 4;

// ─────────────────────────────────────────────
// BSplineBoundaryValueSolver
// ─────────────────────────────────────────────
//
// Unknowns are the coefficients c_j of y(x) = Σ c_j B_j(x) over
// N = n_intervals + 1 clamped cubic basis functions.
//
//   row 0        : Σ c_j B_j(a) = ya
//   row i, 1..=N-2: Σ c_j (B_j'' + p B_j' + q B_j)(x_i) = f(x_i)
//   row N - 1    : Σ c_j B_j(b) = yb
//
// x_i is the midpoint of the i-th of N - 2 uniform subintervals of [a, b].
// The knot vector is fixed at construction and never changes afterwards.

/// Cubic B-spline collocation solution of a linear two-point boundary
/// value problem.
#[derive(Debug, Clone)]
pub struct BSplineBoundaryValueSolver {
    basis: BSplineBasis,
    coefficients: Vec<f64>,
}

impl BSplineBoundaryValueSolver {
    pub fn new(problem: &BoundaryValueProblem, n_intervals: usize) -> SolverResult<BSplineBoundaryValueSolver> {
        Self::with_settings(problem, n_intervals, &LinearSolverSettings::default())
    }

    pub fn with_settings(
        problem: &BoundaryValueProblem,
        n_intervals: usize,
        settings: &LinearSolverSettings,
    ) -> SolverResult<BSplineBoundaryValueSolver> {
        if n_intervals < MINIMUM_INTERVALS {
            return Err(SolverError::InvalidIntervalCount {
                n_intervals,
                minimum: MINIMUM_INTERVALS,
            });
        }

        let n = n_intervals + 1;
        let basis = BSplineBasis::clamped_uniform(problem.a(), problem.b(), n, BSPLINE_DEGREE)?;
        let (matrix, rhs) = Self::assemble(problem, &basis);
        let coefficients = gaussianelimination::solve(matrix, rhs, settings)?;

        debug!(
            "b-spline collocation on [{}, {}] solved with {} basis functions",
            problem.a(),
            problem.b(),
            n
        );

        Ok(BSplineBoundaryValueSolver {
            basis,
            coefficients: coefficients.iter().copied().collect(),
        })
    }

    fn assemble(problem: &BoundaryValueProblem, basis: &BSplineBasis) -> (DMatrix<f64>, DVector<f64>) {
        let n = basis.basis_count();
        let (a, b) = (problem.a(), problem.b());
        let mut matrix = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);

        let subinterval = (b - a) / (n - 2) as f64;
        for i in 1..(n - 1) {
            let x = a + (i as f64 - 0.5) * subinterval;
            let p = problem.p().apply(x);
            let q = problem.q().apply(x);
            for j in 0..n {
                matrix[(i, j)] = basis.second_derivative(j, x)
                    + p * basis.derivative(j, x)
                    + q * basis.value(j, x);
            }
            rhs[i] = problem.f().apply(x);
        }

        for j in 0..n {
            matrix[(0, j)] = basis.value(j, a);
            matrix[(n - 1, j)] = basis.value(j, b);
        }
        rhs[0] = problem.ya();
        rhs[n - 1] = problem.yb();

        (matrix, rhs)
    }

    pub fn knots(&self) -> &[f64] {
        self.basis.knots()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn basis(&self) -> &BSplineBasis {
        &self.basis
    }

    /// Samples the spline through `factory`.
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

impl MathFunction for BSplineBoundaryValueSolver {
    /// `Σ c_j B_j(x)`; zero outside `[a, b]`.
    fn apply(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(j, c)| c * self.basis.value(j, x))
            .sum()
    }
}

use std::sync::Arc;

use crate::math::function::mathfunction::{
    MathFunction,
    SharedMathFunction
};
use crate::math::function::simplefunction::ConstantFunction;

use super::solvererror::{
    SolverError,
    SolverResult
};

/// `y'' + p(x) y' + q(x) y = f(x)` on `[a, b]` with `y(a) = ya`, `y(b) = yb`.
#[derive(Clone)]
pub struct BoundaryValueProblem {
    p: SharedMathFunction,
    q: SharedMathFunction,
    f: SharedMathFunction,
    a: f64,
    b: f64,
    ya: f64,
    yb: f64,
}

impl BoundaryValueProblem {
    pub fn new(
        p: SharedMathFunction,
        q: SharedMathFunction,
        f: SharedMathFunction,
        (a, b): (f64, f64),
        (ya, yb): (f64, f64),
    ) -> SolverResult<BoundaryValueProblem> {
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(SolverError::InvalidInterval { a, b });
        }
        if !(ya.is_finite() && yb.is_finite()) {
            return Err(SolverError::InvalidBoundaryValues { ya, yb });
        }
        Ok(BoundaryValueProblem { p, q, f, a, b, ya, yb })
    }

    /// `y'' = f(x)`, i.e. `p = q = 0`.
    pub fn second_order<F: MathFunction + 'static>(
        f: F,
        interval: (f64, f64),
        boundary_values: (f64, f64),
    ) -> SolverResult<BoundaryValueProblem> {
        let zero: SharedMathFunction = Arc::new(ConstantFunction::zero());
        Self::new(Arc::clone(&zero), zero, Arc::new(f), interval, boundary_values)
    }

    pub fn p(&self) -> &SharedMathFunction {
        &self.p
    }

    pub fn q(&self) -> &SharedMathFunction {
        &self.q
    }

    pub fn f(&self) -> &SharedMathFunction {
        &self.f
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn ya(&self) -> f64 {
        self.ya
    }

    pub fn yb(&self) -> f64 {
        self.yb
    }
}

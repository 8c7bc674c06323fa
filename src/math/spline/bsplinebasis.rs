use crate::math::ode::solvererror::{
    SolverError,
    SolverResult
};

/// Step of the symmetric difference used for `B'`.
pub const FIRST_DERIVATIVE_STEP: f64 = 1e-6;

/// Step of the symmetric second difference used for `B''`.
pub const SECOND_DERIVATIVE_STEP: f64 = 1e-5;

/// B-spline basis on a fixed, non-decreasing knot vector.
///
/// Basis functions are evaluated with the Cox–de Boor recursion. The
/// degree-0 indicator is half-open, `[t_i, t_{i+1})`, except that the last
/// non-empty span is closed at the final knot so the basis still sums to one
/// at the right end of a clamped vector.
#[derive(Debug, Clone, PartialEq)]
pub struct BSplineBasis {
    knots: Vec<f64>,
    degree: usize,
}

impl BSplineBasis {
    /// Clamped knot vector with `basis_count` functions of `degree` on
    /// `[a, b]`: each end knot appears `degree + 1` times and the interior
    /// knots are uniformly spaced.
    pub fn clamped_uniform(a: f64, b: f64, basis_count: usize, degree: usize) -> SolverResult<BSplineBasis> {
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(SolverError::InvalidInterval { a, b });
        }
        if basis_count <= degree {
            return Err(SolverError::InvalidBasisCount { basis_count, minimum: degree + 1 });
        }

        let spans = basis_count - degree;
        let width = (b - a) / spans as f64;
        let mut knots = Vec::with_capacity(basis_count + degree + 1);
        knots.extend(std::iter::repeat_n(a, degree + 1));
        knots.extend((1..spans).map(|j| a + j as f64 * width));
        knots.extend(std::iter::repeat_n(b, degree + 1));

        Ok(BSplineBasis { knots, degree })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn basis_count(&self) -> usize {
        self.knots.len() - self.degree - 1
    }

    pub fn lower_bound(&self) -> f64 {
        self.knots[0]
    }

    pub fn upper_bound(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    /// `B_{i, degree}(x)`
    pub fn value(&self, i: usize, x: f64) -> f64 {
        self.cox_de_boor(i, self.degree, x)
    }

    /// `B'_i(x)` by symmetric finite difference.
    pub fn derivative(&self, i: usize, x: f64) -> f64 {
        let h = FIRST_DERIVATIVE_STEP;
        (self.value(i, x + h) - self.value(i, x - h)) / (2.0 * h)
    }

    /// `B''_i(x)` by symmetric second difference.
    pub fn second_derivative(&self, i: usize, x: f64) -> f64 {
        let h = SECOND_DERIVATIVE_STEP;
        (self.value(i, x + h) - 2.0 * self.value(i, x) + self.value(i, x - h)) / (h * h)
    }

    fn cox_de_boor(&self, i: usize, k: usize, x: f64) -> f64 {
        let t = &self.knots;
        if k == 0 {
            let last = t[t.len() - 1];
            let inside = t[i] <= x && x < t[i + 1];
            let closes_last_span = x == last && t[i] < t[i + 1] && t[i + 1] == last;
            return if inside || closes_last_span { 1.0 } else { 0.0 };
        }

        let lhs_span = t[i + k] - t[i];
        let lhs = if lhs_span == 0.0 {
            0.0
        } else {
            (x - t[i]) / lhs_span * self.cox_de_boor(i, k - 1, x)
        };

        let rhs_span = t[i + k + 1] - t[i + 1];
        let rhs = if rhs_span == 0.0 {
            0.0
        } else {
            (t[i + k + 1] - x) / rhs_span * self.cox_de_boor(i + 1, k - 1, x)
        };

        lhs + rhs
    }
}

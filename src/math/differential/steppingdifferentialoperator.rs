use thiserror::Error;

use crate::math::function::mathfunction::MathFunction;

use super::differentialoperator::DifferentialOperator;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DifferentialOperatorError {
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SteppingScheme {
    /// `(f(x) - f(x - h)) / h`
    Left,
    /// `(f(x + h) - f(x)) / h`
    Right,
    /// `(f(x + h) - f(x - h)) / 2h`
    Middle,
}

/// Fixed-step finite-difference operator applicable to any function.
#[derive(Debug, Clone, Copy)]
pub struct SteppingDifferentialOperator {
    step: f64,
    scheme: SteppingScheme,
}

impl SteppingDifferentialOperator {
    pub fn new(scheme: SteppingScheme, step: f64) -> Result<SteppingDifferentialOperator, DifferentialOperatorError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(DifferentialOperatorError::InvalidStep(step));
        }
        Ok(SteppingDifferentialOperator { step, scheme })
    }

    pub fn left(step: f64) -> Result<SteppingDifferentialOperator, DifferentialOperatorError> {
        Self::new(SteppingScheme::Left, step)
    }

    pub fn right(step: f64) -> Result<SteppingDifferentialOperator, DifferentialOperatorError> {
        Self::new(SteppingScheme::Right, step)
    }

    pub fn middle(step: f64) -> Result<SteppingDifferentialOperator, DifferentialOperatorError> {
        Self::new(SteppingScheme::Middle, step)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn scheme(&self) -> SteppingScheme {
        self.scheme
    }

    pub fn set_step(&mut self, step: f64) -> Result<(), DifferentialOperatorError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(DifferentialOperatorError::InvalidStep(step));
        }
        self.step = step;
        Ok(())
    }
}

impl<F: MathFunction> DifferentialOperator<F> for SteppingDifferentialOperator {
    type Output = SteppingDerivative<F>;

    fn derive(&self, function: F) -> SteppingDerivative<F> {
        SteppingDerivative {
            function,
            step: self.step,
            scheme: self.scheme,
        }
    }
}

/// Lazy derivative: every `apply` evaluates the wrapped function twice.
pub struct SteppingDerivative<F> {
    function: F,
    step: f64,
    scheme: SteppingScheme,
}

impl<F: MathFunction> MathFunction for SteppingDerivative<F> {
    fn apply(&self, x: f64) -> f64 {
        let h = self.step;
        match self.scheme {
            SteppingScheme::Left   => (self.function.apply(x) - self.function.apply(x - h)) / h,
            SteppingScheme::Right  => (self.function.apply(x + h) - self.function.apply(x)) / h,
            SteppingScheme::Middle => (self.function.apply(x + h) - self.function.apply(x - h)) / (2.0 * h),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::function::mathfunction::from_fn;
    use crate::math::function::simplefunction::SqrFunction;

    #[test]
    fn test_rejects_bad_steps() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(SteppingDifferentialOperator::left(step).is_err());
            assert!(SteppingDifferentialOperator::right(step).is_err());
        }
        let mut operator = SteppingDifferentialOperator::middle(0.1).unwrap();
        assert!(operator.set_step(-0.1).is_err());
        assert_eq!(operator.step(), 0.1);
    }

    #[test]
    fn test_one_sided_differences_of_square() {
        let left = SteppingDifferentialOperator::left(0.5).unwrap().derive(SqrFunction);
        let right = SteppingDifferentialOperator::right(0.5).unwrap().derive(SqrFunction);
        // (9 - 6.25) / 0.5 and (12.25 - 9) / 0.5
        assert_abs_diff_eq!(left.apply(3.0), 5.5, epsilon = 1e-12);
        assert_abs_diff_eq!(right.apply(3.0), 6.5, epsilon = 1e-12);
    }

    #[test]
    fn test_middle_difference_is_exact_for_quadratic() {
        let derivative = SteppingDifferentialOperator::middle(0.25).unwrap().derive(SqrFunction);
        assert_abs_diff_eq!(derivative.apply(-2.0), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sine_derivative() {
        let derivative = SteppingDifferentialOperator::right(1e-6).unwrap().derive(from_fn(f64::sin));
        assert_abs_diff_eq!(derivative.apply(0.3), 0.3_f64.cos(), epsilon = 1e-5);
    }
}

use super::mathfunction::MathFunction;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFunction;

impl MathFunction for IdentityFunction {
    fn apply(&self, x: f64) -> f64 {
        x
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqrFunction;

impl MathFunction for SqrFunction {
    fn apply(&self, x: f64) -> f64 {
        x * x
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstantFunction {
    value: f64
}

impl ConstantFunction {
    pub fn new(value: f64) -> ConstantFunction {
        ConstantFunction { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn zero() -> ConstantFunction {
        ConstantFunction::new(0.0)
    }

    pub fn unit() -> ConstantFunction {
        ConstantFunction::new(1.0)
    }
}

impl MathFunction for ConstantFunction {
    fn apply(&self, _x: f64) -> f64 {
        self.value
    }
}

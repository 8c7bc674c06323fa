use super::mathfunction::MathFunction;

// ─────────────────────────────────────────────
// CompositeFunction
// ─────────────────────────────────────────────

/// `x ↦ second(first(x))`
pub struct CompositeFunction<F, G> {
    first: F,
    second: G
}

impl<F: MathFunction, G: MathFunction> CompositeFunction<F, G> {
    pub fn new(first: F, second: G) -> CompositeFunction<F, G> {
        CompositeFunction { first, second }
    }
}

impl<F: MathFunction, G: MathFunction> MathFunction for CompositeFunction<F, G> {
    fn apply(&self, x: f64) -> f64 {
        self.second.apply(self.first.apply(x))
    }
}

// ─────────────────────────────────────────────
// Binary arithmetic
// ─────────────────────────────────────────────

macro_rules! binary_function {
    ($(#[$meta:meta])* $name:ident, $op:tt) => {
        $(#[$meta])*
        pub struct $name<F, G> {
            lhs: F,
            rhs: G
        }

        impl<F: MathFunction, G: MathFunction> $name<F, G> {
            pub fn new(lhs: F, rhs: G) -> $name<F, G> {
                $name { lhs, rhs }
            }
        }

        impl<F: MathFunction, G: MathFunction> MathFunction for $name<F, G> {
            fn apply(&self, x: f64) -> f64 {
                self.lhs.apply(x) $op self.rhs.apply(x)
            }
        }
    };
}

binary_function!(
    /// `x ↦ lhs(x) + rhs(x)`
    SumFunction, +);
binary_function!(
    /// `x ↦ lhs(x) - rhs(x)`
    DifferenceFunction, -);
binary_function!(
    /// `x ↦ lhs(x) * rhs(x)`
    ProductFunction, *);
binary_function!(
    /// `x ↦ lhs(x) / rhs(x)`
    QuotientFunction, /);

// ─────────────────────────────────────────────
// PowerFunction
// ─────────────────────────────────────────────

/// `x ↦ base(x)^exponent`
pub struct PowerFunction<F> {
    base: F,
    exponent: f64
}

impl<F: MathFunction> PowerFunction<F> {
    pub fn new(base: F, exponent: f64) -> PowerFunction<F> {
        PowerFunction { base, exponent }
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl<F: MathFunction> MathFunction for PowerFunction<F> {
    fn apply(&self, x: f64) -> f64 {
        self.base.apply(x).powf(self.exponent)
    }
}

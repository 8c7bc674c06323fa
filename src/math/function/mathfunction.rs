use std::sync::Arc;

use super::compositefunction::{
    CompositeFunction,
    DifferenceFunction,
    PowerFunction,
    ProductFunction,
    QuotientFunction,
    SumFunction
};

/// A real function of one real variable.
///
/// Tabulated functions, both ODE solvers and user closures all implement
/// this trait, so they can be combined freely through [`MathFunctionExt`].
/// `Send + Sync` is a supertrait so that `Arc<dyn MathFunction>` can be
/// shared across threads.
pub trait MathFunction: Send + Sync {
    fn apply(&self, x: f64) -> f64;
}

pub type SharedMathFunction = Arc<dyn MathFunction>;

impl<T: MathFunction + ?Sized> MathFunction for Arc<T> {
    fn apply(&self, x: f64) -> f64 {
        (**self).apply(x)
    }
}

impl<T: MathFunction + ?Sized> MathFunction for Box<T> {
    fn apply(&self, x: f64) -> f64 {
        (**self).apply(x)
    }
}

impl<T: MathFunction + ?Sized> MathFunction for &T {
    fn apply(&self, x: f64) -> f64 {
        (**self).apply(x)
    }
}

// ─────────────────────────────────────────────
// FunctionWrapper
// ─────────────────────────────────────────────

/// Lifts a plain closure into a [`MathFunction`].
pub struct FunctionWrapper<F> {
    function: F
}

impl<F> FunctionWrapper<F>
    where F: Fn(f64) -> f64 + Send + Sync {
    pub fn new(function: F) -> FunctionWrapper<F> {
        FunctionWrapper { function }
    }
}

impl<F> MathFunction for FunctionWrapper<F>
    where F: Fn(f64) -> f64 + Send + Sync {
    fn apply(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

pub fn from_fn<F>(function: F) -> FunctionWrapper<F>
    where F: Fn(f64) -> f64 + Send + Sync {
    FunctionWrapper::new(function)
}

// ─────────────────────────────────────────────
// Lazy combinators
// ─────────────────────────────────────────────

/// Combinators available on every sized [`MathFunction`].
///
/// Nothing is evaluated when combining; the operands are captured by value
/// (wrap them in `Arc` first to share) and evaluated on each `apply`.
pub trait MathFunctionExt: MathFunction + Sized {
    /// `x ↦ next(self(x))`
    fn and_then<G: MathFunction>(self, next: G) -> CompositeFunction<Self, G> {
        CompositeFunction::new(self, next)
    }

    /// `x ↦ self(inner(x))`
    fn compose<G: MathFunction>(self, inner: G) -> CompositeFunction<G, Self> {
        CompositeFunction::new(inner, self)
    }

    fn plus<G: MathFunction>(self, rhs: G) -> SumFunction<Self, G> {
        SumFunction::new(self, rhs)
    }

    fn minus<G: MathFunction>(self, rhs: G) -> DifferenceFunction<Self, G> {
        DifferenceFunction::new(self, rhs)
    }

    fn times<G: MathFunction>(self, rhs: G) -> ProductFunction<Self, G> {
        ProductFunction::new(self, rhs)
    }

    /// Division by zero yields a non-finite value, not an error.
    fn divide<G: MathFunction>(self, rhs: G) -> QuotientFunction<Self, G> {
        QuotientFunction::new(self, rhs)
    }

    fn powf(self, exponent: f64) -> PowerFunction<Self> {
        PowerFunction::new(self, exponent)
    }

    fn into_shared(self) -> SharedMathFunction where Self: 'static {
        Arc::new(self)
    }
}

impl<F: MathFunction + Sized> MathFunctionExt for F {}

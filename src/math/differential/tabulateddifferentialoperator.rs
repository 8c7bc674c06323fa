use std::sync::Arc;

use log::debug;

use crate::math::tabulated::synchronizedtabulatedfunction::SynchronizedTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};
use crate::math::tabulated::tabulatedfunctionfactory::{
    ArrayTabulatedFunctionFactory,
    TabulatedFunctionFactory
};

use super::differentialoperator::DifferentialOperator;

/// Differentiates a sample set on its own x-grid.
///
/// The first node uses the forward difference, the last one the backward
/// difference and every interior node the central difference
/// `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])`.
pub struct TabulatedDifferentialOperator {
    factory: Arc<dyn TabulatedFunctionFactory>,
}

impl Default for TabulatedDifferentialOperator {
    fn default() -> Self {
        TabulatedDifferentialOperator::new(Arc::new(ArrayTabulatedFunctionFactory))
    }
}

impl TabulatedDifferentialOperator {
    pub fn new(factory: Arc<dyn TabulatedFunctionFactory>) -> TabulatedDifferentialOperator {
        TabulatedDifferentialOperator { factory }
    }

    pub fn factory(&self) -> &Arc<dyn TabulatedFunctionFactory> {
        &self.factory
    }

    pub fn set_factory(&mut self, factory: Arc<dyn TabulatedFunctionFactory>) {
        self.factory = factory;
    }

    pub fn derive_function(&self, function: &dyn TabulatedFunction) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        let points = function.points();
        let n = points.len();
        if n < 2 {
            return Err(TabulatedFunctionError::InvalidPointCount { count: n, minimum: 2 });
        }

        let x_values: Vec<f64> = points.iter().map(|pt| pt.x()).collect();
        let y_values: Vec<f64> = (0..n)
            .map(|i| {
                let lhs = &points[i.saturating_sub(1)];
                let rhs = &points[(i + 1).min(n - 1)];
                (rhs.y() - lhs.y()) / (rhs.x() - lhs.x())
            })
            .collect();

        debug!("derived tabulated function over {} nodes", n);
        self.factory.create(&x_values, &y_values)
    }

    /// Reads, differentiates and produces the result under one lock on the
    /// source, so no writer can interleave mid-computation.
    pub fn derive_synchronously(
        &self,
        function: &SynchronizedTabulatedFunction,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        function.do_synchronously(|inner| self.derive_function(inner))
    }
}

impl<'a> DifferentialOperator<&'a dyn TabulatedFunction> for TabulatedDifferentialOperator {
    type Output = TabulatedFunctionResult<Box<dyn TabulatedFunction>>;

    fn derive(&self, function: &'a dyn TabulatedFunction) -> Self::Output {
        self.derive_function(function)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::function::mathfunction::from_fn;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use crate::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
    use crate::math::tabulated::tabulatedfunctionfactory::{
        FactoryType,
        LinkedListTabulatedFunctionFactory
    };

    #[test]
    fn test_linear_function_has_constant_derivative() {
        let source = ArrayTabulatedFunction::from_function(&from_fn(|x| 2.0 * x), 0.0, 5.0, 11).unwrap();
        let derivative = TabulatedDifferentialOperator::default().derive(&source as &dyn TabulatedFunction).unwrap();
        assert_eq!(derivative.x_values(), source.x_values());
        for y in derivative.y_values() {
            assert_abs_diff_eq!(y, 2.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_square_on_uniform_grid() {
        let source = LinkedListTabulatedFunction::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
        let derivative = TabulatedDifferentialOperator::default().derive_function(&source).unwrap();
        assert_eq!(derivative.y_values(), vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_two_nodes_and_single_node() {
        let operator = TabulatedDifferentialOperator::default();
        let pair = ArrayTabulatedFunction::new(&[1.0, 3.0], &[1.0, 5.0]).unwrap();
        assert_eq!(operator.derive_function(&pair).unwrap().y_values(), vec![2.0, 2.0]);

        let single = ArrayTabulatedFunction::new(&[1.0], &[1.0]).unwrap();
        assert!(matches!(
            operator.derive_function(&single),
            Err(TabulatedFunctionError::InvalidPointCount { count: 1, minimum: 2 })
        ));
    }

    #[test]
    fn test_factory_selects_storage() {
        let operator = TabulatedDifferentialOperator::new(Arc::new(LinkedListTabulatedFunctionFactory));
        assert_eq!(operator.factory().factory_type(), FactoryType::LinkedList);
    }

    #[test]
    fn test_derive_synchronously() {
        let source = SynchronizedTabulatedFunction::new(Box::new(
            ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[0.0, 3.0, 6.0]).unwrap(),
        ));
        let derivative = TabulatedDifferentialOperator::default().derive_synchronously(&source).unwrap();
        assert_eq!(derivative.y_values(), vec![3.0, 3.0, 3.0]);
    }
}

use std::sync::Arc;

use crate::math::function::point::Point;

use super::tabulatedfunction::{
    TabulatedFunction,
    SAMPLE_EPSILON
};
use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};
use super::tabulatedfunctionfactory::{
    ArrayTabulatedFunctionFactory,
    TabulatedFunctionFactory
};

/// Point-wise arithmetic between two tabulated functions sharing one x-grid.
pub struct TabulatedFunctionOperationService {
    factory: Arc<dyn TabulatedFunctionFactory>,
}

impl Default for TabulatedFunctionOperationService {
    fn default() -> Self {
        TabulatedFunctionOperationService::new(Arc::new(ArrayTabulatedFunctionFactory))
    }
}

impl TabulatedFunctionOperationService {
    pub fn new(factory: Arc<dyn TabulatedFunctionFactory>) -> TabulatedFunctionOperationService {
        TabulatedFunctionOperationService { factory }
    }

    pub fn factory(&self) -> &Arc<dyn TabulatedFunctionFactory> {
        &self.factory
    }

    pub fn set_factory(&mut self, factory: Arc<dyn TabulatedFunctionFactory>) {
        self.factory = factory;
    }

    pub fn as_points(function: &dyn TabulatedFunction) -> Vec<Point> {
        function.points()
    }

    pub fn add(
        &self,
        lhs: &dyn TabulatedFunction,
        rhs: &dyn TabulatedFunction,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        self.combine(lhs, rhs, |a, b| a + b)
    }

    pub fn subtract(
        &self,
        lhs: &dyn TabulatedFunction,
        rhs: &dyn TabulatedFunction,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        self.combine(lhs, rhs, |a, b| a - b)
    }

    pub fn multiply(
        &self,
        lhs: &dyn TabulatedFunction,
        rhs: &dyn TabulatedFunction,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        self.combine(lhs, rhs, |a, b| a * b)
    }

    /// A zero divisor yields an infinite (or NaN) sample, not an error.
    pub fn divide(
        &self,
        lhs: &dyn TabulatedFunction,
        rhs: &dyn TabulatedFunction,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        self.combine(lhs, rhs, |a, b| a / b)
    }

    fn combine(
        &self,
        lhs: &dyn TabulatedFunction,
        rhs: &dyn TabulatedFunction,
        operation: impl Fn(f64, f64) -> f64,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        let lhs_points = Self::as_points(lhs);
        let rhs_points = Self::as_points(rhs);

        if lhs_points.len() != rhs_points.len() {
            return Err(TabulatedFunctionError::InconsistentFunctions(format!(
                "sample counts differ: {} vs {}",
                lhs_points.len(),
                rhs_points.len()
            )));
        }

        let mut x_values = Vec::with_capacity(lhs_points.len());
        let mut y_values = Vec::with_capacity(lhs_points.len());
        for (i, (a, b)) in lhs_points.iter().zip(rhs_points.iter()).enumerate() {
            if (a.x() - b.x()).abs() > SAMPLE_EPSILON {
                return Err(TabulatedFunctionError::InconsistentFunctions(format!(
                    "x values differ at index {}: {} vs {}",
                    i,
                    a.x(),
                    b.x()
                )));
            }
            x_values.push(a.x());
            y_values.push(operation(a.y(), b.y()));
        }

        self.factory.create(&x_values, &y_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use crate::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
    use crate::math::tabulated::tabulatedfunctionfactory::{
        FactoryType,
        LinkedListTabulatedFunctionFactory
    };

    #[test]
    fn test_mixed_storages() {
        let lhs = ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        let rhs = LinkedListTabulatedFunction::new(&[0.0, 1.0, 2.0], &[2.0, 2.0, 0.0]).unwrap();
        let service = TabulatedFunctionOperationService::default();

        assert_eq!(service.add(&lhs, &rhs).unwrap().y_values(), vec![3.0, 4.0, 3.0]);
        assert_eq!(service.subtract(&lhs, &rhs).unwrap().y_values(), vec![-1.0, 0.0, 3.0]);
        assert_eq!(service.multiply(&lhs, &rhs).unwrap().y_values(), vec![2.0, 4.0, 0.0]);

        let quotient = service.divide(&lhs, &rhs).unwrap();
        assert_eq!(quotient.get_y(0).unwrap(), 0.5);
        assert!(quotient.get_y(2).unwrap().is_infinite());
    }

    #[test]
    fn test_injected_factory() {
        let lhs = ArrayTabulatedFunction::new(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        let service = TabulatedFunctionOperationService::new(Arc::new(LinkedListTabulatedFunctionFactory));
        assert_eq!(service.factory().factory_type(), FactoryType::LinkedList);
        assert_eq!(service.add(&lhs, &lhs).unwrap().y_values(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_rejects_inconsistent_grids() {
        let service = TabulatedFunctionOperationService::default();
        let a = ArrayTabulatedFunction::new(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        let b = ArrayTabulatedFunction::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        let c = ArrayTabulatedFunction::new(&[0.0, 1.5], &[1.0, 2.0]).unwrap();
        assert!(matches!(service.add(&a, &b), Err(TabulatedFunctionError::InconsistentFunctions(_))));
        assert!(matches!(service.multiply(&a, &c), Err(TabulatedFunctionError::InconsistentFunctions(_))));
    }
}

use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::mathfunction::MathFunction;

use super::arraytabulatedfunction::ArrayTabulatedFunction;
use super::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use super::tabulatedfunction::TabulatedFunction;
use super::tabulatedfunctionerror::TabulatedFunctionResult;

/// Produces tabulated functions without tying the caller to one storage.
pub trait TabulatedFunctionFactory: Send + Sync {
    fn create(&self, x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>>;

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>>;

    fn factory_type(&self) -> FactoryType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTabulatedFunctionFactory;

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn create(&self, x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        Ok(Box::new(ArrayTabulatedFunction::new(x_values, y_values)?))
    }

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        Ok(Box::new(ArrayTabulatedFunction::from_function(source, x_from, x_to, count)?))
    }

    fn factory_type(&self) -> FactoryType {
        FactoryType::Array
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedListTabulatedFunctionFactory;

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    fn create(&self, x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        Ok(Box::new(LinkedListTabulatedFunction::new(x_values, y_values)?))
    }

    fn create_from_function(
        &self,
        source: &dyn MathFunction,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> TabulatedFunctionResult<Box<dyn TabulatedFunction>> {
        Ok(Box::new(LinkedListTabulatedFunction::from_function(source, x_from, x_to, count)?))
    }

    fn factory_type(&self) -> FactoryType {
        FactoryType::LinkedList
    }
}

// ─────────────────────────────────────────────
// FactoryType
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactoryType {
    #[default]
    Array,
    LinkedList,
}

impl FactoryType {
    pub fn factory(&self) -> Box<dyn TabulatedFunctionFactory> {
        match self {
            FactoryType::Array      => Box::new(ArrayTabulatedFunctionFactory),
            FactoryType::LinkedList => Box::new(LinkedListTabulatedFunctionFactory),
        }
    }
}

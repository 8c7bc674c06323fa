use crate::math::function::mathfunction::MathFunction;
use crate::math::function::point::Point;

use super::interpolation;
use super::tabulatedfunction::{
    sample_function,
    TabulatedFunction,
    SAMPLE_EPSILON
};
use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};
use super::validation::validate_samples;

/// Tabulated function backed by two parallel dense vectors.
///
/// Positional access is O(1), x lookups use binary search, insert and
/// remove shift the tail of both vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTabulatedFunction {
    x_values: Vec<f64>,
    y_values: Vec<f64>
}

impl ArrayTabulatedFunction {
    /// Copies both slices, so later changes to the caller's data are not seen.
    pub fn new(x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<ArrayTabulatedFunction> {
        validate_samples(x_values, y_values)?;
        Ok(ArrayTabulatedFunction {
            x_values: x_values.to_vec(),
            y_values: y_values.to_vec(),
        })
    }

    pub fn from_function(
        source: &dyn MathFunction,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> TabulatedFunctionResult<ArrayTabulatedFunction> {
        let (x_values, y_values) = sample_function(source, x_from, x_to, count, 2)?;
        Ok(ArrayTabulatedFunction { x_values, y_values })
    }

    fn check_index(&self, index: usize) -> TabulatedFunctionResult<()> {
        if index >= self.x_values.len() {
            return Err(TabulatedFunctionError::IndexOutOfBounds {
                index,
                count: self.x_values.len(),
            });
        }
        Ok(())
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn count(&self) -> usize {
        self.x_values.len()
    }

    fn get_x(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.check_index(index)?;
        Ok(self.x_values[index])
    }

    fn get_y(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.check_index(index)?;
        Ok(self.y_values[index])
    }

    fn set_y(&mut self, index: usize, value: f64) -> TabulatedFunctionResult<()> {
        self.check_index(index)?;
        self.y_values[index] = value;
        Ok(())
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        let upper = self.x_values.partition_point(|&v| v < x);
        let candidates = [upper.checked_sub(1), Some(upper)];
        candidates
            .into_iter()
            .flatten()
            .filter(|&i| i < self.x_values.len())
            .find(|&i| (self.x_values[i] - x).abs() < SAMPLE_EPSILON)
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.y_values
            .iter()
            .position(|&v| (v - y).abs() < SAMPLE_EPSILON)
    }

    fn floor_index_of_x(&self, x: f64) -> usize {
        let count = self.x_values.len();
        if x < self.x_values[0] {
            0
        } else if x > self.x_values[count - 1] {
            count
        } else {
            self.x_values
                .partition_point(|&v| v <= x)
                .saturating_sub(1)
        }
    }

    fn first(&self) -> Point {
        Point::new(self.x_values[0], self.y_values[0])
    }

    fn last(&self) -> Point {
        let i = self.x_values.len() - 1;
        Point::new(self.x_values[i], self.y_values[i])
    }

    fn segment(&self, index: usize) -> (Point, Point) {
        (
            Point::new(self.x_values[index], self.y_values[index]),
            Point::new(self.x_values[index + 1], self.y_values[index + 1]),
        )
    }

    fn insert(&mut self, x: f64, y: f64) -> TabulatedFunctionResult<()> {
        if !x.is_finite() {
            return Err(TabulatedFunctionError::NonFiniteValue { index: self.count(), value: x });
        }
        if let Some(index) = self.index_of_x(x) {
            self.y_values[index] = y;
            return Ok(());
        }
        let position = self.x_values.partition_point(|&v| v < x);
        self.x_values.insert(position, x);
        self.y_values.insert(position, y);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> TabulatedFunctionResult<()> {
        self.check_index(index)?;
        if self.x_values.len() == 1 {
            return Err(TabulatedFunctionError::LastSampleRemoval);
        }
        self.x_values.remove(index);
        self.y_values.remove(index);
        Ok(())
    }

    fn points(&self) -> Vec<Point> {
        self.x_values
            .iter()
            .zip(self.y_values.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }

    fn x_values(&self) -> Vec<f64> {
        self.x_values.clone()
    }

    fn y_values(&self) -> Vec<f64> {
        self.y_values.clone()
    }
}

impl MathFunction for ArrayTabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        interpolation::evaluate(self, x)
    }
}

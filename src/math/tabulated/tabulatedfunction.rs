use crate::math::function::mathfunction::MathFunction;
use crate::math::function::point::Point;

use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};

/// Tolerance used when matching a requested x (or y) against stored samples.
pub const SAMPLE_EPSILON: f64 = 1e-10;

/// A real function stored as a finite set of samples with strictly
/// increasing x values.
///
/// A tabulated function always holds at least one sample. Storage
/// implementations only provide the accessors below; evaluation between and
/// outside samples is shared in [`super::interpolation`].
///
/// Storages carry no internal synchronization. Wrap them in
/// [`super::synchronizedtabulatedfunction::SynchronizedTabulatedFunction`]
/// before sharing between writer and reader threads.
pub trait TabulatedFunction: MathFunction {
    fn count(&self) -> usize;

    fn get_x(&self, index: usize) -> TabulatedFunctionResult<f64>;

    fn get_y(&self, index: usize) -> TabulatedFunctionResult<f64>;

    fn set_y(&mut self, index: usize, value: f64) -> TabulatedFunctionResult<()>;

    /// Index of the sample whose x lies within [`SAMPLE_EPSILON`] of `x`.
    fn index_of_x(&self, x: f64) -> Option<usize>;

    /// Index of the first sample whose y lies within [`SAMPLE_EPSILON`] of `y`.
    fn index_of_y(&self, y: f64) -> Option<usize>;

    /// `0` left of the domain, `count` right of it, otherwise the `i` with
    /// `x_i <= x < x_{i+1}` (the last index when `x` is the right bound).
    fn floor_index_of_x(&self, x: f64) -> usize;

    fn first(&self) -> Point;

    fn last(&self) -> Point;

    /// Samples `index` and `index + 1`.
    ///
    /// # Panics
    /// If `index + 1 >= count`.
    fn segment(&self, index: usize) -> (Point, Point);

    /// Replaces the y of an existing sample (matched within
    /// [`SAMPLE_EPSILON`]) or splices a new one in x order.
    fn insert(&mut self, x: f64, y: f64) -> TabulatedFunctionResult<()>;

    /// Fails on an out-of-range index and when only one sample is left.
    fn remove(&mut self, index: usize) -> TabulatedFunctionResult<()>;

    /// All samples in increasing x order.
    fn points(&self) -> Vec<Point>;

    fn left_bound(&self) -> f64 {
        self.first().x()
    }

    fn right_bound(&self) -> f64 {
        self.last().x()
    }

    fn x_values(&self) -> Vec<f64> {
        self.points().iter().map(|pt| pt.x()).collect()
    }

    fn y_values(&self) -> Vec<f64> {
        self.points().iter().map(|pt| pt.y()).collect()
    }
}

/// Samples `source` at `count` equally spaced points over `[x_from, x_to]`.
///
/// Reversed bounds are swapped. A degenerate interval (`x_from == x_to`)
/// yields a single sample since equal x values cannot coexist. At least two
/// points are always required.
pub fn sample_function(
    source: &dyn MathFunction,
    x_from: f64,
    x_to: f64,
    count: usize,
    minimum_count: usize,
) -> TabulatedFunctionResult<(Vec<f64>, Vec<f64>)> {
    let minimum = minimum_count.max(2);
    if count < minimum {
        return Err(TabulatedFunctionError::InvalidPointCount { count, minimum });
    }
    if !x_from.is_finite() {
        return Err(TabulatedFunctionError::NonFiniteValue { index: 0, value: x_from });
    }
    if !x_to.is_finite() {
        return Err(TabulatedFunctionError::NonFiniteValue { index: count - 1, value: x_to });
    }

    let (lhs, rhs) = if x_from <= x_to { (x_from, x_to) } else { (x_to, x_from) };
    if lhs == rhs {
        return Ok((vec![lhs], vec![source.apply(lhs)]));
    }

    let step = (rhs - lhs) / (count - 1) as f64;
    let x_values: Vec<f64> = (0..count)
        .map(|i| if i == count - 1 { rhs } else { lhs + i as f64 * step })
        .collect();
    let y_values = x_values.iter().map(|&x| source.apply(x)).collect();
    Ok((x_values, y_values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::mathfunction::from_fn;

    #[test]
    fn test_sample_function_swaps_reversed_bounds() {
        let (xs, ys) = sample_function(&from_fn(|x| 2.0 * x), 4.0, 0.0, 5, 2).unwrap();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ys, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_sample_function_degenerate_interval() {
        let (xs, ys) = sample_function(&from_fn(|x| x + 1.0), 2.0, 2.0, 10, 2).unwrap();
        assert_eq!(xs, vec![2.0]);
        assert_eq!(ys, vec![3.0]);
    }

    #[test]
    fn test_sample_function_rejects_small_count() {
        let result = sample_function(&from_fn(|x| x), 0.0, 1.0, 1, 2);
        assert!(matches!(
            result,
            Err(TabulatedFunctionError::InvalidPointCount { count: 1, minimum: 2 })
        ));
    }
}

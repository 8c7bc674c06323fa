// ─────────────────────────────────────────────
// Linear interpolation / extrapolation
// ─────────────────────────────────────────────
//
// Written once against the accessor contract of `TabulatedFunction`
// (first / last / segment / index_of_x / floor_index_of_x), so both
// storages evaluate identically regardless of layout.

use crate::math::function::point::Point;

use super::tabulatedfunction::TabulatedFunction;

/// `y1 + (x - x1) * (y2 - y1) / (x2 - x1)`
#[inline]
pub fn interpolate(x: f64, lhs: &Point, rhs: &Point) -> f64 {
    lhs.y() + (x - lhs.x()) * Point::slope(lhs, rhs)
}

/// Extends the first segment to the left of the domain.
pub fn extrapolate_left<T: TabulatedFunction + ?Sized>(function: &T, x: f64) -> f64 {
    if function.count() == 1 {
        return function.first().y();
    }
    let (lhs, rhs) = function.segment(0);
    interpolate(x, &lhs, &rhs)
}

/// Extends the last segment to the right of the domain.
pub fn extrapolate_right<T: TabulatedFunction + ?Sized>(function: &T, x: f64) -> f64 {
    let count = function.count();
    if count == 1 {
        return function.last().y();
    }
    let (lhs, rhs) = function.segment(count - 2);
    interpolate(x, &lhs, &rhs)
}

/// Evaluates a tabulated function anywhere on the real line.
pub fn evaluate<T: TabulatedFunction + ?Sized>(function: &T, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let first = function.first();
    if function.count() == 1 {
        return first.y();
    }
    if x == first.x() {
        return first.y();
    }
    let last = function.last();
    if x == last.x() {
        return last.y();
    }

    if x < first.x() {
        return extrapolate_left(function, x);
    }
    if x > last.x() {
        return extrapolate_right(function, x);
    }

    if let Some(index) = function.index_of_x(x) {
        if let Ok(y) = function.get_y(index) {
            return y;
        }
    }

    let floor = function.floor_index_of_x(x).min(function.count() - 2);
    let (lhs, rhs) = function.segment(floor);
    interpolate(x, &lhs, &rhs)
}

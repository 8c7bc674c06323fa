use serde::{
    Deserialize,
    Serialize
};

/// A single `(x, y)` sample handed out when walking a tabulated function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// `(rhs.y - lhs.y) / (rhs.x - lhs.x)`
    pub fn slope(lhs: &Point, rhs: &Point) -> f64 {
        (rhs.y - lhs.y) / (rhs.x - lhs.x)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

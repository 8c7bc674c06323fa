use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabulatedFunctionError {
    #[error("x and y arrays differ in length: {x_len} vs {y_len}")]
    ArrayLengthMismatch { x_len: usize, y_len: usize },

    #[error("a tabulated function needs at least one sample")]
    EmptySamples,

    #[error("x values are not strictly increasing at index {index}")]
    NotStrictlyIncreasing { index: usize },

    #[error("non-finite value {value} found at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("invalid point count {count}, at least {minimum} required")]
    InvalidPointCount { count: usize, minimum: usize },

    #[error("declared count {declared} does not match {actual} stored samples")]
    CountMismatch { declared: usize, actual: usize },

    #[error("index {index} out of bounds for {count} samples")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("cannot remove the last remaining sample")]
    LastSampleRemoval,

    #[error("inconsistent functions: {0}")]
    InconsistentFunctions(String),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type TabulatedFunctionResult<T> = Result<T, TabulatedFunctionError>;

use thiserror::Error;

use crate::math::tabulated::tabulatedfunctionerror::TabulatedFunctionError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("at least {minimum} intervals required, got {n_intervals}")]
    InvalidIntervalCount { n_intervals: usize, minimum: usize },

    #[error("at least {minimum} basis functions required, got {basis_count}")]
    InvalidBasisCount { basis_count: usize, minimum: usize },

    #[error("invalid interval [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("step must be finite, got {0}")]
    InvalidStep(f64),

    #[error("initial condition must be finite, got ({x0}, {y0})")]
    InvalidInitialCondition { x0: f64, y0: f64 },

    #[error("boundary values must be finite, got ({ya}, {yb})")]
    InvalidBoundaryValues { ya: f64, yb: f64 },

    #[error("matrix is singular at row {row}")]
    SingularMatrix { row: usize },

    #[error("dimension mismatch: {rows}x{cols} matrix with rhs of length {rhs}")]
    DimensionMismatch { rows: usize, cols: usize, rhs: usize },

    #[error(transparent)]
    Tabulation(#[from] TabulatedFunctionError),
}

pub type SolverResult<T> = Result<T, SolverError>;

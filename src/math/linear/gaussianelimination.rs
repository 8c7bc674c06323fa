use log::warn;
use nalgebra::{
    DMatrix,
    DVector
};
use serde::{
    Deserialize,
    Serialize
};

use crate::math::ode::solvererror::SolverError;

/// What to do when the best available pivot is (numerically) zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Substitute `±pivot_tolerance` and continue; the result is finite but
    /// may be meaningless for a genuinely singular system.
    #[default]
    Clamp,
    /// Fail with [`SolverError::SingularMatrix`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearSolverSettings {
    pub pivot_policy: PivotPolicy,
    pub pivot_tolerance: f64,
}

impl Default for LinearSolverSettings {
    fn default() -> Self {
        LinearSolverSettings {
            pivot_policy: PivotPolicy::Clamp,
            pivot_tolerance: 1e-12,
        }
    }
}

/// Solves `matrix * x = rhs` by Gaussian elimination with partial pivoting.
///
/// Both arguments are consumed and overwritten during elimination.
pub fn solve(
    mut matrix: DMatrix<f64>,
    mut rhs: DVector<f64>,
    settings: &LinearSolverSettings,
) -> Result<DVector<f64>, SolverError> {
    let n = matrix.nrows();
    if matrix.ncols() != n || rhs.len() != n {
        return Err(SolverError::DimensionMismatch {
            rows: n,
            cols: matrix.ncols(),
            rhs: rhs.len(),
        });
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| matrix[(a, col)].abs().total_cmp(&matrix[(b, col)].abs()))
            .unwrap_or(col);
        if pivot_row != col {
            matrix.swap_rows(pivot_row, col);
            rhs.swap_rows(pivot_row, col);
        }

        if matrix[(col, col)].abs() < settings.pivot_tolerance {
            match settings.pivot_policy {
                PivotPolicy::Reject => return Err(SolverError::SingularMatrix { row: col }),
                PivotPolicy::Clamp => {
                    warn!(
                        "near-zero pivot {:e} at row {} clamped to {:e}",
                        matrix[(col, col)],
                        col,
                        settings.pivot_tolerance
                    );
                    matrix[(col, col)] = settings.pivot_tolerance.copysign(matrix[(col, col)]);
                }
            }
        }

        let pivot = matrix[(col, col)];
        for row in (col + 1)..n {
            let factor = matrix[(row, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let delta = factor * matrix[(col, k)];
                matrix[(row, k)] -= delta;
            }
            let delta = factor * rhs[col];
            rhs[row] -= delta;
        }
    }

    let mut solution = DVector::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n)
            .map(|k| matrix[(row, k)] * solution[k])
            .sum();
        solution[row] = (rhs[row] - tail) / matrix[(row, row)];
    }
    Ok(solution)
}

use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};

pub fn check_length_is_the_same(x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<()> {
    if x_values.len() != y_values.len() {
        return Err(TabulatedFunctionError::ArrayLengthMismatch {
            x_len: x_values.len(),
            y_len: y_values.len(),
        });
    }
    Ok(())
}

/// Every x must be finite and strictly greater than its predecessor.
pub fn check_sorted(x_values: &[f64]) -> TabulatedFunctionResult<()> {
    for (index, &x) in x_values.iter().enumerate() {
        if !x.is_finite() {
            return Err(TabulatedFunctionError::NonFiniteValue { index, value: x });
        }
        if index > 0 && x_values[index - 1] >= x {
            return Err(TabulatedFunctionError::NotStrictlyIncreasing { index });
        }
    }
    Ok(())
}

/// Checks shared by every storage constructor taking raw arrays.
pub fn validate_samples(x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<()> {
    check_length_is_the_same(x_values, y_values)?;
    if x_values.is_empty() {
        return Err(TabulatedFunctionError::EmptySamples);
    }
    check_sorted(x_values)
}

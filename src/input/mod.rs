//! Module defining the classification logic that assigns a data type to each
//! line of user-provided input.

use crate::domain::DataType;


/// Assigns a [`DataType`] to a non-empty, trimmed line of text.
///
/// The detection order is fixed and the first match wins:
///
/// 1. A full parse as a signed 64-bit integer makes the line an integer.
///    Values with no fractional part but outside the `i64` range fall
///    through to the float check rather than being treated as integers.
/// 2. A full parse as a *finite* floating-point number makes the line a
///    float. `f64` parsing accepts spellings like `NaN`, `inf` and
///    `infinity` and produces non-finite values for overflowing exponents;
///    those are rejected here and fall through to string.
/// 3. Everything else is a string.
///
/// Total and deterministic: every input maps to exactly one type.
pub(crate) fn classify(line: &str) -> DataType {
    if line.parse::<i64>().is_ok() {
        return DataType::Integer;
    }

    match line.parse::<f64>() {
        Ok(value) if value.is_finite() => DataType::Float,
        _ => DataType::String,
    }
}

use crate::{error::InterpreterError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, integral and within the
/// range `f64` represents exactly.
///
/// ## Errors
/// Returns `InvalidArgument` for non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use spl::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5, 1).is_err());
/// assert!(f64_to_i64_checked(1e20, 1).is_err());
/// assert!(f64_to_i64_checked(f64::NAN, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InterpreterError::InvalidArgument { details: format!("{value:?} is not a whole number"),
                                                       line });
    }
    if value.abs() > MAX_SAFE_INT as f64 {
        return Err(InterpreterError::InvalidArgument { details: format!("{value:?} is too large"),
                                                       line });
    }
    Ok(value as i64)
}

/// Converts an `f64` to an `i32`, for process exit codes.
///
/// ## Errors
/// Returns `InvalidArgument` if the value is not a whole number in `i32`
/// range.
///
/// ## Example
/// ```
/// use spl::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(3.0, 1).unwrap(), 3);
/// assert!(f64_to_i32_checked(3e10, 1).is_err());
/// ```
pub fn f64_to_i32_checked(value: f64, line: usize) -> EvalResult<i32> {
    let wide = f64_to_i64_checked(value, line)?;
    i32::try_from(wide).map_err(|_| InterpreterError::InvalidArgument { details: format!("{wide} is out of range"),
                                                                         line })
}

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `InvalidArgument` if the magnitude exceeds [`MAX_SAFE_INT`].
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(InterpreterError::InvalidArgument { details: format!("{value} is too large"),
                                                       line });
    }
    Ok(value as f64)
}

/// Converts a `usize` (a length or a count) to `f64`.
///
/// ## Errors
/// Returns `InvalidArgument` if the value exceeds [`MAX_SAFE_INT`].
///
/// ## Example
/// ```
/// use spl::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(100, 0).unwrap(), 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(wide) if wide <= MAX_SAFE_INT => Ok(value as f64),
        _ => Err(InterpreterError::InvalidArgument { details: format!("{value} is too large"),
                                                     line }),
    }
}

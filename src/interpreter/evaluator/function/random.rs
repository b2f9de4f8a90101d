use rand::Rng;

use crate::{
    error::InterpreterError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Returns a random whole number between the two arguments, both inclusive.
///
/// Both bounds must be whole numbers and the first may not exceed the second.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::function::random::nasumican, value::core::Value};
///
/// let v = nasumican(&[Value::Number(1.0), Value::Number(6.0)], 1).unwrap();
/// let Value::Number(n) = v else { panic!("expected a number") };
///
/// assert!((1.0..=6.0).contains(&n));
/// assert_eq!(n.fract(), 0.0);
/// ```
pub fn nasumican(args: &[Value], line: usize) -> EvalResult<Value> {
    let min = f64_to_i64_checked(args[0].as_number("a lower bound", line)?, line)?;
    let max = f64_to_i64_checked(args[1].as_number("an upper bound", line)?, line)?;

    if min > max {
        return Err(InterpreterError::InvalidArgument { details: format!("empty range {min} to {max}"),
                                                       line });
    }

    let n = rand::thread_rng().gen_range(min..=max);
    Ok(Value::Number(i64_to_f64_checked(n, line)?))
}

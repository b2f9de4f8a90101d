use crate::{
    error::InterpreterError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i32_checked,
};

/// Requests the end of the program.
///
/// The optional argument is the status code and must be a whole number;
/// without it the status is `0`. The request travels up as
/// `InterpreterError::Exit`, so nothing after the call runs and the front end
/// decides how to end the process.
///
/// # Example
/// ```
/// use spl::{
///     error::InterpreterError,
///     interpreter::{evaluator::function::exit::izadji, value::core::Value},
/// };
///
/// let err = izadji(&[Value::Number(2.0)], 1).unwrap_err();
/// assert_eq!(err, InterpreterError::Exit { code: 2 });
/// ```
pub fn izadji(args: &[Value], line: usize) -> EvalResult<Value> {
    let code = match args.first() {
        Some(value) => f64_to_i32_checked(value.as_number("a status code", line)?, line)?,
        None => 0,
    };

    Err(InterpreterError::Exit { code })
}

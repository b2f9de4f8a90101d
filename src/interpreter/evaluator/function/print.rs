use std::io::{self, Write};

use crate::{
    error::InterpreterError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Prints its arguments to standard output, separated by spaces and followed
/// by a newline.
///
/// Any number of arguments is accepted. Values are formatted using their
/// `Display` implementation.
///
/// # Returns
/// `Value::Null`.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::function::print::napisi, value::core::Value};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// let result = napisi(&[Value::from("x ="), Value::Number(42.0)], 1).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn napisi(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").map_err(|e| InterpreterError::Io { details: e.to_string(),
                                                                  line })?;
    Ok(Value::Null)
}

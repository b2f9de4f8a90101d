use std::io::{self, BufRead, Write};

use crate::{
    error::InterpreterError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Reads one line from standard input and returns it as text.
///
/// An optional argument is printed first as a prompt, without a newline. The
/// trailing line break is removed; at end of input the result is empty text.
pub fn unos(args: &[Value], line: usize) -> EvalResult<Value> {
    let io_error = |e: io::Error| InterpreterError::Io { details: e.to_string(),
                                                         line };

    if let Some(prompt) = args.first() {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}").map_err(io_error)?;
        stdout.flush().map_err(io_error)?;
    }

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).map_err(io_error)?;

    let trimmed = input.trim_end_matches(['\n', '\r']);
    Ok(Value::from(trimmed))
}

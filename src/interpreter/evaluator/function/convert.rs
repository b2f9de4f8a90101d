use crate::{
    ast::DeclaredType,
    error::InterpreterError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, types::type_name_of},
    },
    util::num::usize_to_f64_checked,
};

/// Returns the name of the first declared type the argument satisfies.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::function::convert::tip, value::core::Value};
///
/// assert_eq!(tip(&[Value::Bool(true)], 1).unwrap(), Value::from("bool"));
/// assert_eq!(tip(&[Value::Null], 1).unwrap(), Value::from("promenljiva"));
/// ```
pub fn tip(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::from(type_name_of(&args[0])))
}

/// Converts a value to the type named by the second argument.
///
/// - `niska` / `niz`: the value's display form.
/// - `broj`: text is parsed as a number; booleans become `1` or `0`.
/// - `bool`: the value's truthiness.
/// - `promenljiva`: the value unchanged.
///
/// Any conversion that is not possible, including an unknown type name,
/// yields `null` rather than an error.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::function::convert::pretvori, value::core::Value};
///
/// let n = pretvori(&[Value::from("12.5"), Value::from("broj")], 1).unwrap();
/// assert_eq!(n, Value::Number(12.5));
///
/// let bad = pretvori(&[Value::from("abc"), Value::from("broj")], 1).unwrap();
/// assert_eq!(bad, Value::Null);
/// ```
pub fn pretvori(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = &args[0];
    let Value::Text(type_name) = &args[1] else {
        return Ok(Value::Null);
    };
    let Some(target) = DeclaredType::from_name(type_name) else {
        return Ok(Value::Null);
    };

    let converted = match target {
        DeclaredType::Text => Value::Text(value.to_string()),
        DeclaredType::Number => match value {
            Value::Number(n) => Value::Number(*n),
            Value::Text(s) => s.trim().parse().map_or(Value::Null, Value::Number),
            Value::Bool(b) => Value::Number(if *b { 1.0 } else { 0.0 }),
            _ => Value::Null,
        },
        DeclaredType::Boolean => match value.is_truthy(line) {
            Ok(truthy) => Value::Bool(truthy),
            Err(_) => Value::Null,
        },
        DeclaredType::Any => value.clone(),
    };

    Ok(converted)
}

/// Returns the length of a text (in characters) or of an argument list.
///
/// # Errors
/// Returns `InvalidArgument` for any other value.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::function::convert::duzina, value::core::Value};
///
/// assert_eq!(duzina(&[Value::from("šta")], 1).unwrap(), Value::Number(3.0));
/// ```
pub fn duzina(args: &[Value], line: usize) -> EvalResult<Value> {
    let length = match &args[0] {
        Value::Text(s) => s.chars().count(),
        Value::List(items) => items.len(),
        other => {
            return Err(InterpreterError::InvalidArgument { details: format!("cannot take the length of {}",
                                                                            other.kind()),
                                                           line });
        },
    };

    Ok(Value::Number(usize_to_f64_checked(length, line)?))
}

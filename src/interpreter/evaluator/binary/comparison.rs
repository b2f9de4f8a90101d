use std::cmp::Ordering;

use crate::{
    ast::CompareOperator,
    interpreter::{
        evaluator::{binary::core::unsupported, core::EvalResult, utils::strict_eq},
        value::core::Value,
    },
};

/// Evaluates a comparison between two values.
///
/// `==` and `!=` accept any pair of tags: values of different tags are
/// unequal, and `null == null` holds. The ordering operators accept two
/// numbers, two texts or two booleans.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The boolean outcome of the comparison.
///
/// # Example
/// ```
/// use spl::{
///     ast::CompareOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
/// };
///
/// assert!(compare(CompareOperator::Equal, &Value::Null, &Value::Null, 1).unwrap());
/// assert!(compare(CompareOperator::NotEqual, &Value::from(5.0), &Value::Null, 1).unwrap());
/// assert!(compare(CompareOperator::Less, &Value::from("a"), &Value::from("b"), 1).unwrap());
/// assert!(compare(CompareOperator::Less, &Value::from("a"), &Value::from(1.0), 1).is_err());
/// ```
pub fn compare(op: CompareOperator, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match op {
        CompareOperator::Equal => strict_eq(left, right, line),
        CompareOperator::NotEqual => strict_eq(left, right, line).map(|eq| !eq),
        CompareOperator::Less => {
            order(op, left, right, line).map(|o| o == Some(Ordering::Less))
        },
        CompareOperator::LessEqual => {
            order(op, left, right, line).map(|o| matches!(o, Some(Ordering::Less | Ordering::Equal)))
        },
        CompareOperator::Greater => {
            order(op, left, right, line).map(|o| o == Some(Ordering::Greater))
        },
        CompareOperator::GreaterEqual => {
            order(op, left, right, line).map(|o| {
                                            matches!(o, Some(Ordering::Greater | Ordering::Equal))
                                        })
        },
    }
}

/// Orders two values of the same orderable tag.
///
/// Unordered numbers (NaN) give `None` and satisfy no ordering operator.
fn order(op: CompareOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ => Err(unsupported(op, left, right, line)),
    }
}

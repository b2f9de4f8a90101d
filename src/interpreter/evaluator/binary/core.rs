use crate::{
    ast::{BinaryOperator, Expr},
    error::InterpreterError,
    interpreter::{
        evaluator::{
            binary::comparison::compare,
            core::{Context, EvalResult},
            environment::Locals,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary expression.
    ///
    /// `and` and `ili` evaluate their right operand only when needed. Every
    /// other operator evaluates the left operand, then the right one, and
    /// dispatches on the pair of runtime tags.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize,
                                 locals: &Locals)
                                 -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logical(left, op, right, line, locals);
        }

        let left = self.eval(left, locals)?;
        let right = self.eval(right, locals)?;
        eval_binary(op, &left, &right, line)
    }
}

/// Applies an arithmetic or comparison operator to two evaluated operands.
///
/// - `+` adds numbers or concatenates text.
/// - `-`, `*` and `/` require numbers; dividing by zero is an error.
/// - Comparisons produce a boolean.
///
/// Any other pairing fails with `UnsupportedOperands`, and any operation on an
/// uninitialized value fails with `UninitializedValue`.
///
/// # Example
/// ```
/// use spl::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::from("hi"), &Value::from("!"), 1);
/// assert_eq!(sum.unwrap(), Value::from("hi!"));
///
/// let bad = eval_binary(BinaryOperator::Add, &Value::from("1"), &Value::from(1.0), 1);
/// assert!(bad.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    if matches!(left, Value::Uninitialized) || matches!(right, Value::Uninitialized) {
        return Err(InterpreterError::UninitializedValue { line });
    }

    match (op, left, right) {
        (BinaryOperator::Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (BinaryOperator::Add, Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{a}{b}"))),
        (BinaryOperator::Sub, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        (BinaryOperator::Mul, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (BinaryOperator::Div, Value::Number(_), Value::Number(b)) if *b == 0.0 => {
            Err(InterpreterError::DivisionByZero { line })
        },
        (BinaryOperator::Div, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
        (BinaryOperator::Compare(cmp), _, _) => Ok(Value::Bool(compare(cmp, left, right, line)?)),
        _ => Err(unsupported(op, left, right, line)),
    }
}

/// Builds the error for an operator applied to operand types it does not
/// accept.
pub(crate) fn unsupported(op: impl ToString, left: &Value, right: &Value, line: usize) -> InterpreterError {
    InterpreterError::UnsupportedOperands { op: op.to_string(),
                                            left: left.kind().to_string(),
                                            right: right.kind().to_string(),
                                            line }
}

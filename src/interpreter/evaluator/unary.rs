use crate::{
    ast::{Expr, UnaryOperator},
    error::InterpreterError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Locals,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a unary operation, then applies it.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize,
                                locals: &Locals)
                                -> EvalResult<Value> {
        let value = self.eval(expr, locals)?;
        eval_unary(op, &value, line)
    }
}

/// Applies a unary operator to a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. Any other operand type is an error.
///
/// # Example
/// ```
/// use spl::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(2.5), 1).unwrap();
/// assert_eq!(v, Value::Number(-2.5));
///
/// assert!(eval_unary(UnaryOperator::Negate, &Value::Bool(true), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (_, Value::Uninitialized) => Err(InterpreterError::UninitializedValue { line }),
        (_, other) => Err(InterpreterError::UnsupportedOperand { op:      op.to_string(),
                                                                 operand: other.kind().to_string(),
                                                                 line }),
    }
}

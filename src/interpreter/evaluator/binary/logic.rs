use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Locals,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `and` / `ili` with short-circuiting.
    ///
    /// The left operand is evaluated first. `and` stops on a falsy left
    /// operand and `ili` on a truthy one; otherwise the result is the
    /// truthiness of the right operand. The result is always a boolean.
    ///
    /// # Example
    /// ```
    /// use spl::{interpreter::{evaluator::core::Context, value::core::Value}, parse_source};
    ///
    /// let mut context = Context::new();
    /// // `nepostojeca` is never called.
    /// let block = parse_source("vrati false and nepostojeca()").unwrap();
    ///
    /// assert_eq!(context.run(&block).unwrap(), Value::Bool(false));
    /// ```
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: BinaryOperator,
                               right: &Expr,
                               line: usize,
                               locals: &Locals)
                               -> EvalResult<Value> {
        let left = self.eval(left, locals)?.is_truthy(line)?;

        let short_circuit = match op {
            BinaryOperator::And => !left,
            _ => left,
        };
        if short_circuit {
            return Ok(Value::Bool(left));
        }

        Ok(Value::Bool(self.eval(right, locals)?.is_truthy(line)?))
    }
}

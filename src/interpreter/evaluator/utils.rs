use crate::{
    ast::Scope,
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
    /// Reads a variable from the table its scope selects.
    ///
    /// An unbound name reads as `null`; it is not an error.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     ast::Scope,
    ///     interpreter::{
    ///         evaluator::{core::Context, environment::Locals},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut ctx = Context::new();
    /// ctx.environment.set("x", Value::Number(1.0));
    ///
    /// let locals = Locals::new();
    /// assert_eq!(ctx.read_variable("x", Scope::Global, &locals), Value::Number(1.0));
    /// assert_eq!(ctx.read_variable("x", Scope::Local, &locals), Value::Null);
    /// ```
    #[must_use]
    pub fn read_variable(&self, name: &str, scope: Scope, locals: &Locals) -> Value {
        let value = match scope {
            Scope::Global => self.environment.get(name),
            Scope::Local => locals.get(name),
        };
        value.cloned().unwrap_or(Value::Null)
    }
}

/// Compares two values for language equality.
///
/// Values of different tags are never equal. `null` equals `null`, functions
/// are equal only to themselves, and lists compare element by element.
///
/// # Errors
/// Returns `UninitializedValue` if either side is the zero value of
/// `promenljiva`.
///
/// # Example
/// ```
/// use spl::interpreter::{evaluator::utils::strict_eq, value::core::Value};
///
/// assert!(strict_eq(&Value::Null, &Value::Null, 1).unwrap());
/// assert!(!strict_eq(&Value::from(1.0), &Value::from("1"), 1).unwrap());
/// ```
pub fn strict_eq(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Uninitialized, _) | (_, Value::Uninitialized) => {
            Err(InterpreterError::UninitializedValue { line })
        },
        (Value::Null, Value::Null) => Ok(true),
        (Value::Text(a), Value::Text(b)) => Ok(a == b),
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Function(a), Value::Function(b)) => Ok(std::rc::Rc::ptr_eq(a, b)),
        (Value::List(a), Value::List(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !strict_eq(x, y, line)? {
                    return Ok(false);
                }
            }
            Ok(true)
        },
        _ => Ok(false),
    }
}

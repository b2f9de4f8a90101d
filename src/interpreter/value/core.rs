use std::{fmt, rc::Rc};

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::InterpreterError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// declarations, function returns, and conditional evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A text value.
    Text(String),
    /// A numeric value. There is no integer subtype.
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and by `and` / `ili`.
    Bool(bool),
    /// The `null` value. Also the result of reading an unbound variable.
    Null,
    /// A user-defined function, shared with the definition that created it.
    Function(Rc<FunctionDef>),
    /// The argument list of a call, bound to `fargs`.
    List(Rc<Vec<Self>>),
    /// The zero value of `promenljiva`. It can be stored, passed and printed,
    /// but every operation on it fails.
    Uninitialized,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Text(s) => Self::Text(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// A short lowercase name of the runtime tag, used in error messages.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("a").kind(), "text");
    /// assert_eq!(Value::Null.kind(), "null");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Function(_) => "function",
            Self::List(_) => "list",
            Self::Uninitialized => "uninitialized",
        }
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// Empty text, zero and empty lists are false. `null` and functions are
    /// true.
    ///
    /// # Errors
    /// Returns `UninitializedValue` for the zero value of `promenljiva`.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::value::core::Value;
    ///
    /// assert!(!Value::from("").is_truthy(1).unwrap());
    /// assert!(Value::from(2.0).is_truthy(1).unwrap());
    /// assert!(Value::Null.is_truthy(1).unwrap());
    /// assert!(Value::Uninitialized.is_truthy(1).is_err());
    /// ```
    pub fn is_truthy(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Text(s) => Ok(!s.is_empty()),
            Self::Number(n) => Ok(*n != 0.0),
            Self::Bool(b) => Ok(*b),
            Self::Null | Self::Function(_) => Ok(true),
            Self::List(items) => Ok(!items.is_empty()),
            Self::Uninitialized => Err(InterpreterError::UninitializedValue { line }),
        }
    }

    /// Returns the number inside `self`, or an `InvalidArgument` error naming
    /// `what` was expected.
    pub fn as_number(&self, what: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(InterpreterError::InvalidArgument { details: format!("expected {what}, found {} {other}",
                                                                              other.kind()),
                                                             line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Function(def) => write!(f, "<function '{}'>", def.name),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    match value {
                        Self::Text(s) => write!(f, "\"{s}\"")?,
                        other => write!(f, "{other}")?,
                    }
                }

                write!(f, "]")
            },
            Self::Uninitialized => write!(f, "<uninitialized>"),
        }
    }
}

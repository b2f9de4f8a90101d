use crate::{ast::DeclaredType, interpreter::value::core::Value};

impl DeclaredType {
    /// The order in which `tip` tries the declared types. `Any` matches
    /// everything, so it comes last.
    pub const ORDER: [Self; 4] = [Self::Text, Self::Number, Self::Boolean, Self::Any];

    /// The keyword that names this type. `Text` prints as `niska`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "niska",
            Self::Number => "broj",
            Self::Boolean => "bool",
            Self::Any => "promenljiva",
        }
    }

    /// Looks a type up by one of its keywords.
    ///
    /// # Example
    /// ```
    /// use spl::ast::DeclaredType;
    ///
    /// assert_eq!(DeclaredType::from_name("niz"), Some(DeclaredType::Text));
    /// assert_eq!(DeclaredType::from_name("lista"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "niska" | "niz" => Some(Self::Text),
            "broj" => Some(Self::Number),
            "bool" => Some(Self::Boolean),
            "promenljiva" => Some(Self::Any),
            _ => None,
        }
    }

    /// Tells whether `value` satisfies this type. Only `Any` accepts values of
    /// every tag; the others require an exact tag match.
    #[must_use]
    pub const fn admits(self, value: &Value) -> bool {
        match self {
            Self::Text => matches!(value, Value::Text(_)),
            Self::Number => matches!(value, Value::Number(_)),
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Any => true,
        }
    }

    /// The value a declaration of this type receives without an initializer.
    #[must_use]
    pub const fn zero_value(self) -> Value {
        match self {
            Self::Text => Value::Text(String::new()),
            Self::Number => Value::Number(0.0),
            Self::Boolean => Value::Bool(false),
            Self::Any => Value::Uninitialized,
        }
    }
}

/// Names the first declared type in [`DeclaredType::ORDER`] that admits
/// `value`, or `"unknown"` if none does.
///
/// # Example
/// ```
/// use spl::interpreter::value::{core::Value, types::type_name_of};
///
/// assert_eq!(type_name_of(&Value::from(1.0)), "broj");
/// assert_eq!(type_name_of(&Value::Null), "promenljiva");
/// ```
#[must_use]
pub fn type_name_of(value: &Value) -> &'static str {
    DeclaredType::ORDER.iter()
                       .find(|ty| ty.admits(value))
                       .map_or("unknown", |ty| ty.name())
}

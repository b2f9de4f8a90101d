use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Name under which every call frame receives its full argument list.
pub const FARGS: &str = "fargs";

/// A local table: the variables of one call frame, or of the top level.
pub type Locals = HashMap<String, Value>;

/// The program-wide table of variables and functions.
///
/// There is no scope chain: local tables never fall back to this table, and
/// this table never sees a frame's locals.
#[derive(Debug, Default)]
pub struct Environment {
    globals: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a global binding up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Binds `name` globally, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    /// Tells whether `name` is bound globally.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }
}

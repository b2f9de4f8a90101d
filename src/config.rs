/// Call depth allowed when no other limit is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Settings for one evaluation [`Context`](crate::interpreter::evaluator::core::Context).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest allowed nesting of user-defined calls. Exceeding it fails with
    /// `StackExhausted`.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

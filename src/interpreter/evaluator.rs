/// Binary operator evaluation logic.
///
/// Handles arithmetic, text concatenation, comparisons and the short-circuit
/// logical connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, statement execution, block results and
/// expression dispatch.
pub mod core;

/// The global table and the per-call local tables.
pub mod environment;

/// Stack growth around recursive evaluation.
pub mod stack;

/// Utility functions for evaluation.
///
/// Provides variable lookup and the language's equality.
pub mod utils;

/// Function evaluation.
///
/// Handles call resolution, user-defined calls with their call frames and the
/// built-in registry.
pub mod function;

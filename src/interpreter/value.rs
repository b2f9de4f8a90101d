/// Runtime values.
///
/// Defines the `Value` enum, its display form, truthiness and the operand
/// accessors used by the evaluator.
pub mod core;
/// The declared-type vocabulary.
///
/// Maps the type keywords to runtime checks, zero values and the names
/// reported by `tip`.
pub mod types;

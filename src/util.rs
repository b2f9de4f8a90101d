/// Numeric conversion helpers.
///
/// Every number in the language is an `f64`. Built-ins that need integers
/// (random ranges, exit codes, lengths) convert through these helpers, which
/// refuse fractional, non-finite or out-of-range values instead of silently
/// truncating them.
pub mod num;

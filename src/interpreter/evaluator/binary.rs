/// Operator dispatch and arithmetic.
pub mod core;
/// Equality and ordering.
pub mod comparison;
/// Short-circuit `and` / `ili`.
pub mod logic;

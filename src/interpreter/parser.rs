/// Core parsing entry points.
///
/// Contains the result alias, the program and expression entry points, and the
/// stack guard wrapped around recursive descent.
pub mod core;

/// Unary and primary expressions.
///
/// Handles negation, literals, parenthesized groups, variables and calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for logical, comparison, additive and
/// multiplicative operators.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences and the top-level program.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for comma separated lists, expected tokens and statement
/// terminators.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, conditionals, loops, function definitions, returns
/// and expression statements.
pub mod statement;

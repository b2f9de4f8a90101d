//! # spl
//!
//! spl is a small interpreted programming language written in Rust.
//! Source text is lexed into tokens, parsed into a syntax tree by precedence
//! climbing and executed by a tree-walking evaluator with declared types,
//! `$`-sigil local scoping, user-defined functions and an extensible built-in
//! registry.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::instrument;

use crate::{
    ast::Block,
    error::{Error, LexError, SyntaxError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, Tokens},
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator, and prints back as
/// source.
pub mod ast;
/// Evaluation settings such as the maximum call depth.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum carrying the source line; the crate-level
/// [`Error`](error::Error) wraps all three.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Every number is an `f64`; built-ins that need whole numbers convert through
/// these helpers without silent data loss.
pub mod util;

/// Lazily tokenizes `source`.
///
/// Tokens are produced on demand as `(Token, line)` pairs; an unrecognized
/// character yields a [`LexError`].
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

/// Tokenizes all of `source`, stopping at the first unrecognized character.
///
/// # Examples
/// ```
/// use spl::{error::LexError, lex};
///
/// assert_eq!(lex("broj x = 1").unwrap().len(), 4);
/// assert_eq!(lex("broj x = 1 #"),
///            Err(LexError::UnrecognizedCharacter { character: '#', line: 1 }));
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    tokenize(source).collect()
}

/// Parses a token sequence into a block of statements.
pub fn parse(tokens: &[(Token, usize)]) -> Result<Block, SyntaxError> {
    parse_program(&mut tokens.iter().peekable())
}

/// Lexes and parses `source`.
///
/// # Examples
/// ```
/// use spl::parse_source;
///
/// assert!(parse_source("ako x { napisi(x) }").is_ok());
/// assert!(parse_source("ako x { napisi(x)").is_err());
/// ```
#[instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse_source(source: &str) -> Result<Block, Error> {
    let tokens = lex(source)?;
    Ok(parse(&tokens)?)
}

/// Lexes, parses and runs `source` in `context`.
///
/// Declarations made by earlier runs in the same context stay visible.
///
/// # Returns
/// The value of a top-level `vrati`, or `null`.
///
/// # Examples
/// ```
/// use spl::{interpreter::{evaluator::core::Context, value::core::Value}, run_source};
///
/// let mut context = Context::new();
/// run_source(&mut context, "niska a = \"hi\"").unwrap();
///
/// let result = run_source(&mut context, "niska b = \"!\"\nvrati a + b").unwrap();
/// assert_eq!(result, Value::from("hi!"));
///
/// // Calling an undefined function fails.
/// assert!(run_source(&mut context, "foo()").is_err());
/// ```
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(context: &mut Context, source: &str) -> Result<Value, Error> {
    let block = parse_source(source)?;
    Ok(context.run(&block)?)
}

/// Runs `source` as a whole program in a fresh context.
///
/// # Examples
/// ```
/// use spl::{interpreter::value::core::Value, run_script};
///
/// let result = run_script("funkcija f(broj n) { vrati $n * 2 }\nvrati f(21)");
/// assert_eq!(result.unwrap(), Value::Number(42.0));
/// ```
pub fn run_script(source: &str) -> Result<Value, Error> {
    run_source(&mut Context::new(), source)
}

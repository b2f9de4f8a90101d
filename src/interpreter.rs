/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, executes statements against the global table
/// and the current call's local table, evaluates expressions, and dispatches
/// calls to user-defined functions and built-ins. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and propagates `vrati` through nested blocks.
/// - Resolves `$` names locally and bare names globally.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and lazily produces tokens, each
/// corresponding to a meaningful language element such as a number, a text
/// literal, an identifier, an operator or a keyword, paired with its line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Discards whitespace and `//` comments.
/// - Reports unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program, using precedence climbing for operators.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Fixes each identifier's scope from its sigil.
/// - Validates the grammar, reporting errors with the offending token and line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during execution and the
/// declared-type vocabulary used to check them.
///
/// # Responsibilities
/// - Defines the `Value` enum, its display form and truthiness.
/// - Maps declared types to runtime checks, zero values and names.
pub mod value;

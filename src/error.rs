/// Lexical errors.
///
/// Raised while turning source text into tokens, when a character that no
/// token rule accepts is encountered.
pub mod lex_error;
/// Syntax errors.
///
/// Defines everything that can go wrong while building the syntax tree:
/// unexpected tokens, missing delimiters, duplicate parameters and running out
/// of input in the middle of a construct.
pub mod syntax_error;
/// Interpreter errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// functions, calls of non-callable values, declared-type mismatches,
/// unsupported operands, division by zero and stack exhaustion.
pub mod interpreter_error;

pub use interpreter_error::InterpreterError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Any failure produced by the lexer, the parser or the evaluator.
///
/// This is what the front end receives when it runs a piece of source text
/// through the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source contained a character no token accepts.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation violated a runtime contract.
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}

impl Error {
    /// Returns the requested process status if this error is a request to
    /// exit rather than a failure.
    ///
    /// # Example
    /// ```
    /// use spl::error::{Error, InterpreterError};
    ///
    /// let exit: Error = InterpreterError::Exit { code: 3 }.into();
    /// assert_eq!(exit.exit_code(), Some(3));
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Interpreter(InterpreterError::Exit { code }) => Some(*code),
            _ => None,
        }
    }
}

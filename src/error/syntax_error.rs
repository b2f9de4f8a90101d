/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Syntax error near '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found '{found}'.")]
    Expected {
        /// Description of what the grammar required.
        expected: String,
        /// The token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Syntax error: unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A parameter name was listed twice in one function definition.
    #[error("Error on line {line}: Parameter '{name}' of function '{function}' is declared more than once.")]
    DuplicateParameter {
        /// The repeated parameter name.
        name:     String,
        /// The function being defined.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

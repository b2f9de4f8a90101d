/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

use crate::ast::Scope;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpreterError {
    /// Called a function that is neither a built-in nor bound in the target
    /// table.
    #[error("Error on line {line}: Undefined {scope} function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name:  String,
        /// The table the call was resolved in.
        scope: Scope,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The called name is bound, but not to a function.
    #[error("Error on line {line}: Attempt to call non-callable value '{name}'.")]
    NotCallable {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration received a value of the wrong type.
    #[error("Error on line {line}: Cannot assign {found} value to '{name}', which requires '{expected}'.")]
    TypeMismatch {
        /// The declared variable.
        name:     String,
        /// The declared type.
        expected: String,
        /// The type of the value that was produced.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument did not match its parameter's declared type.
    #[error("Error on line {line}: Wrong value type given to function '{function}'. Given value {given}, expected type '{expected}' for parameter '{parameter}'.")]
    ArgumentTypeMismatch {
        /// The called function.
        function:  String,
        /// The parameter the argument was bound to.
        parameter: String,
        /// The parameter's declared type.
        expected:  String,
        /// The offending argument.
        given:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A binary operator was applied to operand types it does not support.
    #[error("Error on line {line}: Operator '{op}' is not defined for {left} and {right}.")]
    UnsupportedOperands {
        /// The operator.
        op:    String,
        /// Type of the left operand.
        left:  String,
        /// Type of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to an operand type it does not support.
    #[error("Error on line {line}: Operator '{op}' is not defined for {operand}.")]
    UnsupportedOperand {
        /// The operator.
        op:      String,
        /// Type of the operand.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An uninitialized `promenljiva` value was used in an operation.
    #[error("Error on line {line}: Uninitialized value used in an operation.")]
    UninitializedValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    #[error("Error on line {line}: Built-in function '{name}' expects {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The built-in that was called.
        name:     String,
        /// Human readable accepted arity.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A built-in received an argument it cannot work with.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The configured maximum call depth was exceeded.
    #[error("Error on line {line}: Stack exhausted after {depth} nested calls.")]
    StackExhausted {
        /// The call depth that was reached.
        depth: usize,
        /// The source line of the call that exceeded it.
        line:  usize,
    },
    /// Reading from or writing to the host failed.
    #[error("Error on line {line}: I/O failure: {details}.")]
    Io {
        /// The underlying error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `izadji` was called; the front end ends the program with `code`.
    #[error("Program exited with status {code}.")]
    Exit {
        /// Requested process status.
        code: i32,
    },
}

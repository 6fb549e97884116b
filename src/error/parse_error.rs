#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was expected but not found.
    ExpectedString {
        /// The command that required the string operand.
        command: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to declare or assign a reserved identifier name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingBrace { line } => {
                write!(f, "Error on line {line}: Expected closing brace '}}' but none found.")
            },

            Self::ExpectedString { command, line } => write!(f,
                                                             "Error on line {line}: Expected a string literal after '{command}'."),

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

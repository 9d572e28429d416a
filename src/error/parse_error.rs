#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found a token that does not match what the grammar expects at the
    /// current position.
    UnexpectedToken {
        /// Description of the expected token kind.
        expected: String,
        /// The token that was actually found.
        found:    String,
    },
    /// Reached the end of the token sequence while the grammar still expected
    /// something.
    UnexpectedEndOfInput {
        /// Description of the expected token kind.
        expected: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "Syntax error: expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f,
                       "Syntax error: expected {expected}, but the input ended.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Encountered a character that matches no lexical rule.
    UnrecognizedCharacter {
        /// The offending character.
        found: char,
    },
    /// An integer literal does not fit into a 64 bit signed integer.
    NumberTooLarge {
        /// The literal text as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found } => {
                write!(f, "Lexical error: unrecognized character '{found}'.")
            },
            Self::NumberTooLarge { literal } => {
                write!(f, "Lexical error: integer literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}

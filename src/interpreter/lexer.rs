use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a source line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens, such as `"hello"`. The payload is the text
    /// between the quotes; no escape sequences are recognized.
    #[regex(r#""[^"]*""#, strip_quotes)]
    Str(String),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`, the statement terminator.
    #[token(";")]
    Semicolon,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    /// Renders the token the way it would be shown to a user: literals and
    /// identifiers print their payload (string contents without quotes),
    /// punctuation prints itself.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Comment | Self::Ignored => Ok(()),
        }
    }
}

/// Tokenizes one source line into a fully materialized token sequence.
///
/// Whitespace and `#` line comments produce no tokens. The returned sequence
/// preserves source order.
///
/// # Parameters
/// - `line`: The raw source line.
///
/// # Returns
/// The ordered token sequence for the line.
///
/// # Errors
/// - `LexError::UnrecognizedCharacter` if a character matches no lexical
///   rule.
/// - `LexError::NumberTooLarge` if an integer literal does not fit `i64`.
///
/// # Example
/// ```
/// use minilang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 5; # set x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Assign,
///                 Token::Number(5),
///                 Token::Semicolon]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            return Err(match slice.chars().next() {
                           Some(c) if c.is_ascii_digit() => {
                               LexError::NumberTooLarge { literal: slice.to_string() }
                           },
                           Some(c) => LexError::UnrecognizedCharacter { found: c },
                           None => unreachable!("error token with empty slice"),
                       });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal is too large for `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Strips the surrounding quotes from a string literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The characters between the first and last `"`, unchanged.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

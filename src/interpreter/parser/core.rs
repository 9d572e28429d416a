use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator for the current line.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Parses an atomic factor.
///
/// Factors form the base of the expression grammar:
/// - integer literals
/// - string literals
/// - variable references
/// - parenthesized sub-expressions
///
/// A parenthesized sub-expression recurses into [`parse_expression`] and
/// strictly requires a matching `)`.
///
/// Grammar: `factor := NUMBER | STRING | IDENTIFIER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token cannot begin a factor,
/// - the closing `)` of a grouped expression is missing,
/// - the input ends unexpectedly.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Expr::Number { value: *value }),
        Some(Token::Str(value)) => Ok(Expr::Str { value: value.clone() }),
        Some(Token::Identifier(name)) => Ok(Expr::Variable { name: name.clone() }),
        Some(Token::LParen) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expr),
                Some(tok) => {
                    Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                      found:    format!("{tok:?}"), })
                },
                None => Err(ParseError::UnexpectedEndOfInput { expected: "')'".to_string() }),
            }
        },
        Some(tok) => {
            Err(ParseError::UnexpectedToken { expected:
                                                  "a number, string, identifier or '('".to_string(),
                                              found:    format!("{tok:?}"), })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string() }),
    }
}

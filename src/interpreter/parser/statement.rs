use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a token sequence into an ordered sequence of statements.
///
/// Statements are parsed one after another until the token sequence is
/// exhausted. Consumption is strictly positional; no backtracking is
/// performed.
///
/// # Parameters
/// - `tokens`: The token sequence of one source line.
///
/// # Returns
/// One parsed [`Statement`] per assignment found.
///
/// # Errors
/// Returns a `ParseError` as soon as any token mismatches the grammar.
///
/// # Example
/// ```
/// use minilang::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::{lexer::tokenize, parser::statement::parse},
/// };
///
/// let tokens = tokenize("z = x + 3;").unwrap();
/// let statements = parse(&tokens).unwrap();
///
/// assert_eq!(statements,
///            vec![Statement::Assignment { name:  "z".to_string(),
///                                         value: Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string() }),
///                                                                 op:    BinaryOperator::Add,
///                                                                 right: Box::new(Expr::Number { value: 3 }), }, }]);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// The grammar currently supports exactly one statement form:
///
/// `statement := IDENTIFIER "=" expression ";"`
///
/// A statement must begin with an identifier; any other leading token is a
/// syntax error naming the expected and actual token kinds.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the statement does not begin with an identifier,
/// - the `=` or terminating `;` is missing,
/// - the value expression is malformed,
/// - input ends unexpectedly.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Identifier(name)) => name.clone(),
        Some(tok) => {
            return Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                                     found:    format!("{tok:?}"), });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected:
                                                              "an identifier".to_string() });
        },
    };

    match tokens.next() {
        Some(Token::Assign) => {},
        Some(tok) => {
            return Err(ParseError::UnexpectedToken { expected: "'='".to_string(),
                                                     found:    format!("{tok:?}"), });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: "'='".to_string() }),
    }

    let value = parse_expression(tokens)?;

    match tokens.next() {
        Some(Token::Semicolon) => {},
        Some(tok) => {
            return Err(ParseError::UnexpectedToken { expected: "';'".to_string(),
                                                     found:    format!("{tok:?}"), });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: "';'".to_string() }),
    }

    Ok(Statement::Assignment { name, value })
}

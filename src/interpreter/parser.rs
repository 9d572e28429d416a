/// Binary operator parsing.
///
/// Implements the two precedence levels of the expression grammar: additive
/// (`+`, `-`) and multiplicative (`*`, `/`), both left-associative.
pub mod binary;
/// Core expression parsing.
///
/// Declares the shared `ParseResult` alias and parses full expressions and
/// atomic factors (literals, variables, parenthesized sub-expressions).
pub mod core;
/// Statement parsing.
///
/// Parses the token sequence of one line into assignment statements,
/// repeating until the sequence is exhausted.
pub mod statement;

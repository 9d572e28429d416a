/// Lexical errors.
///
/// Defines the error types that can occur while tokenizing a source line,
/// before any structure has been built.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence into
/// statement trees: token mismatches against the grammar and premature end of
/// input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or references to variables that were never assigned.
pub mod runtime_error;
/// Semantic errors.
///
/// Contains all error types the static type checker can raise before a
/// statement is ever evaluated: undeclared variables, operand type mismatches
/// and operations undefined for a type.
pub mod semantic_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// The analyzer module type checks AST nodes before evaluation.
///
/// The analyzer walks a statement tree bottom-up, infers the static type of
/// every node, and maintains the symbol type table across statements. A
/// statement that fails this check is never handed to the evaluator.
///
/// # Responsibilities
/// - Infers `int` or `string` for every expression node.
/// - Rejects undeclared variables, mismatched operand types, and operations
///   undefined for a type.
/// - Records the declared type of every successfully assigned variable.
pub mod analyzer;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and string operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Maintains the runtime environment across statements.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer (tokenizer) reads one raw source line and produces a finite,
/// ordered sequence of tokens, each corresponding to a meaningful language
/// element such as a number, string, identifier, operator, or delimiter.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Discards whitespace and `#` line comments.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer positionally
/// and constructs one statement tree per assignment found. This enables the
/// later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting expected-versus-found mismatches.
/// - Builds structure only; never evaluates or type checks.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: 64 bit signed
/// integers and strings. It also links every value back to its static type so
/// the symbol table and the runtime environment can be checked for agreement.
///
/// # Responsibilities
/// - Defines the `Value` enum and its conversions.
/// - Implements display formatting for results.
/// - Maps runtime values to their static types.
pub mod value;

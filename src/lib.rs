//! # minilang
//!
//! minilang is a statically checked mini scripting language written in Rust.
//! It tokenizes, parses, type checks, and evaluates integer and string
//! arithmetic with assignment, keeping a persistent variable environment
//! across the lines of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::session::Session;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed independently by the type checker and the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the binary operator set and its display form.
/// - Enables exhaustive, compile-time checked handling of parsed code.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// type checking, or evaluating code. It standardizes error reporting and
/// carries the detail needed for user feedback: offending characters,
/// expected-versus-found token kinds, names, and type pairs.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, analyzer, evaluator).
/// - Produces human-readable one-line messages for each failure.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Renders statement trees as labeled directed graphs.
///
/// This module turns a parsed statement into Graphviz DOT text, one node per
/// tree node and one edge per child link, for display by external tooling.
/// It observes trees only and never influences checking or evaluation.
///
/// # Responsibilities
/// - Converts statement trees to DOT digraph source.
/// - Labels each node with its kind and scalar payload.
pub mod graph;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, type checking, evaluation,
/// value representations and error handling to provide a complete runtime for
/// source code. It exposes the four core operations: tokenize, parse, check,
/// evaluate.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator.
/// - Provides entry points for each pipeline stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Session state and the line-by-line drivers.
///
/// This module owns the pairing of one symbol type table with one runtime
/// environment, enforces the check-then-evaluate ordering per statement, and
/// provides the drivers a host uses: a strict one that fails fast and an
/// error-tolerant one that reports per line.
///
/// # Responsibilities
/// - Keeps the two persistent tables of a session consistent.
/// - Runs single lines and whole scripts through the pipeline.
/// - Collects per-line token text, trees, and status for display.
pub mod session;

/// Runs a whole script and returns once every line has executed.
///
/// This is the strict driver: each non-empty line is tokenized, parsed, type
/// checked, and evaluated in order, sharing one session, and the first error
/// of any line aborts the run. If execution succeeds and `auto_print` is set,
/// the value of the last assignment is printed.
///
/// # Errors
/// Returns the boxed error of the first failing stage on the first failing
/// line.
///
/// # Examples
/// ```
/// use minilang::run_script;
///
/// // Simple script: both lines check and evaluate.
/// let source = "x = 5 + 2;\nz = x + 3;";
/// assert!(run_script(source, false).is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "y = x + 1;"; // 'x' is not defined
/// assert!(run_script(source, false).is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();

    let mut result = None;
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(value) = session.run_line(line)? {
            result = Some(value);
        }
    }

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}

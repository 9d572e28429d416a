/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every expression form the grammar can produce: integer and
/// string literals, variable references, and binary arithmetic. Each node
/// exclusively owns its children; trees are acyclic and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A string literal such as `"hello"`.
    Str {
        /// The literal contents, without the surrounding quotes.
        value: String,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines. The grammar currently
/// only supports assignment, so this enum has a single variant; keeping it an
/// enum means the checker and evaluator stay exhaustive when new statement
/// forms are added.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
}

/// Represents a binary operator.
///
/// The language defines exactly four arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`). Also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

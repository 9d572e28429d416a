use crate::{ast::BinaryOperator, interpreter::analyzer::Type};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the static type checker can raise.
pub enum SemanticError {
    /// A variable was referenced before it was ever assigned.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
    },
    /// The operand types of a binary operation do not match.
    TypeMismatch {
        /// The operator that was applied.
        op:    BinaryOperator,
        /// Type of the left operand.
        left:  Type,
        /// Type of the right operand.
        right: Type,
    },
    /// The operand types agree, but the operator is not defined for them.
    InvalidOperation {
        /// The operator that was applied.
        op:       BinaryOperator,
        /// The shared operand type.
        operands: Type,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name } => {
                write!(f, "Semantic error: undeclared variable '{name}'.")
            },
            Self::TypeMismatch { op, left, right } => write!(f,
                                                             "Type error: cannot apply '{op}' between {left} and {right}."),
            Self::InvalidOperation { op, operands } => write!(f,
                                                              "Invalid operation '{op}' for type {operands}."),
        }
    }
}

impl std::error::Error for SemanticError {}

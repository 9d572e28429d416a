use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has no value in the environment.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
    /// The operand values do not support the operator. Only reachable when a
    /// statement is evaluated without having been type checked first.
    InvalidOperands {
        /// The operator that was applied.
        op: BinaryOperator,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Runtime error: undefined variable '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: division by zero."),
            Self::Overflow => write!(f,
                                     "Runtime error: integer overflow while trying to compute result."),
            Self::InvalidOperands { op } => write!(f,
                                                   "Runtime error: operands do not support operator '{op}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}

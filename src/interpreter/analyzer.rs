use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::SemanticError,
};

/// Result type used by the type checker.
///
/// All checking functions return either a value of type `T` or a
/// `SemanticError` describing the failure.
pub type CheckResult<T> = Result<T, SemanticError>;

/// Represents the static type of an expression.
///
/// The language knows exactly two types; every well-typed expression is one
/// of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Type {
    /// A 64 bit signed integer.
    Int,
    /// A string.
    Str,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "string"),
        }
    }
}

/// Stores the symbol type table of one session.
///
/// The table maps every successfully assigned variable name to its declared
/// type. It is created once per session and mutated only by successful
/// assignment checking; a statement that fails the check leaves it exactly as
/// it was.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Type>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: HashMap::new() }
    }

    /// Looks up the declared type of a variable.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    ///
    /// # Returns
    /// `Some(Type)` if the variable has been assigned before, else `None`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).copied()
    }

    /// Iterates over all `(name, type)` bindings in the table.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Type)> {
        self.symbols.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Type checks a single statement and updates the table.
    ///
    /// For an assignment, the value expression is checked first; only when it
    /// checks successfully is the target name bound to the resulting type,
    /// overwriting any prior binding. There is no partial binding: a failing
    /// sub-expression leaves the table untouched.
    ///
    /// # Parameters
    /// - `statement`: Statement to check.
    ///
    /// # Returns
    /// The static type of the statement's value expression.
    ///
    /// # Errors
    /// Propagates any `SemanticError` raised while checking the value
    /// expression.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::{
    ///     analyzer::{SymbolTable, Type},
    ///     lexer::tokenize,
    ///     parser::statement::parse,
    /// };
    ///
    /// let statements = parse(&tokenize("x = 5 + 2;").unwrap()).unwrap();
    /// let mut table = SymbolTable::new();
    ///
    /// assert_eq!(table.check_statement(&statements[0]), Ok(Type::Int));
    /// assert_eq!(table.lookup("x"), Some(Type::Int));
    /// ```
    pub fn check_statement(&mut self, statement: &Statement) -> CheckResult<Type> {
        match statement {
            Statement::Assignment { name, value } => {
                let value_type = self.check_expr(value)?;
                self.symbols.insert(name.clone(), value_type);
                Ok(value_type)
            },
        }
    }

    /// Infers the static type of an expression, bottom-up.
    ///
    /// # Parameters
    /// - `expr`: Expression to check.
    ///
    /// # Returns
    /// The inferred [`Type`] of the expression.
    ///
    /// # Errors
    /// - `SemanticError::UndeclaredVariable` for a reference to a name absent
    ///   from the table.
    /// - `SemanticError::TypeMismatch` when binary operand types disagree.
    /// - `SemanticError::InvalidOperation` when the operator is undefined for
    ///   the agreeing operand type.
    pub fn check_expr(&self, expr: &Expr) -> CheckResult<Type> {
        match expr {
            Expr::Number { .. } => Ok(Type::Int),
            Expr::Str { .. } => Ok(Type::Str),
            Expr::Variable { name } => {
                self.lookup(name)
                    .ok_or_else(|| SemanticError::UndeclaredVariable { name: name.clone() })
            },
            Expr::BinaryOp { left, op, right } => {
                let left_type = self.check_expr(left)?;
                let right_type = self.check_expr(right)?;
                check_binary(*op, left_type, right_type)
            },
        }
    }
}

/// Applies the binary operator typing rules.
///
/// Both operand types must match exactly. Two integers support all four
/// operators and yield `int`; two strings support only `+` (concatenation)
/// and yield `string`.
///
/// # Parameters
/// - `op`: The operator being applied.
/// - `left`: Type of the left operand.
/// - `right`: Type of the right operand.
///
/// # Returns
/// The result type of the operation.
///
/// # Errors
/// - `SemanticError::TypeMismatch` if the operand types differ.
/// - `SemanticError::InvalidOperation` if the operator is undefined for the
///   shared operand type.
pub fn check_binary(op: BinaryOperator, left: Type, right: Type) -> CheckResult<Type> {
    if !matches!((left, right), (Type::Int, Type::Int) | (Type::Str, Type::Str)) {
        return Err(SemanticError::TypeMismatch { op, left, right });
    }

    match (left, op) {
        (Type::Int, _) => Ok(Type::Int),
        (Type::Str, BinaryOperator::Add) => Ok(Type::Str),
        (Type::Str, _) => Err(SemanticError::InvalidOperation { op, operands: left }),
    }
}

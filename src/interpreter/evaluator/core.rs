use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime environment of one session.
///
/// The environment maps every successfully assigned variable name to its
/// current value. It is created once per session and mutated only by
/// successful assignment evaluation; a failing statement leaves it exactly as
/// it was. It is the runtime twin of the analyzer's symbol table, and the two
/// must agree after both passes succeed on the same statement.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty runtime environment.
    #[must_use]
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }

    /// Looks up the current value of a variable.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    ///
    /// # Returns
    /// `Some(&Value)` if the variable has been assigned before, else `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Iterates over all `(name, value)` bindings in the environment.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates a single statement and updates the environment.
    ///
    /// For an assignment, the value expression is evaluated first; only when
    /// evaluation succeeds is the target name bound to the resulting value,
    /// overwriting any prior binding.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The computed value of the statement's value expression.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised while evaluating the value
    /// expression.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::{
    ///     evaluator::core::Environment,
    ///     lexer::tokenize,
    ///     parser::statement::parse,
    ///     value::Value,
    /// };
    ///
    /// let statements = parse(&tokenize("x = 5 + 2;").unwrap()).unwrap();
    /// let mut env = Environment::new();
    ///
    /// assert_eq!(env.eval_statement(&statements[0]), Ok(Value::Integer(7)));
    /// assert_eq!(env.get("x"), Some(&Value::Integer(7)));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval_expr(value)?;
                self.values.insert(name.clone(), value.clone());
                Ok(value)
            },
        }
    }

    /// Evaluates an expression against the current environment.
    ///
    /// Evaluation mirrors the type checker's structure but operates on
    /// values: literals evaluate to themselves, variable references are
    /// looked up in the environment, and binary operations evaluate both
    /// operands before applying the operator.
    ///
    /// The variable lookup is a runtime-level re-check, independent of the
    /// analyzer's table.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` for a reference to a name absent
    ///   from the environment.
    /// - Propagates any `RuntimeError` from the binary operation.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value } => Ok(Value::Integer(*value)),
            Expr::Str { value } => Ok(Value::Str(value.clone())),
            Expr::Variable { name } => {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                eval_binary(*op, &left, &right)
            },
        }
    }
}

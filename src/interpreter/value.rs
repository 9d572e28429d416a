use crate::interpreter::analyzer::Type;

/// Represents a runtime value in the interpreter.
///
/// This enum models the possible types that can appear in expressions,
/// assignments and evaluation results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An integer value (64 bit signed integer).
    Integer(i64),
    /// A string value.
    Str(String),
}

impl Value {
    /// Maps the runtime value to its static type.
    ///
    /// This is the bridge between the runtime environment and the symbol type
    /// table: after a successful check-then-evaluate, every environment entry
    /// must satisfy `value.value_type() == table.lookup(name)`.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::{analyzer::Type, value::Value};
    ///
    /// assert_eq!(Value::Integer(10).value_type(), Type::Int);
    /// assert_eq!(Value::Str("hi".to_string()).value_type(), Type::Str);
    /// ```
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Integer(_) => Type::Int,
            Self::Str(_) => Type::Str,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl std::fmt::Display for Value {
    /// Renders the raw value: integers as decimal digits, strings without
    /// quotes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

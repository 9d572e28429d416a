use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a binary operator to two runtime values.
///
/// Integer arithmetic is checked: overflow is reported instead of wrapping,
/// and division is truncating `i64` division with an explicit zero guard.
/// String operands support only `+`, which concatenates with no separator.
///
/// Operand combinations the type checker rejects are still handled here, so
/// that a tree evaluated without a prior check fails cleanly rather than
/// panicking; the session driver never takes that path.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` for `x / 0`.
/// - `RuntimeError::Overflow` when integer arithmetic overflows.
/// - `RuntimeError::InvalidOperands` for combinations the type checker would
///   have rejected.
///
/// # Example
/// ```
/// use minilang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let x = Value::Integer(7);
/// let y = Value::Integer(2);
///
/// assert_eq!(eval_binary(BinaryOperator::Div, &x, &y),
///            Ok(Value::Integer(3)));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.checked_div(*b)
                },
            };
            result.map(Value::Integer).ok_or(RuntimeError::Overflow)
        },
        (Value::Str(a), Value::Str(b)) if op == Add => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(RuntimeError::InvalidOperands { op }),
    }
}

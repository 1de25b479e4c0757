//! Prefix and infix operator semantics.
//!
//! Integer arithmetic is checked: overflow and a zero divisor are
//! runtime errors, never a host-level fault. Equality between operands
//! of two different types (or two heap values) is identity, not
//! structure, matching singleton semantics for booleans and `null`.

use std::rc::Rc;

use snout_ir::{InfixOp, PrefixOp};

use crate::{EvalError, EvalResult, Value};

fn symbol(op: InfixOp) -> &'static str {
    match op {
        InfixOp::Eq => "==",
        InfixOp::NotEq => "!=",
        InfixOp::Lt => "<",
        InfixOp::Gt => ">",
        InfixOp::Add => "+",
        InfixOp::Sub => "-",
        InfixOp::Mul => "*",
        InfixOp::Div => "/",
    }
}

pub(crate) fn eval_prefix(op: PrefixOp, value: Value) -> EvalResult {
    match op {
        PrefixOp::Not => Ok(Value::Bool(!value.is_truthy())),
        PrefixOp::Neg => match value {
            Value::Int(v) => match v.checked_neg() {
                Some(negated) => Ok(Value::Int(negated)),
                None => Err(EvalError::integer_overflow().into()),
            },
            other => Err(EvalError::unknown_prefix_operator("-", other.type_name()).into()),
        },
    }
}

pub(crate) fn eval_infix(op: InfixOp, left: Value, right: Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_infix(op, a, b),
        (Value::Str(a), Value::Str(b)) => eval_str_infix(op, &a, &b),
        (left, right) => match op {
            InfixOp::Eq => Ok(Value::Bool(identity_eq(&left, &right))),
            InfixOp::NotEq => Ok(Value::Bool(!identity_eq(&left, &right))),
            _ if left.type_name() != right.type_name() => Err(EvalError::type_mismatch(
                left.type_name(),
                symbol(op),
                right.type_name(),
            )
            .into()),
            _ => Err(EvalError::unknown_infix_operator(
                left.type_name(),
                symbol(op),
                right.type_name(),
            )
            .into()),
        },
    }
}

fn eval_int_infix(op: InfixOp, a: i64, b: i64) -> EvalResult {
    let checked = match op {
        InfixOp::Add => a.checked_add(b),
        InfixOp::Sub => a.checked_sub(b),
        InfixOp::Mul => a.checked_mul(b),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::division_by_zero().into());
            }
            a.checked_div(b)
        }
        InfixOp::Lt => return Ok(Value::Bool(a < b)),
        InfixOp::Gt => return Ok(Value::Bool(a > b)),
        InfixOp::Eq => return Ok(Value::Bool(a == b)),
        InfixOp::NotEq => return Ok(Value::Bool(a != b)),
    };
    match checked {
        Some(result) => Ok(Value::Int(result)),
        None => Err(EvalError::integer_overflow().into()),
    }
}

fn eval_str_infix(op: InfixOp, a: &str, b: &str) -> EvalResult {
    match op {
        InfixOp::Add => Ok(Value::str(format!("{a}{b}"))),
        _ => Err(EvalError::unknown_infix_operator("STRING", symbol(op), "STRING").into()),
    }
}

/// Identity comparison for the non-integer, non-string-pair cases.
/// Booleans and `null` behave as singletons; heap values compare by
/// reference; operands of two different types are never equal.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
        (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a == b,
        _ => false,
    }
}

//! Integer and Float builtins

use super::{define, first, ordering_value};
use crate::builtins::BuiltinType;
use crate::value::Value;
use crate::vm::{ClassRegistry, ExecutionContext};
use crate::{VmError, VmResult};
use std::cmp::Ordering;

pub(super) fn install(registry: &mut ClassRegistry) {
    for ty in [BuiltinType::Integer, BuiltinType::Float] {
        define(registry, ty, "==", 1, num_eq);
        define(registry, ty, "<=>", 1, num_cmp);
        define(registry, ty, "<", 1, num_lt);
        define(registry, ty, "<=", 1, num_le);
        define(registry, ty, ">", 1, num_gt);
        define(registry, ty, ">=", 1, num_ge);
        define(registry, ty, "+", 1, num_plus);
        define(registry, ty, "-", 1, num_minus);
    }
}

/// Numeric ordering, None for non-numeric operands and NaN
pub(crate) fn numeric_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Some(x.cmp(y)),
        (Value::Integer(x), Value::Float(y)) => (*x as f64).partial_cmp(y),
        (Value::Float(x), Value::Integer(y)) => x.partial_cmp(&(*y as f64)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        _ => None,
    }
}

fn compare_or_fail(recv: &Value, other: &Value) -> VmResult<Ordering> {
    numeric_cmp(recv, other).ok_or_else(|| {
        VmError::TypeError(format!(
            "comparison of {} with {} failed",
            recv.type_name(),
            other.type_name()
        ))
    })
}

fn num_eq(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let other = first("==", args)?;
    Ok(Value::Bool(numeric_cmp(recv, other) == Some(Ordering::Equal)))
}

fn num_cmp(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    Ok(ordering_value(numeric_cmp(recv, first("<=>", args)?)))
}

fn num_lt(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let ordering = compare_or_fail(recv, first("<", args)?)?;
    Ok(Value::Bool(ordering == Ordering::Less))
}

fn num_le(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let ordering = compare_or_fail(recv, first("<=", args)?)?;
    Ok(Value::Bool(ordering != Ordering::Greater))
}

fn num_gt(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let ordering = compare_or_fail(recv, first(">", args)?)?;
    Ok(Value::Bool(ordering == Ordering::Greater))
}

fn num_ge(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let ordering = compare_or_fail(recv, first(">=", args)?)?;
    Ok(Value::Bool(ordering != Ordering::Less))
}

macro_rules! arith {
    ($name:ident, $op:tt, $checked:ident, $sym:literal) => {
        fn $name(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
            let other = first($sym, args)?;
            match (recv, other) {
                (Value::Integer(x), Value::Integer(y)) => x
                    .$checked(*y)
                    .map(Value::Integer)
                    .ok_or(VmError::IntegerOverflow($sym)),
                (Value::Integer(x), Value::Float(y)) => Ok(Value::Float(*x as f64 $op y)),
                (Value::Float(x), Value::Integer(y)) => Ok(Value::Float(x $op *y as f64)),
                (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x $op y)),
                _ => Err(VmError::TypeError(format!(
                    "{} can't be coerced into {}",
                    other.type_name(),
                    recv.type_name()
                ))),
            }
        }
    };
}

arith!(num_plus, +, checked_add, "+");
arith!(num_minus, -, checked_sub, "-");

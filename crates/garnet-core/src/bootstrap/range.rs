//! Range builtins
//!
//! Generic semantics: every bound comparison goes through `<=>` dispatch, so
//! these honour redefined comparison operators on the bound types.

use super::{define, first};
use crate::builtins::BuiltinType;
use crate::value::{RangeValue, Value};
use crate::vm::{dispatch, ClassRegistry, ExecutionContext};
use crate::{VmError, VmResult};
use std::cmp::Ordering;

pub(super) fn install(registry: &mut ClassRegistry) {
    define(registry, BuiltinType::Range, "include?", 1, range_include);
    define(registry, BuiltinType::Range, "member?", 1, range_include);
    define(registry, BuiltinType::Range, "cover?", 1, range_cover);
    define(registry, BuiltinType::Range, "===", 1, range_eqq);
    define(registry, BuiltinType::Range, "min", 0, range_min);
    define(registry, BuiltinType::Range, "max", 0, range_max);
}

fn range_of(recv: &Value) -> VmResult<&RangeValue> {
    recv.as_range()
        .ok_or_else(|| VmError::TypeError(format!("expected Range, got {}", recv)))
}

fn covers(ctx: &ExecutionContext, range: &RangeValue, value: &Value) -> VmResult<bool> {
    match dispatch::compare(ctx, &range.begin, value)? {
        Some(Ordering::Less | Ordering::Equal) => {}
        _ => return Ok(false),
    }
    let upper = match dispatch::compare(ctx, value, &range.end)? {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => !range.exclusive,
        _ => false,
    };
    Ok(upper)
}

/// True when the range contains no values
fn is_empty(ctx: &ExecutionContext, range: &RangeValue) -> VmResult<bool> {
    let empty = match dispatch::compare(ctx, &range.begin, &range.end)? {
        Some(Ordering::Less) => false,
        Some(Ordering::Equal) => range.exclusive,
        Some(Ordering::Greater) | None => true,
    };
    Ok(empty)
}

fn range_include(ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let value = first("include?", args)?;
    Ok(Value::Bool(covers(ctx, range_of(recv)?, value)?))
}

fn range_cover(ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let value = first("cover?", args)?;
    Ok(Value::Bool(covers(ctx, range_of(recv)?, value)?))
}

fn range_eqq(ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let value = first("===", args)?;
    Ok(Value::Bool(covers(ctx, range_of(recv)?, value)?))
}

fn range_min(ctx: &ExecutionContext, recv: &Value, _args: &[Value]) -> VmResult<Value> {
    let range = range_of(recv)?;
    if is_empty(ctx, range)? {
        return Ok(Value::Nil);
    }
    Ok(range.begin.clone())
}

fn range_max(ctx: &ExecutionContext, recv: &Value, _args: &[Value]) -> VmResult<Value> {
    let range = range_of(recv)?;
    if !range.exclusive {
        if is_empty(ctx, range)? {
            return Ok(Value::Nil);
        }
        return Ok(range.end.clone());
    }

    if !matches!(range.end, Value::Integer(_)) {
        return Err(VmError::TypeError(
            "cannot exclude non Integer end value".to_string(),
        ));
    }
    if !matches!(range.begin, Value::Integer(_)) {
        return Err(VmError::TypeError(
            "cannot exclude end value with non Integer begin value".to_string(),
        ));
    }
    if is_empty(ctx, range)? {
        return Ok(Value::Nil);
    }
    dispatch::call_method(ctx, &range.end, "-", &[Value::Integer(1)])
}

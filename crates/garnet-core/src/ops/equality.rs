//! Numeric equality

use crate::builtins::BuiltinFlags;
use crate::value::Value;
use crate::vm::{dispatch, ExecutionContext};
use crate::VmResult;

/// `a == b` as a boolean
pub fn equal(ctx: &ExecutionContext, a: &Value, b: &Value) -> VmResult<bool> {
    if let Some(result) = fast_equal(ctx.builtins(), a, b) {
        return Ok(result);
    }
    let result = dispatch::call_method(ctx, a, "==", std::slice::from_ref(b))?;
    Ok(result.is_truthy())
}

/// Equality for same-typed numeric operands with builtin `==`
#[inline]
pub fn fast_equal(flags: &BuiltinFlags, a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) if flags.integer_equals() => Some(x == y),
        (Value::Float(x), Value::Float(y)) if flags.float_equals() => Some(x == y),
        _ => None,
    }
}

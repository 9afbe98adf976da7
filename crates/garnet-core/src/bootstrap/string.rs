//! String builtins

use super::{define, first, ordering_value};
use crate::builtins::BuiltinType;
use crate::value::Value;
use crate::vm::{ClassRegistry, ExecutionContext};
use crate::VmResult;

pub(super) fn install(registry: &mut ClassRegistry) {
    define(registry, BuiltinType::String, "==", 1, str_eq);
    define(registry, BuiltinType::String, "<=>", 1, str_cmp);
}

fn str_eq(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let equal = match (recv, first("==", args)?) {
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => false,
    };
    Ok(Value::Bool(equal))
}

fn str_cmp(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    let ordering = match (recv, first("<=>", args)?) {
        (Value::Str(a), Value::Str(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
        _ => None,
    };
    Ok(ordering_value(ordering))
}

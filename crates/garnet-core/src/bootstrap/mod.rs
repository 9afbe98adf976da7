//! Core builtin methods installed at boot
//!
//! These bodies are the reference semantics that fast paths must match.
//! They are written directly into the class registry before the runtime
//! finishes booting, so installing them never invalidates a flag.

mod numeric;
mod range;
mod string;

use crate::builtins::BuiltinType;
use crate::object::Method;
use crate::value::Value;
use crate::vm::{ClassRegistry, ExecutionContext};
use crate::{VmError, VmResult};
use std::cmp::Ordering;

type Body = fn(&ExecutionContext, &Value, &[Value]) -> VmResult<Value>;

/// Install every core builtin into `registry`
pub(crate) fn install(registry: &mut ClassRegistry) {
    numeric::install(registry);
    string::install(registry);
    range::install(registry);

    for ty in [BuiltinType::Nil, BuiltinType::True, BuiltinType::False] {
        define(registry, ty, "==", 1, identity_eq);
    }
}

fn define(registry: &mut ClassRegistry, ty: BuiltinType, name: &str, arity: usize, body: Body) {
    let id = registry.core_class(ty);
    if let Some(class) = registry.get_class_mut(id) {
        class.add_method(name, Method::new(arity, body));
    }
}

/// First argument, for single-argument builtins
fn first<'a>(name: &str, args: &'a [Value]) -> VmResult<&'a Value> {
    args.first().ok_or_else(|| VmError::ArgumentCount {
        method: name.to_string(),
        given: args.len(),
        expected: 1,
    })
}

/// `<=>` result for an ordering (nil when incomparable)
fn ordering_value(ordering: Option<Ordering>) -> Value {
    match ordering {
        Some(Ordering::Less) => Value::Integer(-1),
        Some(Ordering::Equal) => Value::Integer(0),
        Some(Ordering::Greater) => Value::Integer(1),
        None => Value::Nil,
    }
}

fn identity_eq(_ctx: &ExecutionContext, recv: &Value, args: &[Value]) -> VmResult<Value> {
    Ok(Value::Bool(recv == first("==", args)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::Runtime;

    #[test]
    fn test_every_core_builtin_installed() {
        let mut registry = ClassRegistry::new();
        install(&mut registry);

        let expected: &[(BuiltinType, &[&str])] = &[
            (
                BuiltinType::Integer,
                &["==", "<=>", "<", "<=", ">", ">=", "+", "-"],
            ),
            (
                BuiltinType::Float,
                &["==", "<=>", "<", "<=", ">", ">=", "+", "-"],
            ),
            (BuiltinType::String, &["==", "<=>"]),
            (
                BuiltinType::Range,
                &["include?", "member?", "cover?", "===", "min", "max"],
            ),
            (BuiltinType::Nil, &["=="]),
            (BuiltinType::True, &["=="]),
            (BuiltinType::False, &["=="]),
        ];
        for (ty, names) in expected {
            let class = registry.get_class(registry.core_class(*ty)).unwrap();
            for name in *names {
                assert!(class.get_method(name).is_some(), "{}#{}", ty.name(), name);
            }
        }
    }

    #[test]
    fn test_nil_equality() {
        let runtime = Runtime::new();
        let ctx = runtime.new_context();

        assert_eq!(
            ctx.call_method(&Value::Nil, "==", &[Value::Nil]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            ctx.call_method(&Value::Bool(true), "==", &[Value::Bool(false)])
                .unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_ordering_value() {
        assert_eq!(ordering_value(Some(Ordering::Less)), Value::Integer(-1));
        assert_eq!(ordering_value(None), Value::Nil);
    }
}

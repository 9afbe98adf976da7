//! General method dispatch (the slow path)

use crate::value::Value;
use crate::vm::ExecutionContext;
use crate::{VmError, VmResult};
use std::cmp::Ordering;

/// Call `name` on `receiver` through the class hierarchy
///
/// The registry lock is released before the method body runs, so bodies may
/// define or remove methods.
pub fn call_method(
    ctx: &ExecutionContext,
    receiver: &Value,
    name: &str,
    args: &[Value],
) -> VmResult<Value> {
    let method = {
        let classes = ctx.runtime().classes();
        let class = classes.class_of(receiver);
        match classes.find_method(class, name) {
            Some(method) => method.clone(),
            None => {
                let class_name = classes
                    .get_class(class)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                tracing::trace!(class = %class_name, method = name, "dispatch miss");
                return Err(VmError::NoMethod {
                    class: class_name,
                    method: name.to_string(),
                });
            }
        }
    };

    if args.len() != method.arity() {
        return Err(VmError::ArgumentCount {
            method: name.to_string(),
            given: args.len(),
            expected: method.arity(),
        });
    }

    method.invoke(ctx, receiver, args)
}

/// Compare two values with `<=>`
///
/// Returns None when the values are not comparable (`<=>` answered nil).
pub fn compare(ctx: &ExecutionContext, a: &Value, b: &Value) -> VmResult<Option<Ordering>> {
    match call_method(ctx, a, "<=>", std::slice::from_ref(b))? {
        Value::Integer(n) => Ok(Some(n.cmp(&0))),
        Value::Nil => Ok(None),
        other => Err(VmError::TypeError(format!(
            "<=> returned {} instead of an Integer or nil",
            other
        ))),
    }
}

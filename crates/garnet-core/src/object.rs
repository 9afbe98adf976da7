//! Object model and class system

use crate::builtins::BuiltinType;
use crate::value::Value;
use crate::vm::ExecutionContext;
use crate::VmResult;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Class identifier (index into the runtime class registry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    /// Create a class ID from a registry index
    pub const fn new(index: usize) -> Self {
        ClassId(index)
    }

    /// Get the raw index
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

/// Instance of a user-defined class
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Class of this instance
    pub class: ClassId,
}

impl Instance {
    /// Create an instance of `class`
    pub fn new(class: ClassId) -> Self {
        Self { class }
    }
}

/// Native method body: `(context, receiver, args) -> result`
pub type MethodFn = dyn Fn(&ExecutionContext, &Value, &[Value]) -> VmResult<Value> + Send + Sync;

/// A method bound in a class's method table
#[derive(Clone)]
pub struct Method {
    arity: usize,
    body: Arc<MethodFn>,
}

impl Method {
    /// Create a method taking exactly `arity` arguments
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&ExecutionContext, &Value, &[Value]) -> VmResult<Value> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    /// Number of arguments this method expects
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke the method body without arity checks
    pub fn invoke(&self, ctx: &ExecutionContext, receiver: &Value, args: &[Value]) -> VmResult<Value> {
        (self.body)(ctx, receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("arity", &self.arity).finish()
    }
}

/// Class definition metadata
#[derive(Debug, Clone)]
pub struct Class {
    /// Class ID (unique identifier)
    pub id: ClassId,
    /// Class name
    pub name: String,
    /// Parent class (None for root classes)
    pub parent: Option<ClassId>,
    /// Tracked core type, only set on the core class itself
    pub builtin_type: Option<BuiltinType>,
    methods: FxHashMap<String, Method>,
}

impl Class {
    /// Create a new class
    pub fn new(id: ClassId, name: String) -> Self {
        Self {
            id,
            name,
            parent: None,
            builtin_type: None,
            methods: FxHashMap::default(),
        }
    }

    /// Create a new class with parent
    pub fn with_parent(id: ClassId, name: String, parent: ClassId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(id, name)
        }
    }

    /// Create the class backing a tracked core type
    pub fn core(id: ClassId, ty: BuiltinType) -> Self {
        Self {
            builtin_type: Some(ty),
            ..Self::new(id, ty.name().to_string())
        }
    }

    /// Bind a method, returning the one it replaced
    pub fn add_method(&mut self, name: &str, method: Method) -> Option<Method> {
        self.methods.insert(name.to_string(), method)
    }

    /// Unbind a method
    pub fn remove_method(&mut self, name: &str) -> Option<Method> {
        self.methods.remove(name)
    }

    /// Get a method defined directly on this class
    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Number of methods defined directly on this class
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_class() {
        let class = Class::core(ClassId::new(13), BuiltinType::Range);
        assert_eq!(class.name, "Range");
        assert_eq!(class.builtin_type, Some(BuiltinType::Range));
        assert!(class.parent.is_none());
    }

    #[test]
    fn test_subclass_has_no_builtin_type() {
        let class = Class::with_parent(ClassId::new(20), "MyRange".to_string(), ClassId::new(13));
        assert_eq!(class.parent, Some(ClassId::new(13)));
        assert!(class.builtin_type.is_none());
    }

    #[test]
    fn test_method_table() {
        let mut class = Class::new(ClassId::new(0), "Point".to_string());
        assert!(class.get_method("x").is_none());

        let previous = class.add_method("x", Method::new(0, |_, _, _| Ok(Value::Integer(1))));
        assert!(previous.is_none());
        assert_eq!(class.method_count(), 1);

        let previous = class.add_method("x", Method::new(0, |_, _, _| Ok(Value::Integer(2))));
        assert!(previous.is_some());
        assert_eq!(class.method_count(), 1);

        assert!(class.remove_method("x").is_some());
        assert!(class.remove_method("x").is_none());
        assert_eq!(class.method_count(), 0);
    }
}

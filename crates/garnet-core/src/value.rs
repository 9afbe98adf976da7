//! Runtime value representation

use crate::builtins::BuiltinType;
use crate::object::Instance;
use std::fmt;
use std::sync::Arc;

/// A runtime value
///
/// Immediates are stored inline; heap values are reference counted so they
/// can be shared across execution contexts.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// nil
    Nil,
    /// true / false
    Bool(bool),
    /// 64-bit integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// Immutable string
    Str(Arc<str>),
    /// Interned symbol name
    Symbol(Arc<str>),
    /// Range of two values
    Range(Arc<RangeValue>),
    /// Instance of a user-defined class
    Object(Arc<Instance>),
}

impl Value {
    /// Create a string value
    pub fn string(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }

    /// Create a symbol value
    pub fn symbol(s: &str) -> Self {
        Value::Symbol(Arc::from(s))
    }

    /// Create a range value
    pub fn range(begin: Value, end: Value, exclusive: bool) -> Self {
        Value::Range(Arc::new(RangeValue {
            begin,
            end,
            exclusive,
        }))
    }

    /// Tracked core type of this value, None for user objects
    pub fn builtin_type(&self) -> Option<BuiltinType> {
        self.core_type().ok()
    }

    /// Core type of this value, or the instance for user objects
    pub(crate) fn core_type(&self) -> Result<BuiltinType, &Instance> {
        let ty = match self {
            Value::Nil => BuiltinType::Nil,
            Value::Bool(true) => BuiltinType::True,
            Value::Bool(false) => BuiltinType::False,
            Value::Integer(_) => BuiltinType::Integer,
            Value::Float(_) => BuiltinType::Float,
            Value::Str(_) => BuiltinType::String,
            Value::Symbol(_) => BuiltinType::Symbol,
            Value::Range(_) => BuiltinType::Range,
            Value::Object(obj) => return Err(&**obj),
        };
        Ok(ty)
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self.builtin_type() {
            Some(ty) => ty.name(),
            None => "Object",
        }
    }

    /// Everything except nil and false is truthy
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Extract a range
    pub fn as_range(&self) -> Option<&RangeValue> {
        match self {
            Value::Range(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::Range(r) => {
                let dots = if r.exclusive { "..." } else { ".." };
                write!(f, "{}{}{}", r.begin, dots, r.end)
            }
            Value::Object(obj) => write!(f, "#<object class={}>", obj.class.as_usize()),
        }
    }
}

/// A `begin..end` or `begin...end` range
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue {
    /// Lower bound
    pub begin: Value,
    /// Upper bound
    pub end: Value,
    /// True for `...` (end excluded)
    pub exclusive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_types() {
        assert_eq!(Value::Nil.builtin_type(), Some(BuiltinType::Nil));
        assert_eq!(Value::Bool(true).builtin_type(), Some(BuiltinType::True));
        assert_eq!(Value::Bool(false).builtin_type(), Some(BuiltinType::False));
        assert_eq!(Value::Integer(1).builtin_type(), Some(BuiltinType::Integer));
        assert_eq!(Value::Float(1.5).builtin_type(), Some(BuiltinType::Float));
        assert_eq!(Value::string("a").builtin_type(), Some(BuiltinType::String));
        assert_eq!(Value::symbol("a").builtin_type(), Some(BuiltinType::Symbol));
        assert_eq!(
            Value::range(Value::Integer(1), Value::Integer(2), false).builtin_type(),
            Some(BuiltinType::Range)
        );
    }

    #[test]
    fn test_objects_have_no_core_type() {
        use crate::object::ClassId;

        let obj = Value::Object(Arc::new(Instance::new(ClassId::new(20))));
        assert_eq!(obj.builtin_type(), None);
        assert_eq!(obj.core_type().map_err(|o| o.class), Err(ClassId::new(20)));
        assert_eq!(obj.type_name(), "Object");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Integer(1).type_name(), "Integer");
        assert_eq!(Value::Nil.type_name(), "NilClass");
        assert_eq!(Value::Bool(false).type_name(), "FalseClass");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::string("").is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::range(Value::Integer(1), Value::Integer(100), false).to_string(), "1..100");
        assert_eq!(Value::range(Value::Integer(1), Value::Integer(100), true).to_string(), "1...100");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::symbol("eq").to_string(), ":eq");
    }
}

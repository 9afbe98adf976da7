//! Garnet VM Core Runtime
//!
//! This crate provides the parts of the runtime that hot call sites depend on:
//! - Builtin redefinition flags (lock-free "is this method still builtin?")
//! - Runtime instance owning the flags and the class registry
//! - Execution contexts holding a direct view of the flags
//! - Method dispatch (the slow path)
//! - Fast-path operations gated by the flags

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod bootstrap;
pub mod builtins;
pub mod config;
pub mod object;
pub mod ops;
pub mod value;
pub mod vm;

pub use builtins::{BuiltinFlags, BuiltinMethod, BuiltinType};
pub use config::{InvalidationScope, RuntimeOptions};
pub use object::{Class, ClassId, Instance, Method};
pub use value::{RangeValue, Value};
pub use vm::{ClassRegistry, ContextId, ExecutionContext, Runtime};

/// VM execution errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VmError {
    /// Method not found on the receiver's class or its ancestors
    #[error("undefined method '{method}' for {class}")]
    NoMethod {
        /// Receiver class name
        class: String,
        /// Method name
        method: String,
    },

    /// Wrong number of arguments
    #[error("wrong number of arguments to '{method}' (given {given}, expected {expected})")]
    ArgumentCount {
        /// Method name
        method: String,
        /// Arguments passed
        given: usize,
        /// Arguments expected
        expected: usize,
    },

    /// Class ID not registered
    #[error("Class not found: {0:?}")]
    ClassNotFound(ClassId),

    /// Type error
    #[error("Type error: {0}")]
    TypeError(String),

    /// Integer arithmetic overflowed
    #[error("Integer overflow in '{0}'")]
    IntegerOverflow(&'static str),
}

/// VM execution result
pub type VmResult<T> = Result<T, VmError>;

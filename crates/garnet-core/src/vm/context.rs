//! Execution Context
//!
//! Each ExecutionContext represents one concurrent thread of execution:
//! - A unique ID
//! - Its runtime (for slow-path dispatch)
//! - A direct reference to the runtime's builtin flags
//!
//! The flag reference is taken once at construction and never replaced. Only
//! the words it points at change, so fast-path checks never touch the
//! runtime object.

use crate::builtins::BuiltinFlags;
use crate::value::Value;
use crate::vm::{dispatch, Runtime};
use crate::VmResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for an ExecutionContext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Create a new unique context ID
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        ContextId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-thread view of a runtime
pub struct ExecutionContext {
    /// Unique context ID
    id: ContextId,

    /// Builtin flags, shared with the runtime
    builtins: Arc<BuiltinFlags>,

    /// Owning runtime
    runtime: Arc<Runtime>,
}

impl ExecutionContext {
    /// Create a new context bound to `runtime`
    pub fn new(runtime: &Arc<Runtime>) -> Self {
        Self {
            id: ContextId::new(),
            builtins: Arc::clone(runtime.builtin_flags()),
            runtime: Arc::clone(runtime),
        }
    }

    /// Get the context ID
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Builtin flags for fast-path checks
    #[inline(always)]
    pub fn builtins(&self) -> &BuiltinFlags {
        &self.builtins
    }

    /// Owning runtime
    pub fn runtime(&self) -> &Arc<Runtime> {
        &self.runtime
    }

    /// Call a method through full dispatch
    pub fn call_method(&self, receiver: &Value, name: &str, args: &[Value]) -> VmResult<Value> {
        dispatch::call_method(self, receiver, name, args)
    }
}

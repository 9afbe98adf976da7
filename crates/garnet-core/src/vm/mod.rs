//! Runtime instances, execution contexts and method dispatch

mod class_registry;
mod context;
pub mod dispatch;
mod runtime;

pub use class_registry::ClassRegistry;
pub use context::{ContextId, ExecutionContext};
pub use runtime::Runtime;

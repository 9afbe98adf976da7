//! Runtime configuration

/// Which method definitions invalidate a core type's builtin flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidationScope {
    /// Only definitions made directly on a tracked core class
    ///
    /// Fast paths only fire for receivers whose class *is* the core class,
    /// so a subclass override cannot affect them.
    #[default]
    ExactType,

    /// Definitions on any class that inherits from a tracked core class
    /// also invalidate that core type
    IncludeDerived,
}

/// Options for creating a Runtime
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// How far a redefinition reaches
    pub invalidation_scope: InvalidationScope,
}

impl RuntimeOptions {
    /// Options that also invalidate on subclass redefinitions
    pub fn include_derived() -> Self {
        Self {
            invalidation_scope: InvalidationScope::IncludeDerived,
        }
    }
}

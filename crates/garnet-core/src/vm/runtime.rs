//! Runtime instance
//!
//! A `Runtime` owns exactly one [`BuiltinFlags`] store and the class
//! registry. Every method-table mutation goes through [`Runtime::define_method`]
//! or [`Runtime::remove_method`], which commit the change and then invalidate
//! the matching builtin flag before returning.

use crate::bootstrap;
use crate::builtins::{BuiltinFlags, BuiltinMethod, BuiltinType};
use crate::config::{InvalidationScope, RuntimeOptions};
use crate::object::{Class, ClassId, Method};
use crate::vm::{ClassRegistry, ExecutionContext};
use crate::{VmError, VmResult};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runtime instance shared by all execution contexts
pub struct Runtime {
    /// Builtin redefinition flags (one per runtime)
    builtins: Arc<BuiltinFlags>,

    /// Classes and their method tables
    classes: RwLock<ClassRegistry>,

    /// Set while core builtins are being installed
    booting: AtomicBool,

    options: RuntimeOptions,
}

impl Runtime {
    /// Create a runtime with default options
    pub fn new() -> Arc<Self> {
        Self::with_options(RuntimeOptions::default())
    }

    /// Create a runtime with specific options
    pub fn with_options(options: RuntimeOptions) -> Arc<Self> {
        let runtime = Self::allocate(options);
        runtime.finish_boot();
        Arc::new(runtime)
    }

    /// Create a runtime and run `extend` while still booting
    ///
    /// Methods defined by `extend` are installed as builtins and do not
    /// invalidate anything.
    pub fn boot<F>(options: RuntimeOptions, extend: F) -> VmResult<Arc<Self>>
    where
        F: FnOnce(&Runtime) -> VmResult<()>,
    {
        let runtime = Self::allocate(options);
        extend(&runtime)?;
        runtime.finish_boot();
        Ok(Arc::new(runtime))
    }

    fn allocate(options: RuntimeOptions) -> Self {
        let runtime = Self {
            builtins: Arc::new(BuiltinFlags::new()),
            classes: RwLock::new(ClassRegistry::new()),
            booting: AtomicBool::new(true),
            options,
        };
        bootstrap::install(&mut runtime.classes.write());
        runtime
    }

    fn finish_boot(&self) {
        self.booting.store(false, Ordering::Release);
        tracing::trace!(
            classes = self.classes.read().len(),
            "runtime boot complete"
        );
    }

    /// Check if the runtime is still installing its builtins
    pub fn is_booting(&self) -> bool {
        self.booting.load(Ordering::Acquire)
    }

    /// Builtin redefinition flags shared by every context of this runtime
    pub fn builtin_flags(&self) -> &Arc<BuiltinFlags> {
        &self.builtins
    }

    /// Runtime options
    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// Read access to the class registry
    pub fn classes(&self) -> RwLockReadGuard<'_, ClassRegistry> {
        self.classes.read()
    }

    /// Class backing a tracked core type
    pub fn core_class(&self, ty: BuiltinType) -> ClassId {
        self.classes.read().core_class(ty)
    }

    /// Create a new execution context bound to this runtime
    pub fn new_context(self: &Arc<Self>) -> ExecutionContext {
        ExecutionContext::new(self)
    }

    /// Register a new class, optionally inheriting from `parent`
    pub fn define_class(&self, name: &str, parent: Option<ClassId>) -> VmResult<ClassId> {
        let mut classes = self.classes.write();
        let id = classes.next_class_id();
        let class = match parent {
            Some(parent) => {
                if classes.get_class(parent).is_none() {
                    return Err(VmError::ClassNotFound(parent));
                }
                Class::with_parent(id, name.to_string(), parent)
            }
            None => Class::new(id, name.to_string()),
        };
        Ok(classes.register_class(class))
    }

    /// Define or redefine a method
    ///
    /// The method table is updated first; the builtin flag for
    /// `(name, class)` is invalidated afterwards, before this returns.
    pub fn define_method(&self, class: ClassId, name: &str, method: Method) -> VmResult<()> {
        {
            let mut classes = self.classes.write();
            let target = classes
                .get_class_mut(class)
                .ok_or(VmError::ClassNotFound(class))?;
            target.add_method(name, method);
        }
        self.invalidate_builtin(class, name);
        Ok(())
    }

    /// Remove a method defined directly on `class`
    pub fn remove_method(&self, class: ClassId, name: &str) -> VmResult<Method> {
        let removed = {
            let mut classes = self.classes.write();
            let target = classes
                .get_class_mut(class)
                .ok_or(VmError::ClassNotFound(class))?;
            target
                .remove_method(name)
                .ok_or_else(|| VmError::NoMethod {
                    class: target.name.clone(),
                    method: name.to_string(),
                })?
        };
        self.invalidate_builtin(class, name);
        Ok(removed)
    }

    /// Invalidate the builtin flag for a method defined on `class`
    ///
    /// No-op while booting, for untracked method names, and for classes
    /// outside the configured invalidation scope.
    pub fn invalidate_builtin(&self, class: ClassId, name: &str) {
        if self.is_booting() {
            return;
        }
        let Some(method) = BuiltinMethod::from_name(name) else {
            return;
        };
        let ty = {
            let classes = self.classes.read();
            match self.options.invalidation_scope {
                InvalidationScope::ExactType => {
                    classes.get_class(class).and_then(|c| c.builtin_type)
                }
                InvalidationScope::IncludeDerived => classes.tracked_ancestor(class),
            }
        };
        if let Some(ty) = ty {
            self.builtins.invalidate_method(method, ty);
        }
    }
}

//! Class registry for managing runtime class metadata

use crate::builtins::{BuiltinType, TYPE_COUNT};
use crate::object::{Class, ClassId, Method};
use crate::value::Value;
use rustc_hash::FxHashMap;

/// Class registry for the runtime
///
/// Core classes are registered first, in bit order, so a tracked type's class
/// ID equals its bit position.
#[derive(Debug)]
pub struct ClassRegistry {
    /// Classes indexed by ID
    classes: Vec<Class>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, ClassId>,
}

impl ClassRegistry {
    /// Create a registry holding one class per tracked core type
    pub fn new() -> Self {
        let mut registry = Self {
            classes: Vec::new(),
            name_to_id: FxHashMap::default(),
        };
        for ty in BuiltinType::ALL {
            let id = registry.next_class_id();
            registry.register_class(Class::core(id, ty));
        }
        registry
    }

    /// Register a new class
    pub fn register_class(&mut self, class: Class) -> ClassId {
        let id = class.id;
        debug_assert_eq!(id.as_usize(), self.classes.len());
        self.name_to_id.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    /// Get next available class ID
    pub fn next_class_id(&self) -> ClassId {
        ClassId::new(self.classes.len())
    }

    /// Class backing a tracked core type
    pub fn core_class(&self, ty: BuiltinType) -> ClassId {
        ClassId::new(ty.bit() as usize)
    }

    /// Class of a value
    pub fn class_of(&self, value: &Value) -> ClassId {
        match value.core_type() {
            Ok(ty) => self.core_class(ty),
            Err(obj) => obj.class,
        }
    }

    /// Get class by ID
    pub fn get_class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.as_usize())
    }

    /// Get mutable class by ID
    pub fn get_class_mut(&mut self, id: ClassId) -> Option<&mut Class> {
        self.classes.get_mut(id.as_usize())
    }

    /// Get class by name
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(id.as_usize()))
    }

    /// Iterate over a class and its ancestors, nearest first
    pub fn ancestors(&self, id: ClassId) -> impl Iterator<Item = &Class> + '_ {
        std::iter::successors(self.get_class(id), move |class| {
            class.parent.and_then(|parent| self.get_class(parent))
        })
    }

    /// Resolve a method through the ancestor chain
    pub fn find_method(&self, id: ClassId, name: &str) -> Option<&Method> {
        self.ancestors(id).find_map(|class| class.get_method(name))
    }

    /// Nearest tracked core type in the ancestor chain
    pub fn tracked_ancestor(&self, id: ClassId) -> Option<BuiltinType> {
        self.ancestors(id).find_map(|class| class.builtin_type)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Number of classes registered beyond the core classes
    pub fn user_class_count(&self) -> usize {
        self.classes.len() - TYPE_COUNT
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

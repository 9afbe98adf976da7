//! Builtin method redefinition tracking
//!
//! Hot operations (integer equality, range membership, ...) may skip method
//! dispatch while the methods they depend on still have their original
//! implementation. This module answers "is method M on core type T still
//! builtin?" with one load and one mask, without taking any lock.
//!
//! - [`registry`]: fixed tables of tracked types (bits) and methods (slots)
//! - [`BuiltinFlags`]: the per-runtime flag store, invalidated with atomic OR
//! - [`checks`]: named gates used by fast-path call sites
//!
//! Invalidation is one-way. A writer sees its own invalidation immediately;
//! other threads see it after the release/acquire handoff, so a concurrent
//! reader may take the fast path one last time while the redefinition is
//! being published.

pub mod checks;
mod flags;
pub mod registry;

pub use checks::NAMED_CHECKS;
pub use flags::BuiltinFlags;
pub use registry::{BuiltinMethod, BuiltinType, SLOT_COUNT, TYPE_COUNT};

/// One flag word: bit per tracked type
pub type FlagWord = u16;

//! Shared flag store
//!
//! One `AtomicU16` per tracked method. Bit `b` of the word for method `m`
//! is set once `m` has been redefined for the type at bit `b`. Bits are
//! only ever set, never cleared, for the lifetime of the owning runtime.
//!
//! # Memory Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ words[0]  `+`         (2 bytes)              │
//! │ words[1]  `-`         (2 bytes)              │
//! │ ...                                          │
//! │ words[30] `cover?`    (2 bytes)              │
//! ├──────────────────────────────────────────────┤  62 bytes
//! │ padding               (2 bytes)              │
//! └──────────────────────────────────────────────┘  64 bytes, 64-aligned
//! ```

use super::registry::{BuiltinMethod, BuiltinType, SLOT_COUNT};
use super::FlagWord;
use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};

/// Builtin redefinition flags for one runtime instance
///
/// Reads are a single acquire load plus a mask test. Writes are a single
/// atomic `fetch_or`, so concurrent invalidations of different bits in the
/// same word never lose an update.
#[repr(C, align(64))]
pub struct BuiltinFlags {
    words: [AtomicU16; SLOT_COUNT],
}

impl BuiltinFlags {
    /// Payload size in bytes (excluding alignment padding)
    pub const PAYLOAD_BYTES: usize = SLOT_COUNT * std::mem::size_of::<FlagWord>();

    /// Allocate a flag store with every method builtin for every type
    pub fn new() -> Self {
        Self {
            words: [const { AtomicU16::new(0) }; SLOT_COUNT],
        }
    }

    /// Mark `name` as redefined for `ty`
    ///
    /// Untracked method names are ignored. Returns true only when this call
    /// flipped the bit; repeated invalidations are no-ops.
    pub fn invalidate(&self, name: &str, ty: BuiltinType) -> bool {
        match BuiltinMethod::from_name(name) {
            Some(method) => self.invalidate_method(method, ty),
            None => false,
        }
    }

    /// Mark a resolved method slot as redefined for `ty`
    pub fn invalidate_method(&self, method: BuiltinMethod, ty: BuiltinType) -> bool {
        let mask = ty.mask();
        let previous = self.words[method.slot()].fetch_or(mask, Ordering::Release);
        let flipped = previous & mask == 0;
        if flipped {
            tracing::debug!(
                method = method.name(),
                ty = ty.name(),
                slot = method.slot(),
                bit = ty.bit(),
                "builtin method invalidated"
            );
        }
        flipped
    }

    /// Check whether `method` is still builtin for `ty`
    #[inline(always)]
    pub fn is_builtin(&self, method: BuiltinMethod, ty: BuiltinType) -> bool {
        self.words[method.slot()].load(Ordering::Acquire) & ty.mask() == 0
    }

    /// Current word for one method slot
    pub fn word(&self, method: BuiltinMethod) -> FlagWord {
        self.words[method.slot()].load(Ordering::Acquire)
    }

    /// Copy of every word, in slot order
    pub fn snapshot(&self) -> [FlagWord; SLOT_COUNT] {
        let mut out = [0; SLOT_COUNT];
        for (dst, word) in out.iter_mut().zip(&self.words) {
            *dst = word.load(Ordering::Acquire);
        }
        out
    }

    /// True if nothing has been invalidated yet
    pub fn is_pristine(&self) -> bool {
        self.words.iter().all(|w| w.load(Ordering::Acquire) == 0)
    }

    /// Iterate over every (method, type) pair currently marked as redefined
    pub fn overridden(&self) -> impl Iterator<Item = (BuiltinMethod, BuiltinType)> + '_ {
        BuiltinMethod::ALL.into_iter().flat_map(move |method| {
            let word = self.word(method);
            BuiltinType::ALL
                .into_iter()
                .filter(move |ty| word & ty.mask() != 0)
                .map(move |ty| (method, ty))
        })
    }
}

impl Default for BuiltinFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuiltinFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for method in BuiltinMethod::ALL {
            let word = self.word(method);
            if word != 0 {
                map.entry(&method.name(), &format_args!("{:#06x}", word));
            }
        }
        map.finish()
    }
}

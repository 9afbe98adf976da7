//! Hot operations with builtin fast paths
//!
//! Every operation follows the same protocol:
//! 1. Ask the gate whether the method is still builtin for the receiver type.
//! 2. If so, try a specialized routine. Routines return `None` when they do
//!    not handle the operand shapes.
//! 3. Otherwise, or on `None`, dispatch the method by name.
//!
//! The `fast_*` routines are exposed so the two paths can be compared
//! directly.

mod equality;
mod range;

pub use equality::{equal, fast_equal};
pub use range::{
    case_eq, cover, fast_cover, fast_include, fast_max, fast_min, include, max, min,
};

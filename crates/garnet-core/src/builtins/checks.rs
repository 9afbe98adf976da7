//! Named fast-path gates
//!
//! Each check is a fixed (method, type) pair composed with
//! [`BuiltinFlags::is_builtin`]. Only pairs consumed by a specialized routine
//! get a name here.

use super::flags::BuiltinFlags;
use super::registry::{BuiltinMethod, BuiltinType};

macro_rules! builtin_checks {
    ($($(#[$doc:meta])* $name:ident => ($method:ident, $ty:ident);)*) => {
        impl BuiltinFlags {
            $(
                $(#[$doc])*
                #[inline(always)]
                pub fn $name(&self) -> bool {
                    self.is_builtin(BuiltinMethod::$method, BuiltinType::$ty)
                }
            )*
        }

        /// Every named check with the pair it reads
        pub const NAMED_CHECKS: &[(&str, BuiltinMethod, BuiltinType)] = &[
            $((stringify!($name), BuiltinMethod::$method, BuiltinType::$ty),)*
        ];
    };
}

builtin_checks! {
    /// `Integer#==` is builtin
    integer_equals => (Eq, Integer);
    /// `Float#==` is builtin
    float_equals => (Eq, Float);
    /// `Integer#<=>` is builtin
    integer_compare => (Cmp, Integer);
    /// `Float#<=>` is builtin
    float_compare => (Cmp, Float);
    /// `String#<=>` is builtin
    string_compare => (Cmp, String);
    /// `Integer#-` is builtin
    integer_minus => (Minus, Integer);
    /// `Range#include?` is builtin
    range_include => (IncludeP, Range);
    /// `Range#cover?` is builtin
    range_cover => (CoverP, Range);
    /// `Range#===` is builtin
    range_eqq => (Eqq, Range);
    /// `Range#min` is builtin
    range_min => (Min, Range);
    /// `Range#max` is builtin
    range_max => (Max, Range);
}

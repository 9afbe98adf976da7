//! Tracked core types and hot methods
//!
//! Both sets are fixed at build time. A `BuiltinType` names a bit position
//! inside a [`FlagWord`](super::FlagWord); a `BuiltinMethod` names the slot
//! (word index) inside [`BuiltinFlags`](super::BuiltinFlags).

use super::FlagWord;

/// Number of tracked core types (bit positions per flag word)
pub const TYPE_COUNT: usize = 14;

/// Number of tracked hot methods (words in the flag store)
pub const SLOT_COUNT: usize = 31;

const _: () = assert!(TYPE_COUNT <= FlagWord::BITS as usize);

/// Core type whose builtin methods are tracked
///
/// The discriminant is the bit position in every flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BuiltinType {
    /// Fixed-width integers
    Integer = 0,
    /// Double-precision floats
    Float = 1,
    /// Strings
    String = 2,
    /// Arrays
    Array = 3,
    /// Hash maps
    Hash = 4,
    /// Arbitrary-precision integers
    Bignum = 5,
    /// Interned symbols
    Symbol = 6,
    /// Time values
    Time = 7,
    /// Regular expressions
    Regexp = 8,
    /// The nil singleton
    Nil = 9,
    /// The true singleton
    True = 10,
    /// The false singleton
    False = 11,
    /// Callables (procs and lambdas)
    Proc = 12,
    /// Ranges
    Range = 13,
}

impl BuiltinType {
    /// All tracked types in bit order
    pub const ALL: [BuiltinType; TYPE_COUNT] = [
        BuiltinType::Integer,
        BuiltinType::Float,
        BuiltinType::String,
        BuiltinType::Array,
        BuiltinType::Hash,
        BuiltinType::Bignum,
        BuiltinType::Symbol,
        BuiltinType::Time,
        BuiltinType::Regexp,
        BuiltinType::Nil,
        BuiltinType::True,
        BuiltinType::False,
        BuiltinType::Proc,
        BuiltinType::Range,
    ];

    /// Bit position of this type within a flag word
    #[inline]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Single-bit mask for this type
    #[inline]
    pub const fn mask(self) -> FlagWord {
        1 << self.bit()
    }

    /// Class name of this type
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::Integer => "Integer",
            BuiltinType::Float => "Float",
            BuiltinType::String => "String",
            BuiltinType::Array => "Array",
            BuiltinType::Hash => "Hash",
            BuiltinType::Bignum => "Bignum",
            BuiltinType::Symbol => "Symbol",
            BuiltinType::Time => "Time",
            BuiltinType::Regexp => "Regexp",
            BuiltinType::Nil => "NilClass",
            BuiltinType::True => "TrueClass",
            BuiltinType::False => "FalseClass",
            BuiltinType::Proc => "Proc",
            BuiltinType::Range => "Range",
        }
    }

    /// Look up a tracked type by class name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }
}

/// Hot method whose builtin-ness is tracked
///
/// The discriminant is the slot index in the flag store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BuiltinMethod {
    /// `+`
    Plus = 0,
    /// `-`
    Minus = 1,
    /// `*`
    Mult = 2,
    /// `/`
    Div = 3,
    /// `%`
    Mod = 4,
    /// `==`
    Eq = 5,
    /// `===`
    Eqq = 6,
    /// `<`
    Lt = 7,
    /// `<=`
    Le = 8,
    /// `>`
    Gt = 9,
    /// `>=`
    Ge = 10,
    /// `<=>`
    Cmp = 11,
    /// `<<`
    Ltlt = 12,
    /// `[]`
    Aref = 13,
    /// `[]=`
    Aset = 14,
    /// `length`
    Length = 15,
    /// `size`
    Size = 16,
    /// `empty?`
    EmptyP = 17,
    /// `nil?`
    NilP = 18,
    /// `succ`
    Succ = 19,
    /// `!`
    Not = 20,
    /// `!=`
    Neq = 21,
    /// `=~`
    Match = 22,
    /// `freeze`
    Freeze = 23,
    /// `-@`
    UMinus = 24,
    /// `max`
    Max = 25,
    /// `min`
    Min = 26,
    /// `hash`
    Hash = 27,
    /// `call`
    Call = 28,
    /// `include?`
    IncludeP = 29,
    /// `cover?`
    CoverP = 30,
}

impl BuiltinMethod {
    /// All tracked methods in slot order
    pub const ALL: [BuiltinMethod; SLOT_COUNT] = [
        BuiltinMethod::Plus,
        BuiltinMethod::Minus,
        BuiltinMethod::Mult,
        BuiltinMethod::Div,
        BuiltinMethod::Mod,
        BuiltinMethod::Eq,
        BuiltinMethod::Eqq,
        BuiltinMethod::Lt,
        BuiltinMethod::Le,
        BuiltinMethod::Gt,
        BuiltinMethod::Ge,
        BuiltinMethod::Cmp,
        BuiltinMethod::Ltlt,
        BuiltinMethod::Aref,
        BuiltinMethod::Aset,
        BuiltinMethod::Length,
        BuiltinMethod::Size,
        BuiltinMethod::EmptyP,
        BuiltinMethod::NilP,
        BuiltinMethod::Succ,
        BuiltinMethod::Not,
        BuiltinMethod::Neq,
        BuiltinMethod::Match,
        BuiltinMethod::Freeze,
        BuiltinMethod::UMinus,
        BuiltinMethod::Max,
        BuiltinMethod::Min,
        BuiltinMethod::Hash,
        BuiltinMethod::Call,
        BuiltinMethod::IncludeP,
        BuiltinMethod::CoverP,
    ];

    /// Word index of this method in the flag store
    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Method name as it appears in method tables
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinMethod::Plus => "+",
            BuiltinMethod::Minus => "-",
            BuiltinMethod::Mult => "*",
            BuiltinMethod::Div => "/",
            BuiltinMethod::Mod => "%",
            BuiltinMethod::Eq => "==",
            BuiltinMethod::Eqq => "===",
            BuiltinMethod::Lt => "<",
            BuiltinMethod::Le => "<=",
            BuiltinMethod::Gt => ">",
            BuiltinMethod::Ge => ">=",
            BuiltinMethod::Cmp => "<=>",
            BuiltinMethod::Ltlt => "<<",
            BuiltinMethod::Aref => "[]",
            BuiltinMethod::Aset => "[]=",
            BuiltinMethod::Length => "length",
            BuiltinMethod::Size => "size",
            BuiltinMethod::EmptyP => "empty?",
            BuiltinMethod::NilP => "nil?",
            BuiltinMethod::Succ => "succ",
            BuiltinMethod::Not => "!",
            BuiltinMethod::Neq => "!=",
            BuiltinMethod::Match => "=~",
            BuiltinMethod::Freeze => "freeze",
            BuiltinMethod::UMinus => "-@",
            BuiltinMethod::Max => "max",
            BuiltinMethod::Min => "min",
            BuiltinMethod::Hash => "hash",
            BuiltinMethod::Call => "call",
            BuiltinMethod::IncludeP => "include?",
            BuiltinMethod::CoverP => "cover?",
        }
    }

    /// Look up the tracked slot for a method name
    ///
    /// Returns None for every method outside the hot set. Most methods are
    /// never tracked, so this is the common answer.
    pub fn from_name(name: &str) -> Option<Self> {
        let method = match name {
            "+" => BuiltinMethod::Plus,
            "-" => BuiltinMethod::Minus,
            "*" => BuiltinMethod::Mult,
            "/" => BuiltinMethod::Div,
            "%" => BuiltinMethod::Mod,
            "==" => BuiltinMethod::Eq,
            "===" => BuiltinMethod::Eqq,
            "<" => BuiltinMethod::Lt,
            "<=" => BuiltinMethod::Le,
            ">" => BuiltinMethod::Gt,
            ">=" => BuiltinMethod::Ge,
            "<=>" => BuiltinMethod::Cmp,
            "<<" => BuiltinMethod::Ltlt,
            "[]" => BuiltinMethod::Aref,
            "[]=" => BuiltinMethod::Aset,
            "length" => BuiltinMethod::Length,
            "size" => BuiltinMethod::Size,
            "empty?" => BuiltinMethod::EmptyP,
            "nil?" => BuiltinMethod::NilP,
            "succ" => BuiltinMethod::Succ,
            "!" => BuiltinMethod::Not,
            "!=" => BuiltinMethod::Neq,
            "=~" => BuiltinMethod::Match,
            "freeze" => BuiltinMethod::Freeze,
            "-@" => BuiltinMethod::UMinus,
            "max" => BuiltinMethod::Max,
            "min" => BuiltinMethod::Min,
            "hash" => BuiltinMethod::Hash,
            "call" => BuiltinMethod::Call,
            "include?" => BuiltinMethod::IncludeP,
            "cover?" => BuiltinMethod::CoverP,
            _ => return None,
        };
        Some(method)
    }
}

//! Argument kinds
//!
//! Every registered argument carries exactly one [`Kind`]. The kind decides
//! whether the argument consumes a value, how that value is coerced and how
//! it is rendered in help output.

use std::fmt;

/// The declared type of a registered argument
///
/// Numeric kinds keep the names of the C integer family they model; the Rust
/// width each one maps to is listed on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean switch, presence alone means true
    Flag,
    /// Arbitrary text
    String,
    /// Single character (`char`)
    Char,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `i64`
    LongLong,
    /// `u8`
    UChar,
    /// `u16`
    UShort,
    /// `u32`
    UInt,
    /// `u64`
    ULong,
    /// `u64`
    ULongLong,
    /// `usize`
    Size,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// Identified by position, always string-valued
    Positional,
}

impl Kind {
    /// Placeholder shown in help output when the caller supplies none
    ///
    /// Flags never show a placeholder and positionals use their own name,
    /// so both return `None`.
    pub const fn default_placeholder(self) -> Option<&'static str> {
        match self {
            Kind::Flag | Kind::Positional => None,
            Kind::String => Some("STR"),
            Kind::Char => Some("CHAR"),
            Kind::Short => Some("SHORT"),
            Kind::Int => Some("INT"),
            Kind::Long => Some("LONG"),
            Kind::LongLong => Some("LLONG"),
            Kind::UChar => Some("UCHAR"),
            Kind::UShort => Some("USHORT"),
            Kind::UInt => Some("UINT"),
            Kind::ULong => Some("ULONG"),
            Kind::ULongLong => Some("ULLONG"),
            Kind::Size => Some("SIZE"),
            Kind::Float => Some("FLT"),
            Kind::Double => Some("DBL"),
        }
    }

    /// Whether an occurrence of this argument consumes a value token
    pub const fn takes_value(self) -> bool {
        !matches!(self, Kind::Flag)
    }

    /// Whether this kind is one of the pre-seeded scalar kinds
    ///
    /// Scalars always hold a value (their default until overwritten), so the
    /// required check only looks at presence for them.
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Kind::Flag | Kind::String | Kind::Positional)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Kind::Flag => "flag",
            Kind::String => "string",
            Kind::Char => "char",
            Kind::Short => "short",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::LongLong => "long long",
            Kind::UChar => "uchar",
            Kind::UShort => "ushort",
            Kind::UInt => "uint",
            Kind::ULong => "ulong",
            Kind::ULongLong => "ullong",
            Kind::Size => "size",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::Positional => "positional",
        };
        f.write_str(word)
    }
}

//! Argument specifications
//!
//! An [`ArgumentSpec`] is one registered argument: its identity, display
//! metadata, required-ness, presence state and its typed [`Slot`]. The slot
//! is a tagged sum type, so a spec only ever stores the value and default of
//! its own kind.

use super::kind::Kind;

/// Handle returned by every registration call
///
/// Handles are indices into the owning registry and stay valid for the
/// registry's whole lifetime since specs are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgId(pub(crate) usize);

impl ArgId {
    /// Position of the spec in registration order
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Current value paired with the declared default
#[derive(Debug, Clone, PartialEq)]
pub struct Typed<T> {
    /// Value after parsing; equal to `default` until the argument is matched
    pub value: T,
    /// Value declared at registration
    pub default: T,
}

impl<T: Clone> Typed<T> {
    /// Create a slot whose current value is pre-seeded from the default
    pub fn seeded(default: T) -> Self {
        Typed {
            value: default.clone(),
            default,
        }
    }
}

/// Typed storage for one argument, one variant per [`Kind`]
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Flag,
    Str(Typed<Option<String>>),
    Char(Typed<char>),
    Short(Typed<i16>),
    Int(Typed<i32>),
    Long(Typed<i64>),
    LongLong(Typed<i64>),
    UChar(Typed<u8>),
    UShort(Typed<u16>),
    UInt(Typed<u32>),
    ULong(Typed<u64>),
    ULongLong(Typed<u64>),
    Size(Typed<usize>),
    Float(Typed<f32>),
    Double(Typed<f64>),
    /// Positionals have no default; `None` until a token is assigned
    Positional(Option<String>),
}

impl Slot {
    /// The kind this slot stores
    pub const fn kind(&self) -> Kind {
        match self {
            Slot::Flag => Kind::Flag,
            Slot::Str(_) => Kind::String,
            Slot::Char(_) => Kind::Char,
            Slot::Short(_) => Kind::Short,
            Slot::Int(_) => Kind::Int,
            Slot::Long(_) => Kind::Long,
            Slot::LongLong(_) => Kind::LongLong,
            Slot::UChar(_) => Kind::UChar,
            Slot::UShort(_) => Kind::UShort,
            Slot::UInt(_) => Kind::UInt,
            Slot::ULong(_) => Kind::ULong,
            Slot::ULongLong(_) => Kind::ULongLong,
            Slot::Size(_) => Kind::Size,
            Slot::Float(_) => Kind::Float,
            Slot::Double(_) => Kind::Double,
            Slot::Positional(_) => Kind::Positional,
        }
    }

    /// Text held by a string or positional slot
    pub fn text(&self) -> Option<&str> {
        match self {
            Slot::Str(typed) => typed.value.as_deref(),
            Slot::Positional(value) => value.as_deref(),
            _ => None,
        }
    }
}

/// One registered argument
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSpec {
    short: Option<char>,
    long: Option<String>,
    placeholder: Option<String>,
    help: String,
    required: bool,
    present: bool,
    slot: Slot,
}

impl ArgumentSpec {
    /// Build a flag or typed option spec
    ///
    /// When `placeholder` is `None` the kind's default placeholder is used.
    pub(crate) fn option(
        short: Option<char>,
        long: Option<&str>,
        placeholder: Option<&str>,
        help: &str,
        required: bool,
        slot: Slot,
    ) -> Self {
        let placeholder = placeholder
            .or_else(|| slot.kind().default_placeholder())
            .map(str::to_string);

        ArgumentSpec {
            short,
            long: long.map(str::to_string),
            placeholder,
            help: help.to_string(),
            required,
            present: false,
            slot,
        }
    }

    /// Build a positional spec; its name doubles as identifier and placeholder
    pub(crate) fn positional(name: &str, help: &str, required: bool) -> Self {
        ArgumentSpec {
            short: None,
            long: None,
            placeholder: Some(name.to_string()),
            help: help.to_string(),
            required,
            present: false,
            slot: Slot::Positional(None),
        }
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the argument was matched at least once during parsing
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Name used in diagnostics
    ///
    /// `--long` when a long name exists, otherwise `-c`. Positionals are
    /// named by their placeholder.
    pub fn display_name(&self) -> String {
        if let Slot::Positional(_) = self.slot {
            return self.placeholder.clone().unwrap_or_default();
        }
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => "(arg)".to_string(),
        }
    }

    /// Lookup rule for a name token
    ///
    /// Matches the long name exactly, then the short name when the token is a
    /// single character, then the placeholder of a positional.
    pub fn matches(&self, name: &str) -> bool {
        if self.long.as_deref() == Some(name) {
            return true;
        }

        let mut chars = name.chars();
        if let (Some(only), None, Some(short)) = (chars.next(), chars.next(), self.short) {
            if only == short {
                return true;
            }
        }

        matches!(self.slot, Slot::Positional(_)) && self.placeholder.as_deref() == Some(name)
    }

    pub(crate) fn mark_present(&mut self) {
        self.present = true;
    }

    pub(crate) fn slot_mut(&mut self) -> &mut Slot {
        &mut self.slot
    }
}

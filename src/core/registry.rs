//! Argument registry
//!
//! This module provides the `Registry`, the ordered collection of argument
//! specifications a program declares before parsing.
//!
//! The Registry is responsible for:
//! - Appending flags, typed options and positionals in registration order
//! - Pre-seeding each typed option's value from its default
//! - Handing out stable [`ArgId`] handles
//! - Holding the program name and description shown in help output
//!
//! Identity collisions (two specs sharing a short name, a long name or a
//! positional name) are accepted; lookup resolves them by registration order
//! and the first registered spec wins. Each collision is logged as a warning.

use crate::io::HelpConfig;
use crate::types::{ArgId, ArgumentSpec, Slot, Typed};
use log::{debug, warn};

/// Generates one registration method per scalar kind
macro_rules! typed_adders {
    ($($(#[$doc:meta])* $name:ident => $variant:ident($ty:ty);)*) => {
        $(
            $(#[$doc])*
            pub fn $name<'a>(
                &mut self,
                short: impl Into<Option<char>>,
                long: impl Into<Option<&'a str>>,
                placeholder: Option<&str>,
                help: &str,
                required: bool,
                default: $ty,
            ) -> ArgId {
                self.push(ArgumentSpec::option(
                    short.into(),
                    long.into(),
                    placeholder,
                    help,
                    required,
                    Slot::$variant(Typed::seeded(default)),
                ))
            }
        )*
    };
}

/// Ordered collection of argument specifications
#[derive(Debug, Clone)]
pub struct Registry {
    program: String,
    description: String,
    specs: Vec<ArgumentSpec>,
    help_config: HelpConfig,
}

impl Registry {
    /// Program name used until `parse` sees an argument vector
    pub const DEFAULT_PROGRAM: &'static str = "program";

    /// Create an empty registry
    ///
    /// # Arguments
    ///
    /// * `program` - Program name for the usage line, `"program"` when absent
    /// * `description` - Text shown under the usage line, empty when absent
    pub fn new<'a>(
        program: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
    ) -> Self {
        Registry {
            program: program
                .into()
                .unwrap_or(Self::DEFAULT_PROGRAM)
                .to_string(),
            description: description.into().unwrap_or_default().to_string(),
            specs: Vec::new(),
            help_config: HelpConfig::default(),
        }
    }

    /// Replace the help layout settings
    pub fn with_help_config(mut self, config: HelpConfig) -> Self {
        self.help_config = config;
        self
    }

    /// Register a boolean flag
    ///
    /// Flags take no value, carry no default and are never required.
    pub fn add_flag<'a>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'a str>>,
        help: &str,
    ) -> ArgId {
        self.push(ArgumentSpec::option(
            short.into(),
            long.into(),
            None,
            help,
            false,
            Slot::Flag,
        ))
    }

    /// Register a string option
    ///
    /// Without a default the option stays unset until supplied, and a
    /// required string without a default fails parsing when omitted.
    pub fn add_string<'a>(
        &mut self,
        short: impl Into<Option<char>>,
        long: impl Into<Option<&'a str>>,
        placeholder: Option<&str>,
        help: &str,
        required: bool,
        default: Option<&str>,
    ) -> ArgId {
        self.push(ArgumentSpec::option(
            short.into(),
            long.into(),
            placeholder,
            help,
            required,
            Slot::Str(Typed::seeded(default.map(str::to_string))),
        ))
    }

    typed_adders! {
        /// Register a single-character option
        add_char => Char(char);
        /// Register an `i16` option
        add_short => Short(i16);
        /// Register an `i32` option
        add_int => Int(i32);
        /// Register an `i64` option
        add_long => Long(i64);
        /// Register an `i64` option displayed as `LLONG`
        add_long_long => LongLong(i64);
        /// Register a `u8` option
        add_uchar => UChar(u8);
        /// Register a `u16` option
        add_ushort => UShort(u16);
        /// Register a `u32` option
        add_uint => UInt(u32);
        /// Register a `u64` option
        add_ulong => ULong(u64);
        /// Register a `u64` option displayed as `ULLONG`
        add_ulong_long => ULongLong(u64);
        /// Register a `usize` option
        add_size => Size(usize);
        /// Register an `f32` option
        add_float => Float(f32);
        /// Register an `f64` option
        add_double => Double(f64);
    }

    /// Register a positional argument
    ///
    /// Positionals are filled in registration order by tokens that are not
    /// options. `name` is both the lookup key and the help placeholder.
    pub fn add_positional(&mut self, name: &str, help: &str, required: bool) -> ArgId {
        self.push(ArgumentSpec::positional(name, help, required))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn help_config(&self) -> &HelpConfig {
        &self.help_config
    }

    /// All specs in registration order
    pub fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    /// Spec behind a handle, `None` for a handle from another registry
    pub fn spec(&self, id: ArgId) -> Option<&ArgumentSpec> {
        self.specs.get(id.index())
    }

    /// Whether the argument behind `id` was matched during parsing
    pub fn is_present(&self, id: ArgId) -> bool {
        self.spec(id).is_some_and(ArgumentSpec::is_present)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub(crate) fn set_program(&mut self, program: &str) {
        self.program = program.to_string();
    }

    pub(crate) fn specs_mut(&mut self) -> &mut [ArgumentSpec] {
        &mut self.specs
    }

    fn push(&mut self, spec: ArgumentSpec) -> ArgId {
        for existing in &self.specs {
            if let Some(clash) = identity_clash(existing, &spec) {
                warn!(
                    "{} of {} is already used by {}; lookups resolve to the earlier registration",
                    clash,
                    spec.display_name(),
                    existing.display_name()
                );
            }
        }

        debug!(
            "registered {} as {} ({} specs)",
            spec.display_name(),
            spec.kind(),
            self.specs.len() + 1
        );

        self.specs.push(spec);
        ArgId(self.specs.len() - 1)
    }
}

/// Describe the first identity the two specs share, if any
fn identity_clash(existing: &ArgumentSpec, new: &ArgumentSpec) -> Option<String> {
    if let (Some(a), Some(b)) = (existing.short(), new.short()) {
        if a == b {
            return Some(format!("short name '-{}'", b));
        }
    }

    if let (Some(a), Some(b)) = (existing.long(), new.long()) {
        if a == b {
            return Some(format!("long name '--{}'", b));
        }
    }

    let positional_name = |spec: &ArgumentSpec| match spec.slot() {
        Slot::Positional(_) => spec.placeholder().map(str::to_string),
        _ => None,
    };

    match (positional_name(existing), positional_name(new)) {
        (Some(a), Some(b)) if a == b => Some(format!("positional name '{}'", b)),
        (None, Some(b)) if existing.matches(&b) => Some(format!("positional name '{}'", b)),
        (Some(a), None) if new.matches(&a) => Some(format!("name '{}'", a)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;
    use rstest::rstest;

    #[test]
    fn test_new_falls_back_to_defaults() {
        let registry = Registry::new(None, None);
        assert_eq!(registry.program(), "program");
        assert_eq!(registry.description(), "");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handles_follow_registration_order() {
        let mut registry = Registry::new("tool", "A tool");
        let verbose = registry.add_flag('v', "verbose", "Be chatty");
        let count = registry.add_int('n', "count", None, "How many", false, 1);
        let src = registry.add_positional("src", "Source", true);

        assert_eq!(verbose.index(), 0);
        assert_eq!(count.index(), 1);
        assert_eq!(src.index(), 2);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.spec(count).map(ArgumentSpec::kind), Some(Kind::Int));
    }

    #[test]
    fn test_growth_past_initial_capacity() {
        let mut registry = Registry::new("tool", None);
        let ids: Vec<ArgId> = (0..100)
            .map(|i| registry.add_int(None, format!("opt{}", i).as_str(), None, "", false, i))
            .collect();

        assert_eq!(registry.len(), 100);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(
                registry.spec(*id).and_then(ArgumentSpec::long),
                Some(format!("opt{}", i).as_str())
            );
        }
    }

    #[rstest]
    #[case::char(Kind::Char, Slot::Char(Typed::seeded('x')))]
    #[case::size(Kind::Size, Slot::Size(Typed::seeded(4096)))]
    #[case::double(Kind::Double, Slot::Double(Typed::seeded(0.25)))]
    fn test_typed_adders_seed_value(#[case] kind: Kind, #[case] expected: Slot) {
        let mut registry = Registry::new("tool", None);
        let id = match kind {
            Kind::Char => registry.add_char('c', None, None, "", false, 'x'),
            Kind::Size => registry.add_size('s', None, None, "", false, 4096),
            _ => registry.add_double('d', None, None, "", false, 0.25),
        };

        let spec = registry.spec(id).unwrap();
        assert_eq!(spec.slot(), &expected);
        assert!(!spec.is_present());
    }

    #[test]
    fn test_string_without_default_is_unset() {
        let mut registry = Registry::new("tool", None);
        let name = registry.add_string(None, "name", Some("NAME"), "Your name", true, None);
        let spec = registry.spec(name).unwrap();
        assert_eq!(spec.slot().text(), None);
        assert_eq!(spec.placeholder(), Some("NAME"));
        assert!(spec.is_required());
    }

    #[test]
    fn test_long_names_borrowed_from_owned_strings() {
        let names: Vec<String> = ["all", "name", "count"].iter().map(|s| s.to_string()).collect();
        let mut registry = Registry::new("tool", None);
        let all = registry.add_flag(None, names[0].as_str(), "");
        let name = registry.add_string(None, Some(names[1].as_str()), None, "", false, None);
        let count = registry.add_int('c', Some(names[2].as_str()), None, "", false, 0);
        drop(names);

        assert_eq!(registry.spec(all).and_then(ArgumentSpec::long), Some("all"));
        assert_eq!(registry.spec(name).and_then(ArgumentSpec::long), Some("name"));
        assert_eq!(registry.spec(count).and_then(ArgumentSpec::long), Some("count"));
    }

    #[rstest]
    #[case::same_short(('a', "alpha"), ('a', "apple"), true)]
    #[case::same_long(('a', "alpha"), ('b', "alpha"), true)]
    #[case::distinct(('a', "alpha"), ('b', "beta"), false)]
    fn test_identity_clash(
        #[case] first: (char, &str),
        #[case] second: (char, &str),
        #[case] clashes: bool,
    ) {
        let a = ArgumentSpec::option(Some(first.0), Some(first.1), None, "", false, Slot::Flag);
        let b = ArgumentSpec::option(Some(second.0), Some(second.1), None, "", false, Slot::Flag);
        assert_eq!(identity_clash(&a, &b).is_some(), clashes);
    }

    #[test]
    fn test_duplicate_registration_is_accepted() {
        let mut registry = Registry::new("tool", None);
        registry.add_flag('a', None, "first");
        registry.add_flag('a', None, "second");
        registry.add_positional("dst", "", false);
        registry.add_positional("dst", "", false);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_foreign_handle_resolves_to_none() {
        let registry = Registry::new("tool", None);
        assert!(registry.spec(ArgId(3)).is_none());
        assert!(!registry.is_present(ArgId(3)));
    }
}

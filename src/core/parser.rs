//! Argument vector parser
//!
//! This module walks a process argument vector against a [`Registry`] in a
//! single left-to-right pass. Each token is dispatched in priority order:
//!
//! 1. `--help` or `-h` stops parsing with [`ParseOutcome::HelpRequested`]
//! 2. `--name` or `--name=value` is a long option
//! 3. `-abc` is a cluster of short options; a value-taking option inside a
//!    cluster takes the rest of the cluster (`-n5`) or the next token
//! 4. anything else fills the first positional not yet present
//!
//! A token consumed as a value is never reconsidered as an option. After the
//! scan, required arguments are checked in registration order. The first
//! problem aborts the parse.

use super::coerce::coerce;
use super::registry::Registry;
use crate::io::write_help;
use crate::types::{ArgError, Kind, Slot};
use log::debug;
use std::io::{self, Write};
use std::process;
use std::slice::Iter;

/// Result of a parse that did not fail
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The whole vector was consumed and every required argument is present
    Parsed,
    /// `--help` or `-h` was seen; the caller decides how to show help
    HelpRequested,
}

impl Registry {
    /// Parse an argument vector
    ///
    /// The first element is the program name and replaces the registry's
    /// program name; scanning starts at the second element.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArgError`] encountered. Values already assigned
    /// before the failure are left in place but should not be relied on.
    pub fn parse<I, S>(&mut self, args: I) -> Result<ParseOutcome, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();

        let mut tokens = args.iter();
        if let Some(program) = tokens.next() {
            self.set_program(program);
        }

        while let Some(token) = tokens.next() {
            if token == "--help" || token == "-h" {
                debug!("help requested by '{}'", token);
                return Ok(ParseOutcome::HelpRequested);
            }

            if let Some(body) = token.strip_prefix("--") {
                self.parse_long(token, body, &mut tokens)?;
            } else if let Some(cluster) = token
                .strip_prefix('-')
                .filter(|rest| !rest.is_empty())
            {
                self.parse_cluster(cluster, &mut tokens)?;
            } else {
                self.assign_positional(token)?;
            }
        }

        self.check_required()?;
        Ok(ParseOutcome::Parsed)
    }

    /// Parse, printing help or a diagnostic and exiting when appropriate
    ///
    /// Help goes to stdout followed by exit status 0. A parse error is
    /// written to stderr followed by exit status 1. Returns only when parsing
    /// succeeded.
    pub fn parse_or_exit<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.parse(args) {
            Ok(ParseOutcome::Parsed) => {}
            Ok(ParseOutcome::HelpRequested) => {
                let mut stdout = io::stdout().lock();
                if let Err(e) = write_help(self, &mut stdout).and_then(|_| stdout.flush()) {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }

    /// [`Registry::parse_or_exit`] over the current process arguments
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn parse_env_or_exit(&mut self) {
        self.parse_or_exit(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()));
    }

    fn parse_long(
        &mut self,
        token: &str,
        body: &str,
        tokens: &mut Iter<'_, String>,
    ) -> Result<(), ArgError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let index = self
            .position(name)
            .ok_or_else(|| ArgError::unknown_option(token))?;

        let spec = &mut self.specs_mut()[index];
        spec.mark_present();
        debug!("matched {} as {}", token, spec.display_name());

        if !spec.kind().takes_value() {
            if let Some(value) = inline {
                debug!("ignoring value '{}' given to flag {}", value, spec.display_name());
            }
            return Ok(());
        }

        let value = match inline {
            Some(value) => value,
            None => tokens
                .next()
                .map(String::as_str)
                .ok_or_else(|| ArgError::missing_value(&format!("--{}", name)))?,
        };

        let option = spec.display_name();
        coerce(spec.slot_mut(), &option, value)
    }

    fn parse_cluster(
        &mut self,
        cluster: &str,
        tokens: &mut Iter<'_, String>,
    ) -> Result<(), ArgError> {
        let mut buf = [0u8; 4];

        for (offset, short) in cluster.char_indices() {
            let index = self
                .position(short.encode_utf8(&mut buf))
                .ok_or_else(|| ArgError::unknown_option(&format!("-{}", short)))?;

            let spec = &mut self.specs_mut()[index];
            spec.mark_present();
            debug!("matched -{} as {}", short, spec.display_name());

            if !spec.kind().takes_value() {
                continue;
            }

            // the remainder of the cluster is the value, e.g. `-n5`
            let rest = &cluster[offset + short.len_utf8()..];
            let value = if rest.is_empty() {
                tokens
                    .next()
                    .map(String::as_str)
                    .ok_or_else(|| ArgError::missing_value(&format!("-{}", short)))?
            } else {
                rest
            };

            let option = spec.display_name();
            return coerce(spec.slot_mut(), &option, value);
        }

        Ok(())
    }

    fn assign_positional(&mut self, token: &str) -> Result<(), ArgError> {
        let spec = self
            .specs_mut()
            .iter_mut()
            .find(|spec| spec.kind() == Kind::Positional && !spec.is_present())
            .ok_or_else(|| ArgError::unexpected_argument(token))?;

        spec.mark_present();
        debug!("assigned '{}' to positional {}", token, spec.display_name());

        let name = spec.display_name();
        coerce(spec.slot_mut(), &name, token)
    }

    fn check_required(&mut self) -> Result<(), ArgError> {
        for spec in self.specs_mut().iter_mut() {
            let required = spec.is_required();
            let present = spec.is_present();
            let name = spec.display_name();

            let satisfied = match spec.slot_mut() {
                Slot::Flag => true,
                Slot::Str(typed) => {
                    if typed.value.is_none() {
                        typed.value.clone_from(&typed.default);
                    }
                    typed.value.is_some()
                }
                // scalars are always seeded, so only presence counts
                _ => present,
            };

            if required && !satisfied {
                return Err(ArgError::missing_required(&name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn registry() -> Registry {
        let mut registry = Registry::new("tool", "Test tool");
        registry.add_flag('a', "all", "");
        registry.add_flag('b', "brief", "");
        registry.add_int('n', "count", None, "", false, 1);
        registry.add_string('o', "output", None, "", false, Some("out.txt"));
        registry.add_uchar('l', "level", None, "", false, 6);
        registry
    }

    #[test]
    fn test_program_name_taken_from_first_token() {
        let mut registry = registry();
        assert_eq!(registry.parse(["/usr/bin/tool"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.program(), "/usr/bin/tool");
    }

    #[test]
    fn test_empty_vector_keeps_program_name() {
        let mut registry = registry();
        assert_eq!(registry.parse(Vec::<String>::new()), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.program(), "tool");
    }

    #[rstest]
    #[case::separate(&["tool", "--count", "5"])]
    #[case::attached(&["tool", "--count=5"])]
    #[case::short_separate(&["tool", "-n", "5"])]
    #[case::short_attached(&["tool", "-n5"])]
    #[case::long_via_short_name(&["tool", "--n", "5"])]
    fn test_value_forms(#[case] args: &[&str]) {
        let mut registry = registry();
        assert_eq!(registry.parse(args), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_int("count"), Some(5));
        assert!(registry.find("count").unwrap().is_present());
    }

    #[test]
    fn test_cluster_of_flags_then_value() {
        let mut registry = registry();
        assert_eq!(registry.parse(["tool", "-abn", "7"]), Ok(ParseOutcome::Parsed));
        assert!(registry.get_flag("a"));
        assert!(registry.get_flag("b"));
        assert_eq!(registry.get_int("n"), Some(7));
    }

    #[test]
    fn test_cluster_value_swallows_remaining_characters() {
        let mut registry = registry();
        assert_eq!(registry.parse(["tool", "-oab"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_string("output"), Some("ab"));
        assert!(!registry.get_flag("all"));
    }

    #[test]
    fn test_consumed_value_is_not_reinterpreted() {
        let mut registry = registry();
        assert_eq!(registry.parse(["tool", "-o", "-a"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_string("output"), Some("-a"));
        assert!(!registry.get_flag("all"));

        let mut registry = self::registry();
        assert_eq!(registry.parse(["tool", "--output", "--help"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_string("output"), Some("--help"));
    }

    #[rstest]
    #[case::long_help(&["tool", "--help"])]
    #[case::short_help(&["tool", "-a", "-h", "--bogus"])]
    fn test_help_requested(#[case] args: &[&str]) {
        let mut registry = registry();
        assert_eq!(registry.parse(args), Ok(ParseOutcome::HelpRequested));
    }

    #[test]
    fn test_help_inside_cluster_is_not_special() {
        // `-ah` is a cluster, `h` is not registered
        let mut registry = registry();
        assert_eq!(registry.parse(["tool", "-ah"]), Err(ArgError::unknown_option("-h")));
    }

    #[rstest]
    #[case::unknown_long(&["tool", "--bogus"], ArgError::unknown_option("--bogus"))]
    #[case::unknown_long_with_value(&["tool", "--bogus=1"], ArgError::unknown_option("--bogus=1"))]
    #[case::double_dash_alone(&["tool", "--"], ArgError::unknown_option("--"))]
    #[case::unknown_short(&["tool", "-az"], ArgError::unknown_option("-z"))]
    #[case::missing_long_value(&["tool", "--count"], ArgError::missing_value("--count"))]
    #[case::missing_short_value(&["tool", "-n"], ArgError::missing_value("-n"))]
    #[case::bad_int(
        &["tool", "--count", "5x"],
        ArgError::invalid_value(Kind::Int, "--count", "5x")
    )]
    #[case::uchar_overflow(
        &["tool", "-l", "300"],
        ArgError::invalid_value(Kind::UChar, "--level", "300")
    )]
    #[case::empty_inline(&["tool", "--count="], ArgError::invalid_value(Kind::Int, "--count", ""))]
    #[case::no_positional_slot(&["tool", "stray"], ArgError::unexpected_argument("stray"))]
    #[case::lone_dash(&["tool", "-"], ArgError::unexpected_argument("-"))]
    fn test_parse_errors(#[case] args: &[&str], #[case] expected: ArgError) {
        let mut registry = registry();
        assert_eq!(registry.parse(args), Err(expected));
    }

    #[test]
    fn test_flag_ignores_inline_value() {
        let mut registry = registry();
        assert_eq!(registry.parse(["tool", "--all=no"]), Ok(ParseOutcome::Parsed));
        assert!(registry.get_flag("all"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let mut registry = registry();
        assert_eq!(
            registry.parse(["tool", "--output", "a", "-o", "b", "--count=1", "-n2"]),
            Ok(ParseOutcome::Parsed)
        );
        assert_eq!(registry.get_string("output"), Some("b"));
        assert_eq!(registry.get_int("count"), Some(2));
    }

    #[test]
    fn test_positionals_fill_in_order() {
        let mut registry = Registry::new("cp", None);
        registry.add_positional("src", "", true);
        registry.add_positional("dst", "", true);

        assert_eq!(registry.parse(["cp", "foo.txt", "bar.txt"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_string("src"), Some("foo.txt"));
        assert_eq!(registry.get_string("dst"), Some("bar.txt"));
    }

    #[test]
    fn test_missing_positional_named_in_error() {
        let mut registry = Registry::new("cp", None);
        registry.add_positional("src", "", true);
        registry.add_positional("dst", "", true);

        assert_eq!(
            registry.parse(["cp", "foo.txt"]),
            Err(ArgError::missing_required("dst"))
        );
    }

    #[test]
    fn test_positional_reachable_through_option_syntax() {
        let mut registry = Registry::new("cp", None);
        registry.add_positional("src", "", true);
        registry.add_positional("dst", "", true);

        assert_eq!(
            registry.parse(["cp", "--dst", "b.txt", "a.txt"]),
            Ok(ParseOutcome::Parsed)
        );
        assert_eq!(registry.get_string("src"), Some("a.txt"));
        assert_eq!(registry.get_string("dst"), Some("b.txt"));
    }

    #[rstest]
    #[case::long_name(Some("name"), "--name")]
    #[case::short_only(None, "-N")]
    fn test_required_string_without_default(#[case] long: Option<&str>, #[case] expected: &str) {
        let mut registry = Registry::new("tool", None);
        registry.add_string('N', long, None, "", true, None);

        assert_eq!(
            registry.parse(["tool"]),
            Err(ArgError::missing_required(expected))
        );
        assert_eq!(registry.get_string("N"), None);
    }

    #[test]
    fn test_required_string_satisfied_by_default() {
        let mut registry = Registry::new("tool", None);
        registry.add_string(None, "mode", None, "", true, Some("fast"));

        assert_eq!(registry.parse(["tool"]), Ok(ParseOutcome::Parsed));
        assert_eq!(registry.get_string("mode"), Some("fast"));
        assert!(!registry.find("mode").unwrap().is_present());
    }

    #[test]
    fn test_required_scalar_needs_presence() {
        let mut registry = Registry::new("tool", None);
        registry.add_double('r', "ratio", None, "", true, 0.5);

        assert_eq!(registry.parse(["tool"]), Err(ArgError::missing_required("--ratio")));

        let mut registry = Registry::new("tool", None);
        registry.add_double('r', "ratio", None, "", true, 0.5);
        assert_eq!(registry.parse(["tool", "-r", "0.5"]), Ok(ParseOutcome::Parsed));
    }

    #[test]
    fn test_unicode_short_names() {
        let mut registry = Registry::new("tool", None);
        registry.add_flag('é', None, "");
        registry.add_int('ñ', None, None, "", false, 0);

        assert_eq!(registry.parse(["tool", "-éñ42"]), Ok(ParseOutcome::Parsed));
        assert!(registry.get_flag("é"));
        assert_eq!(registry.get_int("ñ"), Some(42));
    }
}

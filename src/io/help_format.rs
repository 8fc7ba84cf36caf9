//! Help text rendering
//!
//! Produces the usage and option listing for a [`Registry`]:
//!
//! ```text
//! Usage: tool [-v] [-n INT] SRC
//!
//! Copies things
//!
//! Options:
//!   -v, --verbose                  Be chatty
//!   -n, --count INT                How many (default: 1)
//!
//! Positional:
//!   SRC                            Source file [required]
//! ```
//!
//! Rendering is pure formatting over registry state; the only failure mode
//! is the output sink itself.

use crate::core::Registry;
use crate::types::{ArgumentSpec, Kind, Slot};
use log::warn;
use std::io::{self, Write};

/// Layout settings for help output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpConfig {
    /// Width the option column is padded to before the help text
    pub option_column: usize,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self { option_column: 30 }
    }
}

impl HelpConfig {
    /// Create a HelpConfig, falling back to the default width for zero
    pub fn new(option_column: usize) -> Self {
        let default = Self::default();

        let option_column = if option_column == 0 {
            warn!(
                "Invalid option_column ({}), using default ({})",
                option_column, default.option_column
            );
            default.option_column
        } else {
            option_column
        };

        Self { option_column }
    }
}

/// Write the full help listing for `registry`
pub fn write_help(registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
    let width = registry.help_config().option_column;
    let (positionals, options): (Vec<&ArgumentSpec>, Vec<&ArgumentSpec>) = registry
        .specs()
        .iter()
        .partition(|spec| spec.kind() == Kind::Positional);

    write!(out, "Usage: {}", registry.program())?;
    for spec in &options {
        write!(out, " {}", usage_item(spec))?;
    }
    for spec in &positionals {
        write!(out, " {}", spec.placeholder().unwrap_or_default())?;
    }
    write!(out, "\n\n{}\n\n", registry.description())?;

    writeln!(out, "Options:")?;
    for spec in &options {
        write!(out, "  {:<width$} {}", option_label(spec), spec.help(), width = width)?;
        if let Some(default) = format_default(spec.slot()) {
            write!(out, " (default: {})", default)?;
        }
        if spec.is_required() {
            write!(out, " [required]")?;
        }
        writeln!(out)?;
    }

    if !positionals.is_empty() {
        write!(out, "\nPositional:\n")?;
        for spec in &positionals {
            let name = spec.placeholder().unwrap_or_default();
            write!(out, "  {:<width$} {}", name, spec.help(), width = width)?;
            if spec.is_required() {
                write!(out, " [required]")?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

impl Registry {
    /// Help listing as a string
    pub fn help_text(&self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec cannot fail
        let _ = write_help(self, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// One usage-line entry: the short form when there is one, else the long
/// form, plus the placeholder for value-taking options, bracketed if optional
fn usage_item(spec: &ArgumentSpec) -> String {
    let mut item = match (spec.short(), spec.long()) {
        (Some(short), _) => format!("-{}", short),
        (None, Some(long)) => format!("--{}", long),
        (None, None) => String::new(),
    };

    if spec.kind().takes_value() && !item.is_empty() {
        item.push(' ');
        item.push_str(spec.placeholder().unwrap_or_default());
    }

    if spec.is_required() {
        item
    } else {
        format!("[{}]", item)
    }
}

/// Option column text: `-x, --name META`
fn option_label(spec: &ArgumentSpec) -> String {
    let mut label = String::new();

    if let Some(short) = spec.short() {
        label.push('-');
        label.push(short);
        if spec.long().is_some() {
            label.push_str(", ");
        }
    }
    if let Some(long) = spec.long() {
        label.push_str("--");
        label.push_str(long);
    }
    if spec.kind().takes_value() {
        label.push(' ');
        label.push_str(spec.placeholder().unwrap_or_default());
    }

    label
}

/// Declared default as shown in help, `None` when there is nothing to show
pub fn format_default(slot: &Slot) -> Option<String> {
    let text = match slot {
        Slot::Flag | Slot::Positional(_) => return None,
        Slot::Str(typed) => return typed.default.clone(),
        Slot::Char(typed) => typed.default.to_string(),
        Slot::Short(typed) => typed.default.to_string(),
        Slot::Int(typed) => typed.default.to_string(),
        Slot::Long(typed) => typed.default.to_string(),
        Slot::LongLong(typed) => typed.default.to_string(),
        Slot::UChar(typed) => typed.default.to_string(),
        Slot::UShort(typed) => typed.default.to_string(),
        Slot::UInt(typed) => typed.default.to_string(),
        Slot::ULong(typed) => typed.default.to_string(),
        Slot::ULongLong(typed) => typed.default.to_string(),
        Slot::Size(typed) => typed.default.to_string(),
        Slot::Float(typed) => format_general(f64::from(typed.default)),
        Slot::Double(typed) => format_general(typed.default),
    };
    Some(text)
}

/// Format a float like C's `%.6g`
///
/// Six significant digits, trailing zeros dropped, scientific notation when
/// the exponent is below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // rounding to the target precision can bump the exponent, e.g. 999999.5
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

use crate::core::Registry;
use crate::types::{ArgumentSpec, Slot};
use std::io::{self, Write};

/// Build the demo program's argument set
///
/// Covers one of each common shape: flags, a string with a default, several
/// numeric kinds, a character, one required and one optional positional.
pub fn build_registry() -> Registry {
    let mut registry = Registry::new(
        "clargs-demo",
        "Parses its arguments and prints the resulting values",
    );

    registry.add_flag('v', "verbose", "Enable debug logging");
    registry.add_flag('q', "quiet", "Do not print the parsed values");
    registry.add_string('o', "output", Some("FILE"), "Output path", false, Some("out.txt"));
    registry.add_int('n', "count", None, "Number of iterations", false, 1);
    registry.add_uchar('l', "level", None, "Compression level (0-255)", false, 6);
    registry.add_double('r', "ratio", None, "Sampling ratio", false, 0.5);
    registry.add_char('s', "separator", None, "Field separator", false, ',');
    registry.add_size(None, "buffer", Some("BYTES"), "Buffer size", false, 4096);
    registry.add_positional("input", "Input file", true);
    registry.add_positional("extra", "Optional second input", false);

    registry
}

/// Current value of a spec rendered for display
pub fn value_text(spec: &ArgumentSpec) -> String {
    match spec.slot() {
        Slot::Flag => spec.is_present().to_string(),
        Slot::Str(typed) => typed.value.clone().unwrap_or_else(|| "(unset)".to_string()),
        Slot::Positional(value) => value.clone().unwrap_or_else(|| "(unset)".to_string()),
        Slot::Char(typed) => typed.value.to_string(),
        Slot::Short(typed) => typed.value.to_string(),
        Slot::Int(typed) => typed.value.to_string(),
        Slot::Long(typed) => typed.value.to_string(),
        Slot::LongLong(typed) => typed.value.to_string(),
        Slot::UChar(typed) => typed.value.to_string(),
        Slot::UShort(typed) => typed.value.to_string(),
        Slot::UInt(typed) => typed.value.to_string(),
        Slot::ULong(typed) => typed.value.to_string(),
        Slot::ULongLong(typed) => typed.value.to_string(),
        Slot::Size(typed) => typed.value.to_string(),
        Slot::Float(typed) => typed.value.to_string(),
        Slot::Double(typed) => typed.value.to_string(),
    }
}

/// Write one `name = value` line per registered argument
pub fn write_values(registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
    for spec in registry.specs() {
        writeln!(out, "{} = {}", spec.display_name(), value_text(spec))?;
    }
    Ok(())
}

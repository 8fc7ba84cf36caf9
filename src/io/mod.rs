// I/O module
// Help output formatting

pub mod help_format;

pub use help_format::{write_help, HelpConfig};

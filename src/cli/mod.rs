// CLI module
// Argument set and output of the demo binary

mod args;

pub use args::{build_registry, value_text, write_values};

use crate::core::Registry;

/// Parse the process arguments against the demo argument set
///
/// If parsing fails or help is requested, this prints the diagnostic or the
/// help text and exits the process.
pub fn parse_args() -> Registry {
    let mut registry = build_registry();
    registry.parse_env_or_exit();
    registry
}

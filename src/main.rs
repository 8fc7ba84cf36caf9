//! clargs demo CLI
//!
//! Parses its own command line with the clargs registry and prints the value
//! of every declared argument.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt
//! cargo run -- -v --count 3 -l9 input.txt extra.txt
//! cargo run -- --help
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success, or help was printed
//! - 1: Error (unknown option, bad value, missing argument, etc.)

use clargs::cli;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::Write;
use std::process;

fn main() {
    // Exits on --help or a parse error
    let registry = cli::parse_args();

    if registry.get_flag("verbose") {
        init_logger(LevelFilter::Debug);
    }
    debug!(
        "{} parsed {} arguments",
        registry.program(),
        registry.specs().iter().filter(|spec| spec.is_present()).count()
    );

    if registry.get_flag("quiet") {
        return;
    }

    let mut output = std::io::stdout().lock();
    if let Err(e) = cli::write_values(&registry, &mut output).and_then(|_| output.flush()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr so the value listing on stdout stays clean
fn init_logger(level: LevelFilter) {
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

//! Typed command-line argument parsing
//!
//! # Overview
//!
//! This library lets a program declare flags, typed options and positional
//! arguments, parse a process argument vector against them, and read the
//! resulting values back by name.
//!
//! # Architecture
//!
//! The library is organized into several key components:
//!
//! - [`types`] - Data model (argument kinds, specifications, errors)
//! - [`core`] - Registration, parsing and lookup:
//!   - [`core::registry`] - Ordered argument specifications
//!   - [`core::parser`] - Single-pass walk over the argument vector
//!   - [`core::coerce`] - Strict value conversion per kind
//!   - [`core::accessors`] - Typed getters
//! - [`io`] - Help text rendering
//! - [`cli`] - The demo binary's argument set
//!
//! # Example
//!
//! ```
//! use clargs::{ParseOutcome, Registry};
//!
//! let mut registry = Registry::new("copy", "Copies a file");
//! registry.add_flag('v', "verbose", "Print progress");
//! registry.add_uint('b', "block-size", None, "Block size in bytes", false, 4096);
//! registry.add_positional("src", "Source file", true);
//! registry.add_positional("dst", "Destination file", true);
//!
//! let outcome = registry.parse(["copy", "-vb512", "a.txt", "b.txt"]);
//! assert_eq!(outcome, Ok(ParseOutcome::Parsed));
//! assert!(registry.get_flag("verbose"));
//! assert_eq!(registry.get_uint("block-size"), Some(512));
//! assert_eq!(registry.get_string("dst"), Some("b.txt"));
//! ```
//!
//! # Supported Kinds
//!
//! Flags, strings, characters, the signed integers `Short`, `Int`, `Long`
//! and `LongLong`, the unsigned integers `UChar`, `UShort`, `UInt`, `ULong`,
//! `ULongLong` and `Size`, the floats `Float` and `Double`, and positionals.
//!
//! # Help
//!
//! `--help` and `-h` make [`Registry::parse`] return
//! [`ParseOutcome::HelpRequested`]. [`Registry::parse_or_exit`] turns that
//! into printing help and exiting with status 0.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{FromSlot, ParseOutcome, Registry};
pub use io::{write_help, HelpConfig};
pub use types::{AccessError, ArgError, ArgId, ArgumentSpec, Kind, Slot, Typed};

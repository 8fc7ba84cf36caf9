//! Types module
//!
//! Contains the data model shared by the registry, the parser and the help
//! renderer:
//! - `kind`: the declared type of an argument
//! - `spec`: argument specifications and their typed slots
//! - `error`: parse and lookup errors

pub mod error;
pub mod kind;
pub mod spec;

pub use error::{AccessError, ArgError};
pub use kind::Kind;
pub use spec::{ArgId, ArgumentSpec, Slot, Typed};

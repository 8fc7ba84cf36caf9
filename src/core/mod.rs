//! Core parsing module
//!
//! This module contains the registration, parsing and lookup engine:
//! - `registry` - Ordered argument specifications and registration calls
//! - `lookup` - Name resolution, first registered match wins
//! - `parser` - Single-pass walk over the argument vector
//! - `coerce` - Strict conversion of value tokens into typed slots
//! - `traits` - Typed extraction from slots
//! - `accessors` - Typed getters used after parsing

pub mod accessors;
pub mod coerce;
pub mod lookup;
pub mod parser;
pub mod registry;
pub mod traits;

pub use parser::ParseOutcome;
pub use registry::Registry;
pub use traits::FromSlot;

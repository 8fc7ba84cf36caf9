//! Error types for argument parsing and lookup
//!
//! Parsing stops at the first problem it finds, so every [`ArgError`] names
//! exactly one offending token or argument. The `Display` output is the
//! diagnostic written to stderr by the exiting entry points.
//!
//! # Error Categories
//!
//! - **Unknown option**: an option token that matches no registered spec
//! - **Missing value**: an option needing a value is the last token
//! - **Invalid value**: a value does not satisfy its kind's grammar or range
//! - **Missing required**: a required argument never appeared
//! - **Unexpected argument**: a positional token with no free positional slot

use super::kind::Kind;
use thiserror::Error;

/// Fatal parse error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// No spec matches the option token
    #[error("Unknown option: {token}")]
    UnknownOption {
        /// The token as it appeared, e.g. `--bogus` or `-x`
        token: String,
    },

    /// The option needs a value but the argument vector is exhausted
    #[error("Missing value for {option}")]
    MissingValue {
        /// Option as written on the command line
        option: String,
    },

    /// The value failed coercion into the option's kind
    #[error("Bad {kind} for {option}: '{value}'")]
    InvalidValue {
        /// Target kind
        kind: Kind,
        /// Display name of the option
        option: String,
        /// The rejected value text
        value: String,
    },

    /// A required argument was not supplied
    #[error("Missing {name}")]
    MissingRequired {
        /// Display name of the option, or the positional's placeholder
        name: String,
    },

    /// A positional token arrived after every positional slot was filled
    #[error("Unexpected argument {token}")]
    UnexpectedArgument {
        /// The surplus token
        token: String,
    },
}

impl ArgError {
    /// Create an UnknownOption error
    pub fn unknown_option(token: &str) -> Self {
        ArgError::UnknownOption {
            token: token.to_string(),
        }
    }

    /// Create a MissingValue error
    pub fn missing_value(option: &str) -> Self {
        ArgError::MissingValue {
            option: option.to_string(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(kind: Kind, option: &str, value: &str) -> Self {
        ArgError::InvalidValue {
            kind,
            option: option.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a MissingRequired error
    pub fn missing_required(name: &str) -> Self {
        ArgError::MissingRequired {
            name: name.to_string(),
        }
    }

    /// Create an UnexpectedArgument error
    pub fn unexpected_argument(token: &str) -> Self {
        ArgError::UnexpectedArgument {
            token: token.to_string(),
        }
    }
}

/// Error from a typed getter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No registered spec answers to the name
    #[error("No argument named '{name}'")]
    UnknownName { name: String },

    /// The name resolved to a spec of another kind
    #[error("Argument '{name}' is a {actual}, not a {expected}")]
    KindMismatch {
        name: String,
        expected: Kind,
        actual: Kind,
    },
}

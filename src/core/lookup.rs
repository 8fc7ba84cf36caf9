//! Name resolution
//!
//! A name token resolves against each spec in registration order. A spec
//! matches when the token equals its long name, when the token is a single
//! character equal to its short name, or when it is a positional whose name
//! equals the token. The first matching spec wins, even if a later spec
//! would match by a more specific rule.

use super::registry::Registry;
use crate::types::ArgumentSpec;

impl Registry {
    /// Resolve a name to the first matching spec
    pub fn find(&self, name: &str) -> Option<&ArgumentSpec> {
        self.specs().iter().find(|spec| spec.matches(name))
    }

    /// Index of the first spec matching `name`
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.specs().iter().position(|spec| spec.matches(name))
    }
}

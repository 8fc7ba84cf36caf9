//! Typed accessors
//!
//! Read-only lookups of parsed values by name. Names resolve with the same
//! first-match rule the parser uses, so `"n"`, `"count"` and a positional's
//! name all work. Reading never mutates the registry.

use super::registry::Registry;
use super::traits::FromSlot;
use crate::types::AccessError;

impl Registry {
    /// Whether a spec answers to `name` and was present on the command line
    pub fn get_flag(&self, name: &str) -> bool {
        self.find(name).is_some_and(|spec| spec.is_present())
    }

    /// Text of a string option or positional
    ///
    /// `None` when no spec matches, when the spec holds another kind, or when
    /// the argument is unset and has no default.
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(|spec| spec.slot().text())
    }

    /// Typed value of the spec behind `name`
    ///
    /// # Errors
    ///
    /// * `AccessError::UnknownName` - no spec answers to `name`
    /// * `AccessError::KindMismatch` - the spec stores another type
    pub fn try_get<T: FromSlot>(&self, name: &str) -> Result<T, AccessError> {
        let spec = self.find(name).ok_or_else(|| AccessError::UnknownName {
            name: name.to_string(),
        })?;

        T::from_slot(spec.slot()).ok_or_else(|| AccessError::KindMismatch {
            name: name.to_string(),
            expected: T::KIND,
            actual: spec.kind(),
        })
    }

    pub fn get_char(&self, name: &str) -> Option<char> {
        self.try_get(name).ok()
    }

    pub fn get_short(&self, name: &str) -> Option<i16> {
        self.try_get(name).ok()
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.try_get(name).ok()
    }

    /// Value of a `Long` or `LongLong` spec
    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.try_get(name).ok()
    }

    /// Same as [`Registry::get_long`]; both kinds are `i64`
    pub fn get_long_long(&self, name: &str) -> Option<i64> {
        self.try_get(name).ok()
    }

    pub fn get_uchar(&self, name: &str) -> Option<u8> {
        self.try_get(name).ok()
    }

    pub fn get_ushort(&self, name: &str) -> Option<u16> {
        self.try_get(name).ok()
    }

    pub fn get_uint(&self, name: &str) -> Option<u32> {
        self.try_get(name).ok()
    }

    /// Value of a `ULong` or `ULongLong` spec
    pub fn get_ulong(&self, name: &str) -> Option<u64> {
        self.try_get(name).ok()
    }

    pub fn get_ulong_long(&self, name: &str) -> Option<u64> {
        self.try_get(name).ok()
    }

    pub fn get_size(&self, name: &str) -> Option<usize> {
        self.try_get(name).ok()
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.try_get(name).ok()
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        self.try_get(name).ok()
    }
}

//! Value coercion
//!
//! Converts a raw value token into the kind stored by a [`Slot`]. Every rule
//! applies to the whole token: trailing garbage after a number is a failure,
//! never a truncation.
//!
//! - Char: the token must be non-empty; its first character is taken
//! - Integers: base 10, optional leading `+` (and `-` for signed kinds),
//!   no surrounding whitespace, rejected when outside the target width
//! - Floats: `inf`, `infinity` and `nan` in any case are accepted; a finite
//!   literal too large for the target width is rejected, as is a non-zero
//!   literal that underflows to zero
//! - Strings and positionals: taken verbatim

use crate::types::{ArgError, Slot};
use log::trace;
use std::str::FromStr;

/// Coerce `raw` into `slot`, replacing its current value
///
/// `option` is the display name used in the error if the value is rejected.
/// The slot is left untouched on failure.
pub fn coerce(slot: &mut Slot, option: &str, raw: &str) -> Result<(), ArgError> {
    let kind = slot.kind();
    let bad = || ArgError::invalid_value(kind, option, raw);

    trace!("coercing '{}' into {} for {}", raw, kind, option);

    match slot {
        Slot::Flag => {}
        // the previous owned string is dropped on reassignment
        Slot::Str(typed) => typed.value = Some(raw.to_string()),
        Slot::Positional(value) => *value = Some(raw.to_string()),
        Slot::Char(typed) => typed.value = parse_char(raw).ok_or_else(bad)?,
        Slot::Short(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::Int(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::Long(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::LongLong(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::UChar(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::UShort(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::UInt(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::ULong(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::ULongLong(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::Size(typed) => typed.value = parse_integer(raw).ok_or_else(bad)?,
        Slot::Float(typed) => typed.value = parse_float(raw).ok_or_else(bad)?,
        Slot::Double(typed) => typed.value = parse_float(raw).ok_or_else(bad)?,
    }

    Ok(())
}

/// First character of a non-empty token
pub fn parse_char(raw: &str) -> Option<char> {
    raw.chars().next()
}

/// Whole-token base-10 integer parse
///
/// The standard integer `FromStr` impls already reject empty input,
/// whitespace, trailing characters, a `-` on unsigned types and values that
/// do not fit the target width.
pub fn parse_integer<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Floating point types accepted by [`parse_float`]
pub trait FloatValue: FromStr + Copy {
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
}

impl FloatValue for f32 {
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    fn is_zero(self) -> bool {
        self == 0.0
    }
}

impl FloatValue for f64 {
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    fn is_zero(self) -> bool {
        self == 0.0
    }
}

/// Whole-token float parse
///
/// Infinity is only accepted when spelled out; a literal such as `1e999`
/// that overflows the target width is an out-of-range failure. So is a
/// literal with a non-zero digit that underflows to zero, such as `1e-400`.
pub fn parse_float<T: FloatValue>(raw: &str) -> Option<T> {
    let value: T = raw.parse().ok()?;
    if value.is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
        return None;
    }
    if value.is_zero() && has_nonzero_mantissa(raw) {
        return None;
    }
    Some(value)
}

/// Whether the digits before any exponent include one other than `0`
fn has_nonzero_mantissa(raw: &str) -> bool {
    raw.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

//! Core traits for typed value extraction
//!
//! [`FromSlot`] is the seam between the tagged [`Slot`] storage and the typed
//! getters on the registry. Each Rust scalar type knows which slot variants
//! hold it; `i64` and `u64` each back two kinds (`Long`/`LongLong` and
//! `ULong`/`ULongLong`) and are read from either.

use crate::types::{Kind, Slot};

/// Trait for reading a typed value out of a slot
pub trait FromSlot: Sized {
    /// Kind reported when the slot holds some other type
    const KIND: Kind;

    /// Current value if the slot stores this type
    fn from_slot(slot: &Slot) -> Option<Self>;
}

macro_rules! from_slot {
    ($ty:ty, $kind:ident, $($variant:ident)|+) => {
        impl FromSlot for $ty {
            const KIND: Kind = Kind::$kind;

            fn from_slot(slot: &Slot) -> Option<Self> {
                match slot {
                    $(Slot::$variant(typed) => Some(typed.value),)+
                    _ => None,
                }
            }
        }
    };
}

from_slot!(char, Char, Char);
from_slot!(i16, Short, Short);
from_slot!(i32, Int, Int);
from_slot!(i64, Long, Long | LongLong);
from_slot!(u8, UChar, UChar);
from_slot!(u16, UShort, UShort);
from_slot!(u32, UInt, UInt);
from_slot!(u64, ULong, ULong | ULongLong);
from_slot!(usize, Size, Size);
from_slot!(f32, Float, Float);
from_slot!(f64, Double, Double);

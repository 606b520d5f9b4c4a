//! Flag register helpers
//!
//! Flag tables are stored as their raw register value. Accessors test and
//! update individual masks in place, so reserved bits set by newer firmware
//! survive a read-modify-write cycle untouched.

use std::ops::{BitAnd, BitOr, Not};

/// Integer types usable as flag registers
pub trait FlagRegister:
    Copy + PartialEq + BitAnd<Output = Self> + BitOr<Output = Self> + Not<Output = Self>
{
}

impl FlagRegister for u8 {}
impl FlagRegister for u16 {}
impl FlagRegister for u32 {}
impl FlagRegister for u64 {}

/// True when every bit of `mask` is set in `value`
pub fn is_set<T: FlagRegister>(value: T, mask: T) -> bool {
    (value & mask) == mask
}

/// Return `value` with the bits of `mask` set or cleared
pub fn assign<T: FlagRegister>(value: T, mask: T, enabled: bool) -> T {
    if enabled {
        value | mask
    } else {
        value & !mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_multi_bit_mask() {
        assert!(is_set(0b0111u8, 0b0011));
        assert!(!is_set(0b0101u8, 0b0011));
        assert_eq!(assign(0b1111u8, 0b0110, false), 0b1001);
    }

    proptest! {
        #[test]
        fn prop_set_is_idempotent(value in any::<u16>(), mask in any::<u16>()) {
            let once = assign(value, mask, true);
            prop_assert_eq!(assign(once, mask, true), once);
            prop_assert!(is_set(once, mask));
        }

        #[test]
        fn prop_clear_only_touches_mask(value in any::<u64>(), mask in any::<u64>()) {
            let cleared = assign(value, mask, false);
            prop_assert_eq!(cleared & !mask, value & !mask);
            prop_assert_eq!(cleared & mask, 0);
        }
    }
}

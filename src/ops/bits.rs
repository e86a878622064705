//! Single-bit helpers for unsigned integers.
//!
//! Bit indices at or beyond the type width are ignored: mutators leave the
//! value unchanged, `is_bit_set` reports `false` and `is_bit_clear` reports
//! `true`.

/// Set, clear, toggle and test individual bits.
pub trait Bits: Copy {
    /// Mask with only `bit` set, or `None` if `bit` is out of range.
    fn bit_mask(bit: u32) -> Option<Self>;

    /// Returns `self` with `bit` set.
    #[must_use]
    fn with_bit_set(
        self,
        bit: u32,
    ) -> Self;

    /// Returns `self` with `bit` cleared.
    #[must_use]
    fn with_bit_cleared(
        self,
        bit: u32,
    ) -> Self;

    /// Returns `self` with `bit` flipped.
    #[must_use]
    fn with_bit_toggled(
        self,
        bit: u32,
    ) -> Self;

    /// True if `bit` is set.
    fn is_bit_set(
        self,
        bit: u32,
    ) -> bool;

    /// Set `bit` in place.
    #[inline]
    fn set_bit(
        &mut self,
        bit: u32,
    ) {
        *self = self.with_bit_set(bit);
    }

    /// Clear `bit` in place.
    #[inline]
    fn clear_bit(
        &mut self,
        bit: u32,
    ) {
        *self = self.with_bit_cleared(bit);
    }

    /// Flip `bit` in place.
    #[inline]
    fn toggle_bit(
        &mut self,
        bit: u32,
    ) {
        *self = self.with_bit_toggled(bit);
    }

    /// True if `bit` is clear.
    #[inline]
    fn is_bit_clear(
        self,
        bit: u32,
    ) -> bool {
        !self.is_bit_set(bit)
    }
}

macro_rules! impl_bits {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bits for $t {
                #[inline]
                fn bit_mask(bit: u32) -> Option<Self> { (1 as $t).checked_shl(bit) }

                #[inline]
                fn with_bit_set(
                    self,
                    bit: u32,
                ) -> Self {
                    Self::bit_mask(bit).map_or(self, |m| self | m)
                }

                #[inline]
                fn with_bit_cleared(
                    self,
                    bit: u32,
                ) -> Self {
                    Self::bit_mask(bit).map_or(self, |m| self & !m)
                }

                #[inline]
                fn with_bit_toggled(
                    self,
                    bit: u32,
                ) -> Self {
                    Self::bit_mask(bit).map_or(self, |m| self ^ m)
                }

                #[inline]
                fn is_bit_set(
                    self,
                    bit: u32,
                ) -> bool {
                    Self::bit_mask(bit).is_some_and(|m| self & m != 0)
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_test() {
        for bit in 0..32 {
            let mut v: u32 = 0;
            v.set_bit(bit);
            assert!(v.is_bit_set(bit), "bit {bit}");
            assert_eq!(v, 1 << bit);
        }
    }

    #[test]
    fn test_clear_then_test() {
        for bit in 0..16 {
            let mut v: u16 = u16::MAX;
            v.clear_bit(bit);
            assert!(v.is_bit_clear(bit), "bit {bit}");
            assert!(!v.is_bit_set(bit));
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original: u8 = 0b1010_0110;
        for bit in 0..8 {
            let mut v = original;
            v.toggle_bit(bit);
            assert_ne!(v, original);
            v.toggle_bit(bit);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn test_value_forms() {
        assert_eq!(0u8.with_bit_set(7), 0x80);
        assert_eq!(0xFFu8.with_bit_cleared(0), 0xFE);
        assert_eq!(0x0Fu8.with_bit_toggled(4), 0x1F);
        assert!(0x8000_0000_0000_0000u64.is_bit_set(63));
    }

    #[test]
    fn test_out_of_range_bit_ignored() {
        let mut v: u8 = 0x5A;
        v.set_bit(8);
        v.clear_bit(9);
        v.toggle_bit(100);
        assert_eq!(v, 0x5A);
        assert!(!v.is_bit_set(8));
        assert!(v.is_bit_clear(8));
        assert_eq!(u8::bit_mask(8), None);
    }

    #[test]
    fn test_other_bits_untouched() {
        let mut v: u32 = 0xF0F0_F0F0;
        v.set_bit(0);
        v.clear_bit(4);
        assert_eq!(v, 0xF0F0_F0E1);
    }
}

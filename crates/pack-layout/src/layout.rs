//! Layout derivation and value mapping
//!
//! Everything here is computed at compile time from [`crate::config`].
//! The const assertions below reject broken configurations while building.

use crate::config::{Elem, ELEM_COUNT, ELEM_MAX, ELEM_MIN};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Storage types accepted for [`Elem`]. Implemented for unsigned integers
/// only, so a signed or floating configuration fails to compile.
pub trait UnsignedElem: sealed::Sealed + Copy {}

impl UnsignedElem for u8 {}
impl UnsignedElem for u16 {}
impl UnsignedElem for u32 {}
impl UnsignedElem for u64 {}

const fn require_unsigned<T: UnsignedElem>() {}

const _: () = require_unsigned::<Elem>();
const _: () = assert!(ELEM_COUNT > 0, "element count must be non-zero");
const _: () = assert!(ELEM_MIN <= ELEM_MAX, "element range is reversed");
const _: () = assert!(BIT_WIDTH <= Elem::BITS, "bit width exceeds storage");

/// Bits needed to represent one normalized element.
pub const BIT_WIDTH: u32 = bit_width_for((ELEM_MAX - ELEM_MIN) as u64);

/// Bytes needed to hold `ELEM_COUNT` packed elements.
pub const PACKED_LEN: usize = packed_len_for(ELEM_COUNT, BIT_WIDTH);

/// Mask selecting the low `BIT_WIDTH` bits of a code.
pub const CODE_MASK: u64 = mask_for(BIT_WIDTH);

/// Application-side array of bounded telemetry values.
pub type RawData = [Elem; ELEM_COUNT];

/// Wire-side minimal-width encoding of one [`RawData`].
pub type PackedBuffer = [u8; PACKED_LEN];

/// Bits needed to represent any value in `0..=range`.
///
/// Position of the highest set bit plus one; a zero range needs no bits.
pub const fn bit_width_for(range: u64) -> u32 {
    u64::BITS - range.leading_zeros()
}

/// Bytes needed for `count` fields of `width` bits, rounded up.
pub const fn packed_len_for(count: usize, width: u32) -> usize {
    (count * width as usize + 7) / 8
}

/// Mask with the low `width` bits set.
pub const fn mask_for(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Map a raw value to its zero-based code, clamping into the configured
/// range first. Out-of-range input is a data condition, not an error.
pub const fn normalize(value: Elem) -> u64 {
    let clamped = if value < ELEM_MIN {
        ELEM_MIN
    } else if value > ELEM_MAX {
        ELEM_MAX
    } else {
        value
    };
    (clamped - ELEM_MIN) as u64
}

/// Map a code back to its raw value. Only the low `BIT_WIDTH` bits of
/// `code` participate; the result wraps modulo the element type.
pub const fn denormalize(code: u64) -> Elem {
    (code & CODE_MASK).wrapping_add(ELEM_MIN as u64) as Elem
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_layout() {
        assert_eq!(BIT_WIDTH, 10);
        assert_eq!(PACKED_LEN, 5);
        assert_eq!(CODE_MASK, 0x3FF);
    }

    #[test]
    fn test_bit_width_for_known_ranges() {
        assert_eq!(bit_width_for(0), 0);
        assert_eq!(bit_width_for(1), 1);
        assert_eq!(bit_width_for(255), 8);
        assert_eq!(bit_width_for(256), 9);
        assert_eq!(bit_width_for(1000), 10);
        assert_eq!(bit_width_for(u64::MAX), 64);
    }

    #[test]
    fn test_packed_len_rounds_up() {
        assert_eq!(packed_len_for(4, 10), 5);
        assert_eq!(packed_len_for(1, 8), 1);
        assert_eq!(packed_len_for(3, 12), 5); // 36 bits
        assert_eq!(packed_len_for(4, 0), 0);
    }

    #[test]
    fn test_mask_for_widths() {
        assert_eq!(mask_for(0), 0);
        assert_eq!(mask_for(1), 0b1);
        assert_eq!(mask_for(10), 0x3FF);
        assert_eq!(mask_for(64), u64::MAX);
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(normalize(10), 10);
        assert_eq!(normalize(1500), 1000);
        assert_eq!(normalize(2000), 1000);
        assert_eq!(normalize(1001), 1000);
    }

    #[test]
    fn test_denormalize_uses_low_bits_only() {
        assert_eq!(denormalize(0), 0);
        assert_eq!(denormalize(1000), 1000);
        assert_eq!(denormalize(0x7FF), 0x3FF); // bits above the mask ignored
    }

    #[test]
    fn test_roundtrip_at_boundaries() {
        for value in [ELEM_MIN, 1, 999, ELEM_MAX] {
            assert_eq!(denormalize(normalize(value)), value);
        }
    }

    proptest! {
        #[test]
        fn test_roundtrip_matches_clamp(value in any::<u16>()) {
            let expected = value.clamp(ELEM_MIN, ELEM_MAX);
            prop_assert_eq!(denormalize(normalize(value)), expected);
        }

        #[test]
        fn test_normalized_code_fits_width(value in any::<u16>()) {
            prop_assert!(normalize(value) <= CODE_MASK);
        }
    }
}

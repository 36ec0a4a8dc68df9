//! Record packing
//!
//! Fixed layout: element `i` occupies bits `i * BIT_WIDTH ..` of the
//! buffer. Trailing bits of the final byte stay zero. Packing clamps via
//! [`pack_layout::normalize`] and cannot fail.

use pack_layout::{denormalize, normalize, PackedBuffer, RawData, BIT_WIDTH};

use crate::cursor::{BitReader, BitWriter};

/// Pack a telemetry record into its wire form.
pub fn pack(values: &RawData) -> PackedBuffer {
    let mut buffer: PackedBuffer = [0; pack_layout::PACKED_LEN];
    let mut writer = BitWriter::new(&mut buffer);
    for &value in values {
        writer.write(normalize(value), BIT_WIDTH);
    }
    buffer
}

/// Unpack a wire buffer back into a telemetry record.
pub fn unpack(buffer: &PackedBuffer) -> RawData {
    let mut values: RawData = [0; pack_layout::ELEM_COUNT];
    let mut reader = BitReader::new(buffer);
    for value in values.iter_mut() {
        *value = denormalize(reader.read(BIT_WIDTH));
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use pack_layout::{ELEM_MAX, ELEM_MIN};
    use proptest::prelude::*;

    #[test]
    fn test_roundtrip() {
        let original = [0, 999, 500, 42];
        assert_eq!(unpack(&pack(&original)), original);
    }

    #[test]
    fn test_reference_bytes() {
        assert_eq!(pack(&[0, 999, 500, 42]), [0x00, 0x9C, 0x4F, 0x9F, 0x0A]);
    }

    #[test]
    fn test_clamping() {
        let unpacked = unpack(&pack(&[10, 1500, 2000, 1001]));
        assert_eq!(unpacked, [10, 1000, 1000, 1000]);
    }

    #[test]
    fn test_all_max_values() {
        let buffer = pack(&[ELEM_MAX; 4]);
        assert_eq!(buffer, [0xE8, 0xA3, 0x8F, 0x3E, 0xFA]);
        assert_eq!(unpack(&buffer), [ELEM_MAX; 4]);
    }

    #[test]
    fn test_all_min_values() {
        assert_eq!(pack(&[ELEM_MIN; 4]), [0x00; 5]);
    }

    proptest! {
        #[test]
        fn test_roundtrip_in_range(values in proptest::array::uniform4(ELEM_MIN..=ELEM_MAX)) {
            prop_assert_eq!(unpack(&pack(&values)), values);
        }

        #[test]
        fn test_roundtrip_clamps_any_input(values in proptest::array::uniform4(any::<u16>())) {
            let clamped = values.map(|v| v.clamp(ELEM_MIN, ELEM_MAX));
            prop_assert_eq!(unpack(&pack(&values)), clamped);
        }
    }
}

//! Bit cursors over byte slices
//!
//! A cursor tracks a running bit offset; each write or read consumes the
//! requested number of bits and advances. The caller sizes the slice; a
//! cursor never grows it, and driving one past the end panics like any
//! out-of-bounds slice access.

use pack_layout::mask_for;

/// Writes bit fields into a byte slice, LSB first.
///
/// Target bytes must start zeroed; writes OR into place.
pub struct BitWriter<'a> {
    bytes: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitWriter<'a> {
    /// Create a writer positioned at bit zero of `bytes`.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, bit_pos: 0 }
    }

    /// Append the low `width` bits of `code`.
    pub fn write(&mut self, code: u64, width: u32) {
        let mut code = code & mask_for(width);
        let mut remaining = width;
        while remaining > 0 {
            let byte = self.bit_pos / 8;
            let shift = (self.bit_pos % 8) as u32;
            let take = (8 - shift).min(remaining);
            self.bytes[byte] |= ((code & mask_for(take)) as u8) << shift;
            code >>= take;
            self.bit_pos += take as usize;
            remaining -= take;
        }
    }

    /// Bits written so far.
    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }
}

/// Reads bit fields from a byte slice, LSB first.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at bit zero of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, bit_pos: 0 }
    }

    /// Consume the next `width` bits as an unsigned code.
    pub fn read(&mut self, width: u32) -> u64 {
        let mut code = 0u64;
        let mut got = 0u32;
        while got < width {
            let byte = self.bit_pos / 8;
            let shift = (self.bit_pos % 8) as u32;
            let take = (8 - shift).min(width - got);
            let bits = ((self.bytes[byte] >> shift) as u64) & mask_for(take);
            code |= bits << got;
            self.bit_pos += take as usize;
            got += take;
        }
        code
    }

    /// Bits consumed so far.
    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_within_one_byte() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.write(0b101, 3);
        writer.write(0b11, 2);
        assert_eq!(writer.bit_pos(), 5);
        assert_eq!(buf, [0b0001_1101]);
    }

    #[test]
    fn test_write_crosses_byte_boundary() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.write(0, 6);
        writer.write(0b1111, 4); // bits 6..10
        assert_eq!(buf, [0b1100_0000, 0b0000_0011]);
    }

    #[test]
    fn test_write_masks_excess_bits() {
        let mut buf = [0u8; 2];
        let mut writer = BitWriter::new(&mut buf);
        writer.write(0xFFFF, 3); // only the low 3 bits survive
        assert_eq!(buf, [0b0000_0111, 0]);
    }

    #[test]
    fn test_zero_width_is_a_no_op() {
        let mut buf = [0u8; 1];
        let mut writer = BitWriter::new(&mut buf);
        writer.write(0xFF, 0);
        assert_eq!(writer.bit_pos(), 0);
        assert_eq!(buf, [0]);

        let mut reader = BitReader::new(&buf);
        assert_eq!(reader.read(0), 0);
        assert_eq!(reader.bit_pos(), 0);
    }

    #[test]
    fn test_read_back_mixed_widths() {
        let mut buf = [0u8; 4];
        let mut writer = BitWriter::new(&mut buf);
        writer.write(0b1, 1);
        writer.write(0x2A, 7);
        writer.write(0x3FF, 10);
        writer.write(0x155, 9);

        let mut reader = BitReader::new(&buf);
        assert_eq!(reader.read(1), 0b1);
        assert_eq!(reader.read(7), 0x2A);
        assert_eq!(reader.read(10), 0x3FF);
        assert_eq!(reader.read(9), 0x155);
        assert_eq!(reader.bit_pos(), 27);
    }

    #[test]
    fn test_ten_bit_fields_span_bytes() {
        let mut buf = [0u8; 5];
        let mut writer = BitWriter::new(&mut buf);
        for code in [0u64, 999, 500, 42] {
            writer.write(code, 10);
        }
        assert_eq!(buf, [0x00, 0x9C, 0x4F, 0x9F, 0x0A]);
    }
}

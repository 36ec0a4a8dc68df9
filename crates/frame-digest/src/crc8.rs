//! Software CRC-8

use crate::{Digest, FrameHash};

/// CRC-8 computed bit by bit: polynomial 0x07, MSB first, zero initial
/// value, no reflection, no final XOR. The default frame digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc8;

const POLY: u8 = 0x07;

impl FrameHash for Crc8 {
    fn calculate(&self, bytes: &[u8]) -> Digest {
        let mut crc = 0u8;
        for &byte in bytes {
            crc ^= byte;
            for _ in 0..8 {
                crc = if crc & 0x80 != 0 {
                    (crc << 1) ^ POLY
                } else {
                    crc << 1
                };
            }
        }
        crc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let data = [0x00, 0x9C, 0x4F, 0x9F, 0x0A];
        assert_eq!(Crc8.calculate(&data), Crc8.calculate(&data));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Crc8.calculate(&[0x31, 0x32, 0x33, 0x34, 0x35]), 0xCB);
        assert_eq!(Crc8.calculate(&[0x72, 0xDF, 0x80, 0x1A, 0x3B]), 0x3A);
        assert_eq!(Crc8.calculate(&[]), 0x00);
    }

    #[test]
    fn test_distinct_payloads_distinct_digests() {
        let a = Crc8.calculate(&[0x31, 0x32, 0x33, 0x34, 0x35]);
        let b = Crc8.calculate(&[0x72, 0xDF, 0x80, 0x1A, 0x3B]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_single_byte_damage_detected() {
        let data = [0x00, 0x9C, 0x4F, 0x9F, 0x0A];
        let clean = Crc8.calculate(&data);
        for i in 0..data.len() {
            let mut damaged = data;
            damaged[i] ^= b'A';
            assert_ne!(clean, Crc8.calculate(&damaged), "byte {i} undetected");
        }
    }

    // A 1-byte CRC has 256 values, so crafted collisions exist. This pair
    // collides under CRC-8 but not under the word-fed CRC-32 variant.
    #[test]
    fn test_crafted_collision_pair() {
        use crate::WordCrc32;

        let first = [0x31, 0x32, 0x33, 0x34, 0xC2];
        let second = [0x72, 0xDF, 0x80, 0x1A, 0x86];
        assert_eq!(Crc8.calculate(&first), 0x00);
        assert_eq!(Crc8.calculate(&second), 0x00);
        assert_ne!(WordCrc32.calculate(&first), WordCrc32.calculate(&second));
    }
}

//! Word-fed CRC-32

use crate::{Digest, FrameHash};

/// CRC-32 (IEEE) fed as 4-byte machine words, the shape a 32-bit CRC
/// peripheral consumes. A partial trailing word is zero-padded to full
/// width before it is folded in. The wire digest is the low byte of the
/// 32-bit result.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCrc32;

const WORD: usize = 4;

impl FrameHash for WordCrc32 {
    fn calculate(&self, bytes: &[u8]) -> Digest {
        let mut hasher = crc32fast::Hasher::new();
        let mut chunks = bytes.chunks_exact(WORD);
        for word in chunks.by_ref() {
            hasher.update(word);
        }
        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let mut word = [0u8; WORD];
            word[..remainder.len()].copy_from_slice(remainder);
            hasher.update(&word);
        }
        (hasher.finalize() & 0xFF) as Digest
    }
}

//! Additive checksum

use crate::{Digest, FrameHash};

/// Wrapping byte sum. Cheapest of the strategies and the weakest: any
/// reordering of the payload keeps the sum, as do corruptions that
/// cancel modulo 256. Opt-in only, never the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveSum;

impl FrameHash for AdditiveSum {
    fn calculate(&self, bytes: &[u8]) -> Digest {
        bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
    }
}

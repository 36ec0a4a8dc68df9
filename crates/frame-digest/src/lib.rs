//! Frame Integrity Digests
//!
//! One-byte digest strategies for the tail of a telemetry frame. The
//! digest covers the packed payload bytes only, never the raw values.
//! Selection is a compile-time generic on the serializer, so a node
//! carries exactly one strategy.

mod additive;
mod crc8;
mod word_crc32;

pub use additive::AdditiveSum;
pub use crc8::Crc8;
pub use word_crc32::WordCrc32;

/// One-byte digest carried at the end of every frame.
pub type Digest = u8;

/// Digest strategy over the packed payload of a frame.
///
/// Implementations are deterministic and expected to catch single-byte
/// corruption. None of them guard against algebraically cancelling
/// multi-byte patterns; a 1-byte digest cannot.
pub trait FrameHash {
    /// Compute the digest of `bytes`.
    fn calculate(&self, bytes: &[u8]) -> Digest;
}

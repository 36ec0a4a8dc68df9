//! Frame codec errors

use frame_digest::Digest;
use thiserror::Error;

/// Errors surfaced while framing or unframing a telemetry record.
///
/// There is no feedback channel on the link: the sender may retry a whole
/// frame after [`FrameError::ShortWrite`], the receiver drops the frame on
/// the other two.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer bytes than one whole frame.
    #[error("frame truncated: need {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Recomputed digest differs from the received byte.
    #[error("digest mismatch: computed {computed:#04x}, received {received:#04x}")]
    DigestMismatch { computed: Digest, received: Digest },

    /// Sink accepted fewer bytes than requested.
    #[error("short write: sink took {written} of {requested} bytes")]
    ShortWrite { written: usize, requested: usize },
}

//! Frame serializer
//!
//! Wire layout: `[packed payload][digest]`, nothing before, nothing
//! after. On receive the digest is checked before any unpacking, so a
//! corrupt frame never surfaces partially decoded values.

use bit_codec::{pack, unpack};
use frame_digest::{Crc8, FrameHash};
use pack_layout::{PackedBuffer, RawData, PACKED_LEN};
use tracing::trace;

use crate::dump::{hexdump, DumpStyle};
use crate::error::FrameError;
use crate::sink::ByteSink;

/// Total size of one wire frame: packed payload plus digest byte.
pub const FRAME_LEN: usize = PACKED_LEN + 1;

/// Frames telemetry records with a trailing integrity digest.
///
/// The digest strategy is a type parameter, so both link ends pick one
/// at build time and carry no dispatch at run time.
#[derive(Debug, Clone, Default)]
pub struct FrameSerializer<H = Crc8> {
    hasher: H,
}

impl<H: FrameHash + Default> FrameSerializer<H> {
    /// Create a serializer with the default-constructed strategy.
    pub fn new() -> Self {
        Self {
            hasher: H::default(),
        }
    }
}

impl<H: FrameHash> FrameSerializer<H> {
    /// Create a serializer around an explicit strategy instance.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Pack `values`, append the digest, and push both to `sink`.
    ///
    /// Bytes already accepted by the sink are not rolled back on error;
    /// the caller resends a whole frame or not at all.
    pub fn serialize(&self, values: &RawData, sink: &mut impl ByteSink) -> Result<(), FrameError> {
        let payload = pack(values);
        let digest = self.hasher.calculate(&payload);
        trace!("packed: {}", hexdump(&payload, DumpStyle::HexOnly));
        trace!("digest: {digest:#04x}");

        let written = sink.write(&payload);
        if written != payload.len() {
            return Err(FrameError::ShortWrite {
                written,
                requested: payload.len(),
            });
        }
        let written = sink.write(&[digest]);
        if written != 1 {
            return Err(FrameError::ShortWrite {
                written,
                requested: 1,
            });
        }
        Ok(())
    }

    /// Verify the digest of `bytes` and decode the record.
    ///
    /// Needs at least [`FRAME_LEN`] bytes; anything past the frame is
    /// ignored so a caller may hand over a larger receive region as is.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<RawData, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Truncated {
                expected: FRAME_LEN,
                actual: bytes.len(),
            });
        }

        let mut payload: PackedBuffer = [0; PACKED_LEN];
        payload.copy_from_slice(&bytes[..PACKED_LEN]);
        let received = bytes[PACKED_LEN];

        let computed = self.hasher.calculate(&payload);
        trace!("digest computed {computed:#04x}, received {received:#04x}");
        if computed != received {
            return Err(FrameError::DigestMismatch { computed, received });
        }

        Ok(unpack(&payload))
    }
}

//! Telemetry receiving role
//!
//! Pulls whole frames out of the transfer slot, verifies and decodes
//! them, and renders the first three values as a wall clock. Bad frames
//! are counted and dropped; the link has no way to ask for a resend.

use frame_codec::{hexdump, DumpStyle, FrameSerializer, FRAME_LEN};
use frame_digest::{Crc8, FrameHash};
use pack_layout::RawData;
use tracing::{debug, info, warn};
use transfer_slot::SlotReader;

/// Receiving role of the link.
pub struct LinkConsumer<H = Crc8> {
    serializer: FrameSerializer<H>,
    dump_style: DumpStyle,
    frames_ok: u64,
    frames_dropped: u64,
}

impl<H: FrameHash + Default> LinkConsumer<H> {
    /// Create a consumer dumping frames in the default style.
    pub fn new() -> Self {
        Self::with_style(DumpStyle::default())
    }

    /// Create a consumer with an explicit dump style for the frame log.
    pub fn with_style(dump_style: DumpStyle) -> Self {
        Self {
            serializer: FrameSerializer::new(),
            dump_style,
            frames_ok: 0,
            frames_dropped: 0,
        }
    }
}

impl<H: FrameHash + Default> Default for LinkConsumer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FrameHash> LinkConsumer<H> {
    /// Take one frame from the slot if one is pending.
    ///
    /// Returns the decoded record, or `None` when nothing was ready or
    /// the frame failed verification.
    pub fn poll(&mut self, reader: &mut SlotReader<FRAME_LEN>) -> Option<RawData> {
        if reader.available() == 0 {
            return None;
        }
        let mut frame = [0u8; FRAME_LEN];
        if reader.read(&mut frame) == 0 {
            return None;
        }
        debug!("frame: {}", hexdump(&frame, self.dump_style));

        match self.serializer.deserialize(&frame) {
            Ok(values) => {
                self.frames_ok += 1;
                info!("time {}", format_clock(&values));
                Some(values)
            }
            Err(err) => {
                self.frames_dropped += 1;
                warn!("frame dropped: {err}");
                None
            }
        }
    }

    /// Frames decoded so far.
    pub fn frames_ok(&self) -> u64 {
        self.frames_ok
    }

    /// Frames that failed verification.
    pub fn frames_dropped(&self) -> u64 {
        self.frames_dropped
    }
}

/// Render the first three elements as `hh:mm:ss`.
pub fn format_clock(values: &RawData) -> String {
    format!("{:02}:{:02}:{:02}", values[0], values[1], values[2])
}

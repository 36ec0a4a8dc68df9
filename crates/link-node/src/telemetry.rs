//! Telemetry sending role
//!
//! Owns the source record and pushes it onto the wire at the configured
//! cadence. The record starts as the wall clock (hour, minute, second)
//! plus an uptime seconds counter; a confirmed button press refreshes
//! the counter slot between sends.

use chrono::{Local, Timelike};
use frame_codec::{ByteSink, FrameError, FrameSerializer};
use frame_digest::{Crc8, FrameHash};
use pack_layout::{Elem, RawData, ELEM_COUNT};
use tracing::info;
use transfer_slot::SlotFeeder;

use crate::button::{ButtonEvent, DebouncedButton};
use crate::pacer::SendPacer;

/// Uptime seconds folded into one element.
fn uptime_elem(now_ms: u32) -> Elem {
    (now_ms / 1000 % 65535) as Elem
}

/// Sending role of the link.
pub struct TelemetrySampler<H = Crc8> {
    serializer: FrameSerializer<H>,
    pacer: SendPacer,
    button: DebouncedButton,
    source: RawData,
}

impl<H: FrameHash + Default> TelemetrySampler<H> {
    /// Create a sampler sending every `period_ms`.
    pub fn new(period_ms: u32) -> Self {
        Self {
            serializer: FrameSerializer::new(),
            pacer: SendPacer::new(period_ms),
            button: DebouncedButton::new(),
            source: [0; ELEM_COUNT],
        }
    }
}

impl<H: FrameHash> TelemetrySampler<H> {
    /// Seed the record from the wall clock and the uptime counter.
    pub fn seed_clock(&mut self, now_ms: u32) {
        let now = Local::now();
        self.source = [
            now.hour() as Elem,
            now.minute() as Elem,
            now.second() as Elem,
            uptime_elem(now_ms),
        ];
        info!("telemetry seeded: {:?}", self.source);
    }

    /// Replace the source record.
    pub fn set_source(&mut self, values: RawData) {
        self.source = values;
    }

    /// Current source record.
    pub fn source(&self) -> &RawData {
        &self.source
    }

    /// Advance the loop by one sample.
    ///
    /// Handles the button line, and when a send period has elapsed
    /// serializes the record into `sink`. Returns whether a frame went
    /// out this tick.
    pub fn tick(
        &mut self,
        now_ms: u32,
        pressed: bool,
        sink: &mut impl ByteSink,
    ) -> Result<bool, FrameError> {
        if let Some(ButtonEvent::Pressed) = self.button.sample(pressed, now_ms) {
            info!("user button pressed");
            self.source[ELEM_COUNT - 1] = uptime_elem(now_ms);
        }

        if !self.pacer.poll(now_ms) {
            return Ok(false);
        }
        self.serializer.serialize(&self.source, sink)?;
        Ok(true)
    }
}

/// Drives a transfer slot feeder as the serializer's byte sink. This is
/// the demo's wire: bytes written by the sender land in the receive slot.
pub struct SlotSink<const LEN: usize>(pub SlotFeeder<LEN>);

impl<const LEN: usize> ByteSink for SlotSink<LEN> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.0.feed(bytes);
        bytes.len()
    }
}

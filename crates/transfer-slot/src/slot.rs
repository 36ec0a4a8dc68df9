//! Slot feeder and reader
//!
//! The feeder stands in for a circular receive engine plus its interrupt
//! handler; the reader is the consumer loop. The region lock plays the
//! part of the consumer's masked-interrupt window: the handler and the
//! reader's copy cannot overlap. The `complete` and `error` latches keep
//! hardware-latch semantics: set by the engine side, consumed only where
//! the protocol says so.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

struct TransferSlot<const LEN: usize> {
    /// Receive region, overwritten in place every pass.
    region: Mutex<[u8; LEN]>,
    /// Readiness flag: raised by the handler, lowered by the reader.
    ready: AtomicBool,
    /// Completion latch, one per full pass of the region.
    complete: AtomicBool,
    /// Error latch for the pass in flight.
    error: AtomicBool,
}

impl<const LEN: usize> TransferSlot<LEN> {
    const NONEMPTY: () = assert!(LEN > 0, "slot length must be non-zero");
}

/// Create a connected feeder/reader pair over one slot.
///
/// Single producer, single consumer: each handle is the only one of its
/// kind and mutating calls take `&mut self`.
pub fn transfer_slot<const LEN: usize>() -> (SlotFeeder<LEN>, SlotReader<LEN>) {
    let _ = TransferSlot::<LEN>::NONEMPTY;
    let shared = Arc::new(TransferSlot {
        region: Mutex::new([0u8; LEN]),
        ready: AtomicBool::new(false),
        complete: AtomicBool::new(false),
        error: AtomicBool::new(false),
    });
    (
        SlotFeeder {
            shared: Arc::clone(&shared),
            cursor: 0,
        },
        SlotReader { shared },
    )
}

/// Feeding side of a slot: the wire byte stream enters here.
pub struct SlotFeeder<const LEN: usize> {
    shared: Arc<TransferSlot<LEN>>,
    cursor: usize,
}

impl<const LEN: usize> SlotFeeder<LEN> {
    /// Write `bytes` into the region at the running position, wrapping.
    /// Every completed pass latches `complete` and runs the handler.
    pub fn feed(&mut self, bytes: &[u8]) {
        let mut offset = 0;
        while offset < bytes.len() {
            let take = (LEN - self.cursor).min(bytes.len() - offset);
            {
                let mut region = self.shared.region.lock();
                region[self.cursor..self.cursor + take]
                    .copy_from_slice(&bytes[offset..offset + take]);
            }
            self.cursor += take;
            offset += take;
            if self.cursor == LEN {
                self.cursor = 0;
                self.shared.complete.store(true, Ordering::Release);
                self.on_pass_complete();
            }
        }
    }

    /// Latch a transfer error for the pass in flight. The handler will
    /// swallow that pass: it is never signalled to the reader.
    pub fn signal_error(&mut self) {
        self.shared.error.store(true, Ordering::Release);
    }

    /// Completion handler. Error first: an errored pass consumes both
    /// latches and raises nothing, so the drop leaves no completion for
    /// the reader's re-sample to pick up. Otherwise consume the
    /// completion latch and raise readiness.
    fn on_pass_complete(&self) {
        let _region = self.shared.region.lock();
        if self.shared.error.swap(false, Ordering::AcqRel) {
            self.shared.complete.store(false, Ordering::Release);
            return;
        }
        if self.shared.complete.swap(false, Ordering::AcqRel) {
            self.shared.ready.store(true, Ordering::Release);
        }
    }
}

/// Consuming side of a slot.
pub struct SlotReader<const LEN: usize> {
    shared: Arc<TransferSlot<LEN>>,
}

impl<const LEN: usize> SlotReader<LEN> {
    /// Copy one whole frame into `out`.
    ///
    /// `out` must be exactly the slot length, otherwise 0 is returned
    /// immediately. Blocks until a frame is ready; there is no timeout.
    /// While the region is copied the handler cannot run; afterwards the
    /// completion latch is re-sampled so a pass that finished during the
    /// copy is not lost.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        if out.len() != LEN {
            return 0;
        }
        while !self.shared.ready.load(Ordering::Acquire) {
            std::hint::spin_loop();
        }

        let region = self.shared.region.lock();
        out.copy_from_slice(&region[..]);
        let pending = self.shared.complete.load(Ordering::Acquire);
        self.shared.ready.store(pending, Ordering::Release);
        drop(region);

        LEN
    }

    /// Bytes ready to read: the whole slot or nothing, never a part.
    pub fn available(&self) -> usize {
        if self.shared.ready.load(Ordering::Acquire) {
            LEN
        } else {
            0
        }
    }
}

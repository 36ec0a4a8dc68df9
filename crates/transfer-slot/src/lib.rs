//! Single-Slot Transfer Buffer
//!
//! Models the receive path of the link: an engine writes bytes into a
//! fixed region round and round, latches a completion per full pass, and
//! a handler folds those latches into one readiness flag the consumer
//! polls. One region, one flag, at most one pending frame; a newer frame
//! overwrites an unread one rather than queueing behind it.

mod slot;

pub use slot::{transfer_slot, SlotFeeder, SlotReader};

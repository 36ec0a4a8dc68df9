//! Bit-Level Telemetry Codec
//!
//! Packs bounded telemetry values into minimal-width bit fields and back.
//! Fields are laid out LSB first: the low bits of each code land in the
//! low bit positions of the current byte and overflow into the next.

mod cursor;
mod packing;

pub use cursor::{BitReader, BitWriter};
pub use packing::{pack, unpack};

//! Build-Time Pack Layout
//!
//! Derives the wire layout of a telemetry record (bit width, packed size,
//! code mask) from the element configuration, entirely in const context.
//! Invalid configurations fail compilation, never startup.

pub mod config;
pub mod layout;

pub use config::{Elem, ELEM_COUNT, ELEM_MAX, ELEM_MIN};
pub use layout::{
    bit_width_for, denormalize, mask_for, normalize, packed_len_for, PackedBuffer, RawData,
    BIT_WIDTH, CODE_MASK, PACKED_LEN,
};

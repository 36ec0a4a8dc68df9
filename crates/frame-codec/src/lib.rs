//! Telemetry Frame Codec
//!
//! Serializes a telemetry record into its wire frame (packed payload
//! followed by a one-byte digest, nothing else) and verifies + decodes
//! frames on the receiving side. Frame length is agreed at build time;
//! the wire carries no headers, delimiters or length prefixes.

mod codec;
mod dump;
mod error;
mod sink;

pub use codec::{FrameSerializer, FRAME_LEN};
pub use dump::{hexdump, hexdump_with, DumpStyle};
pub use error::FrameError;
pub use sink::{ByteSink, IoSink};

//! Byte sinks
//!
//! The transmit side of the link only needs one operation: hand bytes to
//! the transport and learn how many it took. Anything byte-oriented can
//! stand behind it, a UART register, a socket, a test buffer.

/// Byte-oriented output endpoint for serialized frames.
pub trait ByteSink {
    /// Write `bytes`, returning how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> usize;
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

/// Adapter driving any [`std::io::Write`] as a frame sink.
///
/// An I/O error reports as zero bytes accepted; the serializer turns that
/// into a short-write error for the caller.
pub struct IoSink<W>(pub W);

impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.0.write(bytes).unwrap_or(0)
    }
}

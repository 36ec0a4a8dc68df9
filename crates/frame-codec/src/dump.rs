//! Hex dump formatting
//!
//! Renders byte buffers for log output. Hex columns get a wider gap
//! every eight bytes, the ASCII column shows non-printable bytes as `.`,
//! and the address column counts offsets from the start of the buffer.

use serde::{Deserialize, Serialize};

/// Dump layout selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DumpStyle {
    /// Only hexadecimal values.
    #[default]
    HexOnly,
    /// Only the ASCII representation.
    AsciiOnly,
    /// Hex and ASCII.
    HexWithAscii,
    /// Hex with addresses.
    HexWithAddress,
    /// ASCII with addresses.
    AsciiWithAddress,
    /// Address, hex and ASCII.
    FullDump,
}

impl DumpStyle {
    fn shows_hex(self) -> bool {
        !matches!(self, DumpStyle::AsciiOnly | DumpStyle::AsciiWithAddress)
    }

    fn shows_ascii(self) -> bool {
        !matches!(self, DumpStyle::HexOnly | DumpStyle::HexWithAddress)
    }

    fn shows_address(self) -> bool {
        matches!(
            self,
            DumpStyle::HexWithAddress | DumpStyle::AsciiWithAddress | DumpStyle::FullDump
        )
    }
}

/// Format `bytes` in the given style, 16 bytes per line.
pub fn hexdump(bytes: &[u8], style: DumpStyle) -> String {
    hexdump_with(bytes, style, 16)
}

/// Format `bytes` with an explicit line width.
pub fn hexdump_with(bytes: &[u8], style: DumpStyle, bytes_per_line: usize) -> String {
    let bytes_per_line = bytes_per_line.max(1);
    let mut lines = Vec::new();

    for (line_no, chunk) in bytes.chunks(bytes_per_line).enumerate() {
        let mut line = String::new();

        if style.shows_address() {
            line.push_str(&format!("0x{:08x}   ", line_no * bytes_per_line));
        }

        if style.shows_hex() {
            for i in 0..bytes_per_line {
                match chunk.get(i) {
                    Some(byte) => line.push_str(&format!("{byte:02x} ")),
                    // Pad a short final line so the ASCII column stays put.
                    None if style.shows_ascii() => line.push_str("   "),
                    None => break,
                }
                if i % 8 == 7 {
                    line.push(' ');
                }
            }
        }

        if style.shows_ascii() {
            if style.shows_hex() {
                line.push_str(" |");
            } else {
                line.push('|');
            }
            for &byte in chunk {
                line.push(if (0x20..=0x7E).contains(&byte) {
                    byte as char
                } else {
                    '.'
                });
            }
            line.push('|');
        }

        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

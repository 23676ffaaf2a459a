//! TGA run-length packets.
//!
//! Each packet starts with one header byte: bit 7 set means a repeat
//! packet (one payload repeated), clear means a literal packet (one
//! payload per pixel). Bits 6..0 hold `run_length - 1`, so every packet
//! covers 1..=128 pixels. The payload width is the source pixel size
//! (1, 3 or 4 bytes) and is carried as a const generic.

use std::io::{self, Read};

use super::reader::ByteReader;

/// Decoded packet header byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RlePacket {
    pub encoded: bool,
    /// Pixels covered by this packet, 1..=128.
    pub run_length: u8,
}

impl RlePacket {
    pub const fn from_header_byte(byte: u8) -> Self {
        Self {
            encoded: byte & 0x80 != 0,
            run_length: (byte & 0x7F) + 1,
        }
    }
}

/// One packet with its repeat payload already read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Run<const N: usize> {
    /// `value` fills `count` consecutive pixels.
    Repeat { count: u8, value: [u8; N] },
    /// `count` payloads follow in the stream, one per pixel.
    Literal { count: u8 },
}

impl<const N: usize> Run<N> {
    pub fn len(&self) -> usize {
        match *self {
            Run::Repeat { count, .. } | Run::Literal { count } => usize::from(count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the next packet header and, for repeat packets, its single payload.
pub(crate) fn decode_next_run<R: Read, const N: usize>(
    reader: &mut ByteReader<R>,
) -> io::Result<Run<N>> {
    let packet = RlePacket::from_header_byte(reader.read_u8()?);
    if packet.encoded {
        Ok(Run::Repeat {
            count: packet.run_length,
            value: read_payload(reader)?,
        })
    } else {
        Ok(Run::Literal {
            count: packet.run_length,
        })
    }
}

/// Read a single `N`-byte pixel payload.
pub(crate) fn read_payload<R: Read, const N: usize>(
    reader: &mut ByteReader<R>,
) -> io::Result<[u8; N]> {
    reader.read_fixed_bytes::<N>()
}

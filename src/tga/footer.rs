//! Optional TGA 2.0 footer.

use std::io::{self, Read};

use super::reader::ByteReader;
use crate::error::TgaError;

/// Size of the on-disk footer.
pub const FOOTER_LEN: usize = 26;

/// Footer signature, NUL-terminated.
pub const TGA_SIGNATURE: &[u8; 18] = b"TRUEVISION-XFILE.\0";

/// Trailing footer as read from the stream. The offsets point at the
/// extension and developer areas; those areas are not parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaFooter {
    pub extension_offset: u32,
    pub developer_offset: u32,
    pub signature: [u8; 18],
}

/// Format revision inferred from the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TgaVersion {
    /// No footer, or a footer without the signature.
    V1,
    V2,
}

impl TgaFooter {
    pub fn parse(b: &[u8; FOOTER_LEN]) -> Self {
        let mut signature = [0u8; 18];
        signature.copy_from_slice(&b[8..]);
        Self {
            extension_offset: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            developer_offset: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            signature,
        }
    }

    pub fn has_valid_signature(&self) -> bool {
        &self.signature == TGA_SIGNATURE
    }

    pub fn has_extension_area(&self) -> bool {
        self.extension_offset != 0
    }

    pub fn has_developer_area(&self) -> bool {
        self.developer_offset != 0
    }

    pub fn version(footer: Option<&Self>) -> TgaVersion {
        match footer {
            Some(f) if f.has_valid_signature() => TgaVersion::V2,
            _ => TgaVersion::V1,
        }
    }
}

/// Best-effort footer read once pixel data is consumed.
///
/// Exactly [`FOOTER_LEN`] bytes are read straight after the pixel data and
/// nothing beyond them. A short read means a v1 file and yields `None`. A
/// signature mismatch is logged and the footer is still returned.
pub(crate) fn try_read_footer<R: Read>(
    reader: &mut ByteReader<R>,
) -> Result<Option<TgaFooter>, TgaError> {
    let raw = match reader.read_fixed_bytes::<FOOTER_LEN>() {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::debug!(offset = reader.position(), "no TGA footer");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let footer = TgaFooter::parse(&raw);

    if footer.has_valid_signature() {
        tracing::debug!(
            extension_offset = footer.extension_offset,
            developer_offset = footer.developer_offset,
            "TGA 2.0 footer"
        );
    } else {
        tracing::warn!(
            signature = ?footer.signature,
            "trailing footer signature mismatch"
        );
    }
    Ok(Some(footer))
}

use alloc::vec;
use alloc::vec::Vec;
use std::io::Read;

use super::header::TgaHeader;
use super::reader::ByteReader;
use crate::error::TgaError;
use crate::pixel::Bgr;

/// Largest colormap an 8-bit index can address.
pub const MAX_COLORMAP_ENTRIES: usize = 256;

/// Palette of BGR entries; index 0 maps pixel value 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<Bgr>,
}

impl ColorTable {
    /// Read `cmap_length` 3-byte BGR entries. An empty table is returned
    /// without touching the stream when the header declares none.
    pub(crate) fn load<R: Read>(
        reader: &mut ByteReader<R>,
        header: &TgaHeader,
    ) -> Result<Self, TgaError> {
        let len = usize::from(header.cmap_length);
        if len == 0 {
            return Ok(Self::default());
        }
        if len > MAX_COLORMAP_ENTRIES {
            return Err(TgaError::InvalidHeader(alloc::format!(
                "colormap length {len} exceeds {MAX_COLORMAP_ENTRIES} entries"
            )));
        }

        let mut raw = vec![0u8; len * 3];
        reader.read_exact_bytes(&mut raw)?;
        let entries = raw
            .chunks_exact(3)
            .map(|c| Bgr::from_bytes([c[0], c[1], c[2]]))
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<Bgr> {
        self.entries.get(usize::from(index)).copied()
    }

    pub fn entries(&self) -> &[Bgr] {
        &self.entries
    }

    pub(crate) fn lookup(&self, index: u8) -> Result<Bgr, TgaError> {
        self.get(index).ok_or(TgaError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }
}

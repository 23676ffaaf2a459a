//! Pixel-data decoding for the six supported (type, depth) pairs.
//!
//! Every strategy walks the stream once, in order, and stops after exactly
//! `pixel_count` pixels. Each source pixel is written to `rgb24` and
//! `argb32`; color-mapped sources also record the raw index in `indexed`.

use alloc::vec::Vec;
use std::io::Read;

use super::colormap::ColorTable;
use super::reader::ByteReader;
use super::rle::{self, Run};
use crate::error::TgaError;
use crate::pixel::{Argb, Bgr, Bgra, Rgb};

/// Decode path selected from `(image_type, pixel_depth)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    /// Type 1, 8-bit colormap indices.
    IndexedRaw,
    /// Type 2, 24-bit BGR.
    TrueColor24Raw,
    /// Type 2, 32-bit BGRA.
    TrueColor32Raw,
    /// Type 9, 8-bit colormap indices in RLE packets.
    IndexedRle,
    /// Type 9, 24-bit BGR in RLE packets.
    TrueColor24Rle,
    /// Type 9, 32-bit BGRA in RLE packets.
    TrueColor32Rle,
}

impl DecodeStrategy {
    pub fn select(image_type: u8, pixel_depth: u8) -> Result<Self, TgaError> {
        match (image_type, pixel_depth) {
            (1, 8) => Ok(Self::IndexedRaw),
            (2, 24) => Ok(Self::TrueColor24Raw),
            (2, 32) => Ok(Self::TrueColor32Raw),
            (9, 8) => Ok(Self::IndexedRle),
            (9, 24) => Ok(Self::TrueColor24Rle),
            (9, 32) => Ok(Self::TrueColor32Rle),
            _ => Err(TgaError::UnsupportedFormat {
                image_type,
                pixel_depth,
            }),
        }
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, Self::IndexedRaw | Self::IndexedRle)
    }

    pub fn is_rle(self) -> bool {
        matches!(
            self,
            Self::IndexedRle | Self::TrueColor24Rle | Self::TrueColor32Rle
        )
    }

    /// Bytes per pixel in the source stream.
    pub fn source_bytes_per_pixel(self) -> usize {
        match self {
            Self::IndexedRaw | Self::IndexedRle => 1,
            Self::TrueColor24Raw | Self::TrueColor24Rle => 3,
            Self::TrueColor32Raw | Self::TrueColor32Rle => 4,
        }
    }

    /// Output bytes produced per pixel across all buffers.
    pub(crate) fn output_bytes_per_pixel(self) -> usize {
        if self.is_indexed() { 1 + 3 + 4 } else { 3 + 4 }
    }
}

/// Upper bound on up-front allocation; a header alone cannot commit
/// gigabytes before any pixel data has been seen.
const MAX_PREALLOC_PIXELS: usize = 1 << 20;

/// The three synchronized output buffers.
///
/// `indexed` is `Some` only for color-mapped sources. All present buffers
/// describe the same pixels in stream order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffers {
    pub indexed: Option<Vec<u8>>,
    pub rgb24: Vec<u8>,
    pub argb32: Vec<u8>,
}

impl PixelBuffers {
    fn with_capacity(strategy: DecodeStrategy, pixel_count: usize) -> Self {
        let pixel_count = pixel_count.min(MAX_PREALLOC_PIXELS);
        Self {
            indexed: strategy
                .is_indexed()
                .then(|| Vec::with_capacity(pixel_count)),
            rgb24: Vec::with_capacity(pixel_count * 3),
            argb32: Vec::with_capacity(pixel_count * 4),
        }
    }

    /// Pixels written so far.
    pub fn len(&self) -> usize {
        self.argb32.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.argb32.is_empty()
    }

    fn push(&mut self, rgb: Rgb, argb: Argb) {
        self.rgb24.extend_from_slice(&rgb.to_bytes());
        self.argb32.extend_from_slice(&argb.to_bytes());
    }

    fn push_index(&mut self, index: u8, table: &ColorTable) -> Result<(), TgaError> {
        let color = table.lookup(index)?;
        if let Some(indexed) = self.indexed.as_mut() {
            indexed.push(index);
        }
        self.push(color.to_rgb(), color.to_argb());
        Ok(())
    }

    fn push_bgr(&mut self, px: Bgr) {
        self.push(px.to_rgb(), px.to_argb());
    }

    fn push_bgra(&mut self, px: Bgra) {
        self.push(px.to_rgb(), px.to_argb());
    }
}

/// Decode `pixel_count` pixels with `strategy`.
pub(crate) fn decode_pixels<R: Read>(
    reader: &mut ByteReader<R>,
    strategy: DecodeStrategy,
    table: &ColorTable,
    pixel_count: usize,
) -> Result<PixelBuffers, TgaError> {
    let mut out = PixelBuffers::with_capacity(strategy, pixel_count);

    let index = |out: &mut PixelBuffers, [i]: [u8; 1]| out.push_index(i, table);
    let bgr = |out: &mut PixelBuffers, px: [u8; 3]| {
        out.push_bgr(Bgr::from_bytes(px));
        Ok::<(), TgaError>(())
    };
    let bgra = |out: &mut PixelBuffers, px: [u8; 4]| {
        out.push_bgra(Bgra::from_bytes(px));
        Ok::<(), TgaError>(())
    };

    match strategy {
        DecodeStrategy::IndexedRaw => decode_raw(reader, &mut out, pixel_count, index)?,
        DecodeStrategy::TrueColor24Raw => decode_raw(reader, &mut out, pixel_count, bgr)?,
        DecodeStrategy::TrueColor32Raw => decode_raw(reader, &mut out, pixel_count, bgra)?,
        DecodeStrategy::IndexedRle => decode_rle(reader, &mut out, pixel_count, index)?,
        DecodeStrategy::TrueColor24Rle => decode_rle(reader, &mut out, pixel_count, bgr)?,
        DecodeStrategy::TrueColor32Rle => decode_rle(reader, &mut out, pixel_count, bgra)?,
    }

    debug_assert_eq!(out.len(), pixel_count);
    Ok(out)
}

fn decode_raw<R, const N: usize, F>(
    reader: &mut ByteReader<R>,
    out: &mut PixelBuffers,
    pixel_count: usize,
    mut emit: F,
) -> Result<(), TgaError>
where
    R: Read,
    F: FnMut(&mut PixelBuffers, [u8; N]) -> Result<(), TgaError>,
{
    while out.len() < pixel_count {
        let px = rle::read_payload::<R, N>(reader)
            .map_err(|e| TgaError::truncated(e, out.len(), pixel_count))?;
        emit(out, px)?;
    }
    Ok(())
}

fn decode_rle<R, const N: usize, F>(
    reader: &mut ByteReader<R>,
    out: &mut PixelBuffers,
    pixel_count: usize,
    mut emit: F,
) -> Result<(), TgaError>
where
    R: Read,
    F: FnMut(&mut PixelBuffers, [u8; N]) -> Result<(), TgaError>,
{
    while out.len() < pixel_count {
        let decoded = out.len();
        let run = rle::decode_next_run::<R, N>(reader)
            .map_err(|e| TgaError::truncated(e, decoded, pixel_count))?;

        // Packets may straddle rows but never the end of the image.
        if run.len() > pixel_count - decoded {
            return Err(TgaError::InvalidData(alloc::format!(
                "RLE packet of {} pixels at pixel {decoded} overruns {pixel_count} pixels",
                run.len()
            )));
        }

        match run {
            Run::Repeat { count, value } => {
                for _ in 0..count {
                    emit(out, value)?;
                }
            }
            Run::Literal { count } => {
                for _ in 0..count {
                    let px = rle::read_payload::<R, N>(reader)
                        .map_err(|e| TgaError::truncated(e, out.len(), pixel_count))?;
                    emit(out, px)?;
                }
            }
        }
    }
    Ok(())
}

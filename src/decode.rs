use alloc::vec::Vec;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::tga::colormap::ColorTable;
use crate::tga::footer::{TgaFooter, TgaVersion};
use crate::tga::header::TgaHeader;
use crate::tga::pixels::{DecodeStrategy, PixelBuffers};
use crate::tga::reader::ByteReader;

/// An opened TGA stream, ready to decode once.
///
/// [`load`](Self::load) consumes the decoder, so the stream is dropped
/// exactly once whether decoding succeeds or fails, and a second decode of
/// the same stream cannot be expressed.
///
/// Reads are exact and unbuffered at this layer; wrap slow readers in a
/// [`BufReader`] ([`open`](Self::open) does this already).
pub struct TgaDecoder<R> {
    reader: ByteReader<R>,
    limits: Option<Limits>,
}

impl TgaDecoder<BufReader<File>> {
    /// Open a file for decoding.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TgaError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opened TGA file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> TgaDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: ByteReader::new(reader),
            limits: None,
        }
    }

    /// Reject images exceeding `limits` before any pixel buffer is allocated.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole image. On error nothing decoded so far is returned.
    pub fn load(self) -> Result<TgaImage, TgaError> {
        let Self { mut reader, limits } = self;
        let result = crate::tga::decode(&mut reader, limits.as_ref());
        drop(reader);
        if let Err(err) = &result {
            tracing::debug!(%err, "TGA decode failed");
        }
        result
    }
}

/// A fully decoded TGA image.
#[derive(Clone, Debug)]
pub struct TgaImage {
    header: TgaHeader,
    image_id: Vec<u8>,
    color_table: ColorTable,
    strategy: DecodeStrategy,
    buffers: PixelBuffers,
    footer: Option<TgaFooter>,
}

impl TgaImage {
    pub(crate) fn new(
        header: TgaHeader,
        image_id: Vec<u8>,
        color_table: ColorTable,
        strategy: DecodeStrategy,
        buffers: PixelBuffers,
        footer: Option<TgaFooter>,
    ) -> Self {
        Self {
            header,
            image_id,
            color_table,
            strategy,
            buffers,
            footer,
        }
    }

    pub fn header(&self) -> &TgaHeader {
        &self.header
    }

    pub fn width(&self) -> u32 {
        u32::from(self.header.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.header.height)
    }

    /// Raw image-ID field (up to 255 bytes, uninterpreted).
    pub fn image_id(&self) -> &[u8] {
        &self.image_id
    }

    /// Colormap; empty for truecolor images without one.
    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    pub fn strategy(&self) -> DecodeStrategy {
        self.strategy
    }

    /// Colormap indices, one byte per pixel. `None` for truecolor sources.
    pub fn indexed_pixels(&self) -> Option<&[u8]> {
        self.buffers.indexed.as_deref()
    }

    /// RGB, 3 bytes per pixel, in stream order.
    pub fn rgb24_pixels(&self) -> &[u8] {
        &self.buffers.rgb24
    }

    /// ARGB, 4 bytes per pixel, alpha first. Alpha is 255 unless the
    /// source carries it.
    pub fn argb32_pixels(&self) -> &[u8] {
        &self.buffers.argb32
    }

    pub fn footer(&self) -> Option<&TgaFooter> {
        self.footer.as_ref()
    }

    pub fn version(&self) -> TgaVersion {
        TgaFooter::version(self.footer.as_ref())
    }

    /// Take ownership of the pixel buffers.
    pub fn into_buffers(self) -> PixelBuffers {
        self.buffers
    }

    /// Reinterpret the rgb24 buffer as typed pixels.
    #[cfg(feature = "rgb")]
    pub fn rgb24_as_pixels(&self) -> &[rgb::RGB8] {
        self.buffers.rgb24.as_pixels()
    }

    /// Copy the rgb24 buffer into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.rgb24_as_pixels().to_vec(),
            self.width() as usize,
            self.height() as usize,
        )
    }
}

/// Decode a TGA image held in memory.
pub fn decode(data: &[u8]) -> Result<TgaImage, TgaError> {
    TgaDecoder::new(data).load()
}

/// Decode with resource limits.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<TgaImage, TgaError> {
    TgaDecoder::new(data).with_limits(limits.clone()).load()
}

/// Open and decode a TGA file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<TgaImage, TgaError> {
    TgaDecoder::open(path)?.load()
}

/// Parse the header only; no colormap or pixel data is read.
pub fn probe(data: &[u8]) -> Result<TgaHeader, TgaError> {
    crate::tga::probe_header(data)
}

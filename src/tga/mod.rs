//! Truevision TGA decoder (internal).
//!
//! Layout: 18-byte header, optional image-ID field, optional BGR colormap,
//! pixel data (raw or run-length packets), and for TGA 2.0 a 26-byte
//! footer read straight after the pixel data.
//!
//! Use [`crate::TgaDecoder`] or the top-level [`crate::decode`] helpers.

pub(crate) mod colormap;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod pixels;
pub(crate) mod reader;
pub(crate) mod rle;

use alloc::vec;
use std::io::Read;

use crate::decode::TgaImage;
use crate::error::TgaError;
use crate::limits::Limits;
use colormap::ColorTable;
use header::TgaHeader;
use pixels::DecodeStrategy;
use reader::ByteReader;

/// Run header, image ID, colormap, pixel data and footer in order.
pub(crate) fn decode<R: Read>(
    reader: &mut ByteReader<R>,
    limits: Option<&Limits>,
) -> Result<TgaImage, TgaError> {
    let header = TgaHeader::read(reader)?;
    tracing::debug!(
        width = header.width,
        height = header.height,
        image_type = header.image_type,
        pixel_depth = header.pixel_depth,
        cmap_length = header.cmap_length,
        "TGA header"
    );
    let sizes = header.buffer_sizes()?;

    let mut image_id = vec![0u8; usize::from(header.id_length)];
    reader.read_exact_bytes(&mut image_id)?;

    let color_table = ColorTable::load(reader, &header)?;

    let strategy = DecodeStrategy::select(header.image_type, header.pixel_depth)?;
    if let Some(limits) = limits {
        limits.check(&header, strategy)?;
    }
    tracing::debug!(
        ?strategy,
        rle = strategy.is_rle(),
        bytes_per_pixel = strategy.source_bytes_per_pixel(),
        offset = reader.position(),
        "decoding pixel data"
    );

    let buffers = pixels::decode_pixels(reader, strategy, &color_table, sizes.pixel_count)?;
    let footer = footer::try_read_footer(reader)?;

    Ok(TgaImage::new(
        header,
        image_id,
        color_table,
        strategy,
        buffers,
        footer,
    ))
}

/// Parse only the header, for probing.
pub(crate) fn probe_header(data: &[u8]) -> Result<TgaHeader, TgaError> {
    TgaHeader::read(&mut ByteReader::new(data))
}

//! The fixed 18-byte TGA header.

use std::io::Read;

use super::reader::ByteReader;
use crate::error::TgaError;

/// Size of the on-disk header.
pub const HEADER_LEN: usize = 18;

/// Image type code from header byte 2.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 0: no image data.
    NoImage,
    /// 1: uncompressed, color-mapped.
    ColorMapped,
    /// 2: uncompressed, truecolor.
    TrueColor,
    /// 3: uncompressed, monochrome.
    Monochrome,
    /// 9: run-length encoded, color-mapped.
    RleColorMapped,
    /// 10: run-length encoded, truecolor.
    RleTrueColor,
    /// 11: run-length encoded, monochrome.
    RleMonochrome,
    Unknown(u8),
}

impl ImageType {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Self::NoImage,
            1 => Self::ColorMapped,
            2 => Self::TrueColor,
            3 => Self::Monochrome,
            9 => Self::RleColorMapped,
            10 => Self::RleTrueColor,
            11 => Self::RleMonochrome,
            other => Self::Unknown(other),
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(
            self,
            Self::RleColorMapped | Self::RleTrueColor | Self::RleMonochrome
        )
    }
}

/// Parsed TGA header. Multi-byte fields are little-endian on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaHeader {
    /// Length of the image-ID field that follows the header.
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    /// First colormap entry index (recorded, not applied).
    pub cmap_start: u16,
    pub cmap_length: u16,
    /// Bits per colormap entry (recorded, not validated).
    pub cmap_depth: u8,
    pub x_offset: u16,
    pub y_offset: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    /// Bits 0-3: alpha bits, bit 4: right-to-left, bit 5: top-to-bottom.
    pub image_descriptor: u8,
}

/// Buffer sizes derived from the header dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferSizes {
    pub pixel_count: usize,
    /// Bytes of the indexed buffer (1 per pixel).
    pub size8: usize,
    /// Bytes of the rgb24 buffer (3 per pixel).
    pub size24: usize,
    /// Bytes of the argb32 buffer (4 per pixel).
    pub size32: usize,
}

impl TgaHeader {
    /// Decode the header from its fixed on-disk layout.
    pub fn parse(b: &[u8; HEADER_LEN]) -> Self {
        let le = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            id_length: b[0],
            color_map_type: b[1],
            image_type: b[2],
            cmap_start: le(3),
            cmap_length: le(5),
            cmap_depth: b[7],
            x_offset: le(8),
            y_offset: le(10),
            width: le(12),
            height: le(14),
            pixel_depth: b[16],
            image_descriptor: b[17],
        }
    }

    /// Read exactly [`HEADER_LEN`] bytes from `reader` and parse them.
    ///
    /// A stream shorter than the header is [`TgaError::Io`].
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, TgaError> {
        Self::read(&mut ByteReader::new(reader))
    }

    pub(crate) fn read<R: Read>(reader: &mut ByteReader<R>) -> Result<Self, TgaError> {
        let bytes = reader.read_fixed_bytes::<HEADER_LEN>()?;
        Ok(Self::parse(&bytes))
    }

    pub fn kind(&self) -> ImageType {
        ImageType::from_u8(self.image_type)
    }

    pub fn has_color_map(&self) -> bool {
        self.color_map_type != 0
    }

    pub fn alpha_bits(&self) -> u8 {
        self.image_descriptor & 0x0F
    }

    pub fn is_right_to_left(&self) -> bool {
        self.image_descriptor & 0x10 != 0
    }

    pub fn is_top_to_bottom(&self) -> bool {
        self.image_descriptor & 0x20 != 0
    }

    /// Pixel count and per-buffer byte sizes.
    ///
    /// Sizes are computed in `u64`; a size that does not fit `usize` (the
    /// 32-bit buffers of a 65535x65535 image on a 32-bit target) is
    /// [`TgaError::DimensionsTooLarge`].
    pub fn buffer_sizes(&self) -> Result<BufferSizes, TgaError> {
        let to_usize = |n: u64| {
            usize::try_from(n).map_err(|_| TgaError::DimensionsTooLarge {
                width: u32::from(self.width),
                height: u32::from(self.height),
            })
        };
        let pixels = u64::from(self.width) * u64::from(self.height);
        Ok(BufferSizes {
            pixel_count: to_usize(pixels)?,
            size8: to_usize(pixels)?,
            size24: to_usize(pixels * 3)?,
            size32: to_usize(pixels * 4)?,
        })
    }
}

//! # zentga
//!
//! Truevision TGA (Targa) image decoder.
//!
//! Every decode yields up to three synchronized buffers over the same
//! pixels, in the order they appear in the stream (no row flipping):
//!
//! - **indexed**: 1 byte per pixel, colormap indices (color-mapped images only)
//! - **rgb24**: 3 bytes per pixel, R G B
//! - **argb32**: 4 bytes per pixel, A R G B (alpha 255 when the source has none)
//!
//! ## Supported Formats
//!
//! | Image type | Pixel depth | Encoding |
//! |---|---|---|
//! | 1 (color-mapped) | 8 | raw |
//! | 2 (truecolor) | 24, 32 | raw |
//! | 9 (RLE) | 8 (indexed), 24, 32 | run-length |
//!
//! The TGA 2.0 footer is detected when present; extension and developer
//! areas are located but not parsed.
//!
//! ## Non-Goals
//!
//! - Encoding TGA files
//! - Monochrome (types 3, 11) and 15/16-bit images
//! - Color correction tables and postage-stamp images
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{decode, TgaDecoder};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let header = zentga::probe(data)?;
//! println!("{}x{} type {}", header.width, header.height, header.image_type);
//!
//! let image = decode(data)?;
//! let rgb = image.rgb24_pixels();
//! # let _ = rgb;
//!
//! // Or from a file, with limits
//! let image = TgaDecoder::open("image.tga")?
//!     .with_limits(zentga::Limits {
//!         max_pixels: Some(4096 * 4096),
//!         ..Default::default()
//!     })
//!     .load()?;
//! # let _ = image;
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod limits;
mod pixel;
mod tga;

// Re-exports
pub use decode::{TgaDecoder, TgaImage, decode, decode_file, decode_with_limits, probe};
pub use error::TgaError;
pub use limits::Limits;
pub use pixel::{Argb, Bgr, Bgra, Rgb};
pub use tga::colormap::{ColorTable, MAX_COLORMAP_ENTRIES};
pub use tga::footer::{FOOTER_LEN, TGA_SIGNATURE, TgaFooter, TgaVersion};
pub use tga::header::{BufferSizes, HEADER_LEN, ImageType, TgaHeader};
pub use tga::pixels::{DecodeStrategy, PixelBuffers};
pub use tga::rle::{RlePacket, Run};

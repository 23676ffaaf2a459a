use crate::error::TgaError;
use crate::tga::header::TgaHeader;
use crate::tga::pixels::DecodeStrategy;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes across all output buffers the decode will produce.
    pub max_memory_bytes: Option<u64>,
}

fn exceeded(what: &str, value: u64, max: Option<u64>) -> Result<(), TgaError> {
    match max {
        Some(max) if value > max => Err(TgaError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check a parsed header and its decode strategy before any pixel
    /// buffer is allocated.
    pub(crate) fn check(
        &self,
        header: &TgaHeader,
        strategy: DecodeStrategy,
    ) -> Result<(), TgaError> {
        let width = u64::from(header.width);
        let height = u64::from(header.height);
        let pixels = width * height;
        exceeded("width", width, self.max_width)?;
        exceeded("height", height, self.max_height)?;
        exceeded("pixel count", pixels, self.max_pixels)?;
        let out_bytes = pixels * strategy.output_bytes_per_pixel() as u64;
        exceeded("output bytes", out_bytes, self.max_memory_bytes)
    }
}

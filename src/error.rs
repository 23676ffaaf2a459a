use alloc::string::String;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// The stream could not be opened, or a fixed-size field was cut short.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image type {image_type} with pixel depth {pixel_depth}")]
    UnsupportedFormat { image_type: u8, pixel_depth: u8 },

    /// The pixel stream ended before every declared pixel was produced.
    #[error("pixel data truncated: decoded {decoded} of {expected} pixels")]
    TruncatedData { decoded: usize, expected: usize },

    #[error("colormap index {index} out of range for {len} entries")]
    IndexOutOfRange { index: u8, len: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl TgaError {
    /// Rewrites an end-of-stream I/O error hit mid-decode as [`TgaError::TruncatedData`].
    pub(crate) fn truncated(err: std::io::Error, decoded: usize, expected: usize) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            TgaError::TruncatedData { decoded, expected }
        } else {
            TgaError::Io(err)
        }
    }
}

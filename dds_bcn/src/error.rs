use thiserror::Error;

use crate::FormatCode;

/// Errors that prevent decoding any part of a surface.
///
/// Corrupted blocks are not errors.
/// They decode to a fill color and decoding continues with the next block.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("decoding {code} is not supported")]
    UnsupportedFormat { code: FormatCode },

    #[error("surface dimensions {width} x {height} contain no pixels")]
    ZeroSizedSurface { width: u32, height: u32 },

    #[error("surface pixel count {width} x {height} would overflow")]
    PixelCountWouldOverflow { width: u32, height: u32 },

    #[error("{mipmaps} mipmaps exceeds the maximum expected mipmap count of {max_mipmaps}")]
    UnexpectedMipmapCount { mipmaps: u32, max_mipmaps: u32 },

    #[error("failed to allocate {size} bytes for the decoded surface")]
    AllocationFailed { size: usize },

    #[error("expected surface to have at least {expected} bytes but found {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    #[error("error reading compressed blocks")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "ddsfile")]
    #[error("the image format of the surface can not be determined")]
    UnrecognizedFormat,
}

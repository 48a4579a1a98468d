//! # dds_bcn
//! dds_bcn decodes block compressed surfaces and all of their mipmaps
//! from a stream of BCn blocks.
//!
//! The container header is parsed elsewhere. The caller describes the surface with a
//! [SurfaceGeometry] and passes any [std::io::Read] positioned at the first block.
//! Enable the `ddsfile` feature to build the geometry from a DDS file instead.
//!
//! Block level decoding is handled by [bcn_block].
//! Each format decodes to the channel layout written by its block decoder.
//! See [FormatDescriptor] for the per format layouts.
//!
//! ```rust no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dds_bcn::{decode_surface, DecodeOptions, FormatCode, SurfaceGeometry};
//!
//! let geometry = SurfaceGeometry {
//!     width: 256,
//!     height: 256,
//!     mip_count: 9,
//!     format: FormatCode::four_cc(b"DXT5"),
//! };
//! let reader = std::io::BufReader::new(std::fs::File::open("blocks.bin")?);
//! let image = decode_surface(reader, &geometry, &DecodeOptions::default())?;
//! let base_level = image.get(0).unwrap();
//! # Ok(())
//! # }
//! ```
pub use bcn_block;

mod decode;
pub use decode::{decode_surface, DecodeOptions, DecodedImage, SurfaceGeometry};

mod error;
pub use error::DecodeError;

mod format;
pub use format::{BcnFormat, ChannelLayout, FormatCode, FormatDescriptor};

mod mip;
pub use mip::{compressed_len, mip_levels, MipLevel};

#[cfg(feature = "ddsfile")]
mod dds;
#[cfg(feature = "ddsfile")]
pub use dds::*;

/// The number of mipmaps for a surface whose largest dimension is `max_dimension`
/// including the base level.
pub fn max_mipmap_count(max_dimension: u32) -> u32 {
    // log2(x) + 1
    u32::BITS - max_dimension.leading_zeros()
}

/// The dimension of mip level `mipmap` for a base dimension of `base_dimension`.
///
/// Dimensions are halved for each level but never drop below 1.
pub fn mip_dimension(base_dimension: u32, mipmap: u32) -> u32 {
    base_dimension.checked_shr(mipmap).unwrap_or(0).max(1)
}

fn div_round_up(x: usize, d: usize) -> usize {
    x / d + usize::from(x % d != 0)
}

/// The size in bytes of `width` x `height` pixels stored in 4x4 blocks.
///
/// Returns [None] if the size would overflow.
fn mip_size(width: usize, height: usize, block_size_in_bytes: usize) -> Option<usize> {
    div_round_up(width, bcn_block::BLOCK_WIDTH)
        .checked_mul(div_round_up(height, bcn_block::BLOCK_HEIGHT))
        .and_then(|blocks| blocks.checked_mul(block_size_in_bytes))
}

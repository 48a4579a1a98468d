use bcn_block::{BLOCK_HEIGHT, BLOCK_WIDTH};

use crate::{div_round_up, max_mipmap_count, mip_dimension, mip_size, BcnFormat, DecodeError};

/// The location and dimensions of a single decoded mip level.
///
/// Decoded levels are padded to whole blocks,
/// so `stride` covers `blocks_x * 4` pixels even if `width` is not a multiple of 4.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MipLevel {
    /// The width of the level in pixels.
    pub width: u32,
    /// The height of the level in pixels.
    pub height: u32,
    /// The number of blocks in each row.
    pub blocks_x: usize,
    /// The number of block rows.
    pub blocks_y: usize,
    /// The number of bytes between decoded pixel rows.
    pub stride: usize,
    /// The start of this level in the decoded buffer.
    pub offset: usize,
    /// The size of this level in the decoded buffer.
    pub len: usize,
    /// The size of the compressed blocks for this level.
    pub compressed_len: usize,
}

/// Calculates the layout of every mip level for a surface in `format`.
///
/// A `mip_count` of 0 is treated as a surface with only the base level.
pub fn mip_levels(
    width: u32,
    height: u32,
    mip_count: u32,
    format: BcnFormat,
) -> Result<Vec<MipLevel>, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroSizedSurface { width, height });
    }

    let max_mipmaps = max_mipmap_count(width.max(height));
    if mip_count > max_mipmaps {
        return Err(DecodeError::UnexpectedMipmapCount {
            mipmaps: mip_count,
            max_mipmaps,
        });
    }

    let descriptor = format.descriptor();
    let overflow = || DecodeError::PixelCountWouldOverflow { width, height };

    let mut levels = Vec::new();
    let mut offset = 0usize;
    for mipmap in 0..mip_count.max(1) {
        let mip_width = mip_dimension(width, mipmap);
        let mip_height = mip_dimension(height, mipmap);

        let blocks_x = div_round_up(mip_width as usize, BLOCK_WIDTH);
        let blocks_y = div_round_up(mip_height as usize, BLOCK_HEIGHT);

        let stride = blocks_x
            .checked_mul(BLOCK_WIDTH * descriptor.pixel_size_in_bytes)
            .ok_or_else(overflow)?;
        let len = stride
            .checked_mul(BLOCK_HEIGHT)
            .and_then(|row_bytes| row_bytes.checked_mul(blocks_y))
            .ok_or_else(overflow)?;
        let compressed_len = mip_size(
            mip_width as usize,
            mip_height as usize,
            descriptor.block_size_in_bytes,
        )
        .ok_or_else(overflow)?;

        levels.push(MipLevel {
            width: mip_width,
            height: mip_height,
            blocks_x,
            blocks_y,
            stride,
            offset,
            len,
            compressed_len,
        });

        offset = offset.checked_add(len).ok_or_else(overflow)?;
    }

    Ok(levels)
}

/// The combined size of the compressed blocks for all `levels`.
pub fn compressed_len(levels: &[MipLevel]) -> usize {
    // Compressed blocks are never larger than their decoded pixels.
    levels.iter().map(|l| l.compressed_len).sum()
}

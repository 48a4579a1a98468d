use std::io::{ErrorKind, Read};

use bcn_block::BLOCK_HEIGHT;
use tracing::{debug, warn};

use crate::{
    compressed_len, mip_levels, BcnFormat, ChannelLayout, DecodeError, FormatCode, MipLevel,
};

/// The dimensions and format of a compressed surface read from a container header.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SurfaceGeometry {
    /// The width of the base level in pixels.
    pub width: u32,
    /// The height of the base level in pixels.
    pub height: u32,
    /// The number of mipmaps including the base level.
    /// A value of `0` is treated as `1`.
    pub mip_count: u32,
    /// The format code of the compressed blocks.
    pub format: FormatCode,
}

/// Settings for [decode_surface].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DecodeOptions {
    /// The number of block rows to read from the stream at once.
    /// Values less than `1` are treated as `1`.
    pub read_ahead_rows: u32,
    /// Return the partially decoded surface instead of an error
    /// if the stream ends before the last block.
    /// Blocks that were never read are left as zeros.
    pub allow_truncated: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            read_ahead_rows: 4,
            allow_truncated: true,
        }
    }
}

/// The decoded pixels for every mip level of a surface.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DecodedImage {
    pub format: BcnFormat,
    /// The channels of each pixel in [data](#structfield.data).
    pub layout: ChannelLayout,
    /// The location of each level in [data](#structfield.data) starting from the base level.
    pub levels: Vec<MipLevel>,
    /// The decoded levels stored consecutively without additional padding between levels.
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// The decoded bytes for level `mipmap` or [None] if the level does not exist.
    ///
    /// Rows are [MipLevel::stride] bytes apart.
    pub fn get(&self, mipmap: u32) -> Option<&[u8]> {
        let level = self.levels.get(mipmap as usize)?;
        self.data.get(level.offset..level.offset + level.len)
    }
}

/// Decodes all mip levels of a surface from the compressed blocks in `reader`.
///
/// The `reader` should be positioned at the first block of the base level.
/// Only the bytes for the blocks of each level are read from `reader`.
///
/// Unsupported formats and invalid dimensions are rejected before reading any data.
/// Corrupted blocks do not return an error and decode to the fill color for the format.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(
        width = geometry.width,
        height = geometry.height,
        mip_count = geometry.mip_count,
        format = %geometry.format
    )
)]
pub fn decode_surface<R: Read>(
    reader: R,
    geometry: &SurfaceGeometry,
    options: &DecodeOptions,
) -> Result<DecodedImage, DecodeError> {
    let format = BcnFormat::try_from(geometry.format)?;
    let descriptor = format.descriptor();

    let levels = mip_levels(
        geometry.width,
        geometry.height,
        geometry.mip_count,
        format,
    )?;
    let expected = compressed_len(&levels);
    let decoded_len = levels.last().map(|l| l.offset + l.len).unwrap_or_default();

    // Dimensions come from untrusted headers, so allocation failures are errors.
    let mut data = Vec::new();
    data.try_reserve_exact(decoded_len)
        .map_err(|_| DecodeError::AllocationFailed { size: decoded_len })?;
    data.resize(decoded_len, 0u8);

    let mut reader = BlockReader::new(reader);
    let read_ahead_rows = options.read_ahead_rows.max(1) as usize;
    let block_size = descriptor.block_size_in_bytes;
    let mut window = Vec::new();

    'levels: for (mipmap, level) in levels.iter().enumerate() {
        debug!(
            mipmap,
            width = level.width,
            height = level.height,
            "decoding mipmap"
        );

        let row_size = level.blocks_x * block_size;
        let decoded_row_size = level.stride * BLOCK_HEIGHT;
        let level_data = &mut data[level.offset..level.offset + level.len];

        let mut block_y = 0;
        while block_y < level.blocks_y {
            let rows = read_ahead_rows.min(level.blocks_y - block_y);
            window.resize(rows * row_size, 0);

            let filled = reader.fill(&mut window)?;
            let whole_blocks = filled / block_size;

            // A partial row at the end of a truncated stream still has whole blocks to decode.
            let start = block_y * decoded_row_size;
            let end = start + rows * decoded_row_size;
            decode_rows(
                format,
                &window[..whole_blocks * block_size],
                &mut level_data[start..end],
                row_size,
                level.stride,
            );

            if filled < window.len() {
                let actual = reader.consumed;
                if !options.allow_truncated || actual < block_size {
                    return Err(DecodeError::NotEnoughData { expected, actual });
                }

                warn!(
                    expected,
                    actual, "compressed data ended early, remaining blocks are left as zeros"
                );
                break 'levels;
            }

            block_y += rows;
        }
    }

    Ok(DecodedImage {
        format,
        layout: descriptor.layout,
        levels,
        data,
    })
}

// Each block row is independent, so rows can decode in parallel.
#[cfg(feature = "rayon")]
fn decode_rows(
    format: BcnFormat,
    blocks: &[u8],
    decoded: &mut [u8],
    row_size: usize,
    stride: usize,
) {
    use rayon::prelude::*;

    blocks
        .par_chunks(row_size)
        .zip(decoded.par_chunks_mut(stride * BLOCK_HEIGHT))
        .for_each(|(row, decoded_row)| format.decode_block_row(row, decoded_row, stride));
}

#[cfg(not(feature = "rayon"))]
fn decode_rows(
    format: BcnFormat,
    blocks: &[u8],
    decoded: &mut [u8],
    row_size: usize,
    stride: usize,
) {
    for (row, decoded_row) in blocks
        .chunks(row_size)
        .zip(decoded.chunks_mut(stride * BLOCK_HEIGHT))
    {
        format.decode_block_row(row, decoded_row, stride);
    }
}

/// Reads compressed blocks while tracking the total bytes read.
struct BlockReader<R> {
    reader: R,
    consumed: usize,
}

impl<R: Read> BlockReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    /// Reads until `buffer` is full or the stream ends and returns the number of bytes read.
    fn fill(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buffer.len() {
            match self.reader.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.consumed += filled;
        Ok(filled)
    }
}

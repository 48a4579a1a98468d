#![no_std]
//! Safe, no_std, pure Rust decoders for single BCn blocks.
//!
//! Each function decodes one compressed block into a 4x4 tile of the destination.
//! Rows of the tile start `destination_pitch` elements apart,
//! so blocks can be written directly into a larger image without a temporary buffer.
//!
//! | Function | Block Bytes | Output Per Texel |
//! | --- | --- | --- |
//! | [bc1] | 8 | BGR u8 |
//! | [bc2], [bc3] | 16 | BGRA u8 |
//! | [bc4] | 8 | R u8 |
//! | [bc5] | 16 | BGR u8 with B = 0 |
//! | [bc6h] | 16 | BGRA u8 with A = 255 |
//! | [bc6h_half], [bc6h_float] | 16 | RGB [f16] or f32 |
//! | [bc7] | 16 | BGRA u8 |
//!
//! Malformed blocks never panic.
//! BC6H and BC7 blocks with reserved modes, out of range fields, or too many bits
//! decode to a fixed fill color so the remaining blocks of a surface still decode.
mod bc6h;
mod bc7;
mod bitstream;
mod color;
mod gradient;
mod tables;

pub use half::f16;

/// The width in texels of every BCn block.
pub const BLOCK_WIDTH: usize = 4;
/// The height in texels of every BCn block.
pub const BLOCK_HEIGHT: usize = 4;

/// Block-local corruption that replaces the tile with a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InvalidBlock {
    /// A read of `num_bits` starting at `position` would pass the end of the block.
    EndOfBlock { position: u32, num_bits: u32 },
    /// A mode code reserved for future use.
    ReservedMode(u8),
    /// A mode code that does not select any mode.
    InvalidMode(u8),
    /// A set header bit that does not belong to any field.
    InvalidField { bit: usize },
    /// An index for `pixel` that selects a weight past the end of the weight table.
    InvalidIndex { pixel: usize, index: u8 },
}

/// Decodes a BC1 block to BGR texels with 3 bytes per texel.
///
/// Blocks using the 3 color mode decode index 3 to black.
/// # Panics
/// Panics if `decompressed_block` can't fit 4 rows of 4 texels spaced `destination_pitch` bytes apart.
pub fn bc1(compressed_block: &[u8; 8], decompressed_block: &mut [u8], destination_pitch: usize) {
    color::color_block(compressed_block, decompressed_block, destination_pitch, 3, false);
}

/// Decodes a BC2 block with explicit 4-bit alpha to BGRA texels with 4 bytes per texel.
pub fn bc2(compressed_block: &[u8; 16], decompressed_block: &mut [u8], destination_pitch: usize) {
    color::color_block(
        &compressed_block[8..],
        decompressed_block,
        destination_pitch,
        4,
        true,
    );
    color::sharp_alpha_block(compressed_block, decompressed_block, destination_pitch);
}

/// Decodes a BC3 block with interpolated alpha to BGRA texels with 4 bytes per texel.
pub fn bc3(compressed_block: &[u8; 16], decompressed_block: &mut [u8], destination_pitch: usize) {
    color::color_block(
        &compressed_block[8..],
        decompressed_block,
        destination_pitch,
        4,
        true,
    );
    gradient::gradient_block(
        compressed_block,
        &mut decompressed_block[3..],
        destination_pitch,
        4,
        false,
    );
}

/// Decodes a BC4 block to a single channel with 1 byte per texel.
///
/// Signed blocks are remapped from `-127..=127` to `0..=255`.
pub fn bc4(
    compressed_block: &[u8; 8],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    is_signed: bool,
) {
    gradient::gradient_block(
        compressed_block,
        decompressed_block,
        destination_pitch,
        1,
        is_signed,
    );
}

/// Decodes a BC5 block to BGR texels with 3 bytes per texel.
///
/// The first channel is written to red, the second channel to green, and blue is always 0.
/// Signed blocks are remapped from `-127..=127` to `0..=255`.
pub fn bc5(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    is_signed: bool,
) {
    gradient::gradient_block(
        compressed_block,
        &mut decompressed_block[2..],
        destination_pitch,
        3,
        is_signed,
    );
    gradient::gradient_block(
        &compressed_block[8..],
        &mut decompressed_block[1..],
        destination_pitch,
        3,
        is_signed,
    );
    for row in 0..BLOCK_HEIGHT {
        for column in 0..BLOCK_WIDTH {
            decompressed_block[row * destination_pitch + column * 3] = 0;
        }
    }
}

/// Decodes a BC6H block to BGRA texels with 4 bytes per texel.
///
/// Colors are clamped to `0.0..=1.0` before converting to u8.
/// Invalid blocks decode to opaque black.
pub fn bc6h(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    is_signed: bool,
) {
    bc6h::bc6h_unorm(
        compressed_block,
        decompressed_block,
        destination_pitch,
        is_signed,
    );
}

/// Decodes a BC6H block to RGB half floats with 3 elements per texel.
///
/// The `destination_pitch` is measured in elements rather than bytes.
/// Invalid blocks decode to zero.
pub fn bc6h_half(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [f16],
    destination_pitch: usize,
    is_signed: bool,
) {
    bc6h::bc6h_half(
        compressed_block,
        decompressed_block,
        destination_pitch,
        is_signed,
    );
}

/// Decodes a BC6H block to RGB floats with 3 elements per texel.
///
/// The `destination_pitch` is measured in elements rather than bytes.
/// Invalid blocks decode to zero.
pub fn bc6h_float(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [f32],
    destination_pitch: usize,
    is_signed: bool,
) {
    bc6h::bc6h_float(
        compressed_block,
        decompressed_block,
        destination_pitch,
        is_signed,
    );
}

/// Decodes a BC7 block to BGRA texels with 4 bytes per texel.
///
/// The reserved mode 8 decodes to transparent black.
/// Blocks with fields that don't fit in 128 bits decode to opaque black.
pub fn bc7(compressed_block: &[u8; 16], decompressed_block: &mut [u8], destination_pitch: usize) {
    bc7::bc7(compressed_block, decompressed_block, destination_pitch);
}

/// Writes `texel` to every texel of the 4x4 tile.
fn fill_tile<T: Copy, const N: usize>(
    decompressed_block: &mut [T],
    destination_pitch: usize,
    texel: [T; N],
) {
    for row in 0..BLOCK_HEIGHT {
        for column in 0..BLOCK_WIDTH {
            let start = row * destination_pitch + column * N;
            decompressed_block[start..start + N].copy_from_slice(&texel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Decode a single block into a tightly packed 4x4 tile.
    fn tile<const N: usize>(decode: impl Fn(&mut [u8], usize)) -> [[u8; N]; 16] {
        let mut decompressed = [0u8; 64];
        decode(&mut decompressed, 4 * N);
        let mut texels = [[0u8; N]; 16];
        for (i, texel) in texels.iter_mut().enumerate() {
            texel.copy_from_slice(&decompressed[i * N..i * N + N]);
        }
        texels
    }

    #[test]
    fn bc1_red_block() {
        let block = [0x00, 0xF8, 0xE0, 0x07, 0x00, 0x00, 0x00, 0x00];
        let texels = tile::<3>(|d, pitch| bc1(&block, d, pitch));
        assert_eq!([[0, 0, 255]; 16], texels);
    }

    #[test]
    fn bc1_destination_pitch() {
        // Decode into the second block of an 8x4 image.
        let block = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut decompressed = [0u8; 8 * 4 * 3];
        bc1(&block, &mut decompressed[4 * 3..], 8 * 3);
        for row in decompressed.chunks_exact(8 * 3) {
            assert_eq!([0u8; 12], row[..12]);
            assert_eq!([255u8; 12], row[12..]);
        }
    }

    #[test]
    fn bc2_explicit_alpha() {
        let mut block = [0u8; 16];
        // Alpha nibbles 0 to 15 in texel order.
        block[..8].copy_from_slice(&[0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE]);
        // White color with all indices 0.
        block[8..12].copy_from_slice(&[0xFF, 0xFF, 0x00, 0x00]);
        let texels = tile::<4>(|d, pitch| bc2(&block, d, pitch));
        for (i, texel) in texels.iter().enumerate() {
            assert_eq!([255, 255, 255, i as u8 * 17], *texel);
        }
    }

    #[test]
    fn bc3_no_implied_black() {
        // color0 <= color1 still uses the 4 color ramp for BC3.
        let mut block = [0u8; 16];
        block[0] = 255;
        block[1] = 0;
        block[8..12].copy_from_slice(&[0x00, 0x00, 0xFF, 0xFF]);
        // Index 3 for every texel.
        block[12..16].fill(0xFF);
        let texels = tile::<4>(|d, pitch| bc3(&block, d, pitch));
        assert_eq!([[170, 170, 170, 255]; 16], texels);
    }

    #[test]
    fn bc4_unsigned() {
        let block = [200, 100, 0, 0, 0, 0, 0, 0];
        let mut decompressed = [0u8; 16];
        bc4(&block, &mut decompressed, 4, false);
        assert_eq!([200; 16], decompressed);
    }

    #[test]
    fn bc4_signed() {
        // -128 is treated as -127.
        let block = [0x80, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        let mut decompressed = [0u8; 16];
        bc4(&block, &mut decompressed, 4, true);
        assert_eq!([0; 16], decompressed);
    }

    #[test]
    fn bc5_red_green() {
        let mut block = [0u8; 16];
        block[0] = 10;
        block[8] = 20;
        let texels = tile::<3>(|d, pitch| bc5(&block, d, pitch, false));
        assert_eq!([[0, 20, 10]; 16], texels);
    }

    #[test]
    fn bc5_signed_blue_zero() {
        let mut block = [0u8; 16];
        block[0] = 127;
        block[8] = 0x81;
        let texels = tile::<3>(|d, pitch| bc5(&block, d, pitch, true));
        assert_eq!([[0, 0, 255]; 16], texels);
    }

    #[test]
    fn bc6h_reference_block() {
        let block = [
            0x40, 0xAF, 0xF6, 0x0B, 0xFD, 0x2E, 0xFF, 0xFF, 0x11, 0x71, 0x10, 0xA1, 0x21, 0xF2,
            0x33, 0x73,
        ];
        let texels = tile::<4>(|d, pitch| bc6h(&block, d, pitch, false));
        assert_eq!(
            [
                [255, 255, 23, 255],
                [255, 255, 23, 255],
                [255, 255, 23, 255],
                [255, 255, 27, 255],
                [255, 255, 23, 255],
                [255, 255, 23, 255],
                [255, 255, 25, 255],
                [255, 255, 27, 255],
            ],
            texels[..8]
        );

        let texels = tile::<4>(|d, pitch| bc6h(&block, d, pitch, true));
        assert_eq!([[0, 0, 255, 255]; 16], texels);
    }

    #[test]
    fn bc6h_float_matches_half() {
        let block = [
            0x40, 0xAF, 0xF6, 0x0B, 0xFD, 0x2E, 0xFF, 0xFF, 0x11, 0x71, 0x10, 0xA1, 0x21, 0xF2,
            0x33, 0x73,
        ];
        let mut halves = [f16::ZERO; 48];
        bc6h_half(&block, &mut halves, 12, true);
        let mut floats = [0.0f32; 48];
        bc6h_float(&block, &mut floats, 12, true);
        for (h, f) in halves.iter().zip(floats) {
            assert_eq!(h.to_f32(), f);
        }
    }

    #[test]
    fn bc6h_reserved_mode_opaque_black() {
        // Mode code 0x13 is reserved.
        let mut block = [0xFFu8; 16];
        block[0] = 0b1111_0011;
        let texels = tile::<4>(|d, pitch| bc6h(&block, d, pitch, false));
        assert_eq!([[0, 0, 0, 255]; 16], texels);

        let mut halves = [f16::ONE; 48];
        bc6h_half(&block, &mut halves, 12, false);
        assert_eq!([f16::ZERO; 48], halves);
    }

    #[test]
    fn bc7_reference_block() {
        let block = [
            0xC0, 0x8C, 0xEF, 0xA2, 0xBB, 0xDC, 0xFE, 0x7F, 0x6C, 0x55, 0x6A, 0x34, 0x4F, 0x00,
            0x5D, 0x00,
        ];
        let texels = tile::<4>(|d, pitch| bc7(&block, d, pitch));
        // BGRA
        assert_eq!([72, 74, 80, 254], texels[0]);
        assert_eq!([67, 69, 74, 254], texels[2]);
        assert_eq!([110, 116, 124, 254], texels[8]);
        assert_eq!([46, 46, 50, 254], texels[15]);
    }

    #[test]
    fn bc7_mode8_transparent_black() {
        let block = [0u8; 16];
        let texels = tile::<4>(|d, pitch| bc7(&block, d, pitch));
        assert_eq!([[0, 0, 0, 0]; 16], texels);
    }

    #[test]
    fn fill_tile_pitch() {
        let mut decompressed = [1u8; 6 * 4];
        fill_tile(&mut decompressed, 6, [7u8]);
        for row in decompressed.chunks_exact(6) {
            assert_eq!([7u8, 7, 7, 7, 1, 1], row);
        }
    }
}

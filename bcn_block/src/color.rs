//! The 5:6:5 color block shared by BC1, BC2, and BC3.
use crate::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// Expands a 5-bit channel to 8 bits by replicating the high bits.
pub(crate) fn expand5(value: u16) -> u8 {
    ((value << 3) | (value >> 2)) as u8
}

/// Expands a 6-bit channel to 8 bits by replicating the high bits.
pub(crate) fn expand6(value: u16) -> u8 {
    ((value << 2) | (value >> 4)) as u8
}

// BGR
fn expand565(color: u16) -> [u16; 3] {
    [
        expand5(color & 0x1F) as u16,
        expand6((color >> 5) & 0x3F) as u16,
        expand5((color >> 11) & 0x1F) as u16,
    ]
}

/// Computes the 4 BGR reference colors for an 8 byte color block.
pub(crate) fn palette(compressed_block: &[u8], only_opaque_mode: bool) -> [[u8; 3]; 4] {
    let c0 = u16::from_le_bytes([compressed_block[0], compressed_block[1]]);
    let c1 = u16::from_le_bytes([compressed_block[2], compressed_block[3]]);

    let color0 = expand565(c0);
    let color1 = expand565(c1);

    let mut ref_colors = [[0u8; 3]; 4];
    ref_colors[0] = color0.map(|c| c as u8);
    ref_colors[1] = color1.map(|c| c as u8);

    if c0 > c1 || only_opaque_mode {
        // Standard BC1 mode (also BC2 and BC3 color blocks use ONLY this mode)
        // color_2 = 2/3*color_0 + 1/3*color_1
        // color_3 = 1/3*color_0 + 2/3*color_1
        for c in 0..3 {
            ref_colors[2][c] = ((2 * color0[c] + color1[c] + 1) / 3) as u8;
            ref_colors[3][c] = ((color0[c] + 2 * color1[c] + 1) / 3) as u8;
        }
    } else {
        // Quite rare BC1A mode
        // color_2 = 1/2*color_0 + 1/2*color_1;
        // color_3 = 0;
        for c in 0..3 {
            ref_colors[2][c] = ((color0[c] + color1[c] + 1) >> 1) as u8;
        }
    }

    ref_colors
}

/// Writes the BGR channels of every texel `pixel_size` bytes apart.
pub(crate) fn color_block(
    compressed_block: &[u8],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    pixel_size: usize,
    only_opaque_mode: bool,
) {
    let ref_colors = palette(compressed_block, only_opaque_mode);

    let mut color_indices = u32::from_le_bytes([
        compressed_block[4],
        compressed_block[5],
        compressed_block[6],
        compressed_block[7],
    ]);

    for i in 0..BLOCK_HEIGHT {
        for j in 0..BLOCK_WIDTH {
            let index = (color_indices & 0x03) as usize;
            let start = i * destination_pitch + j * pixel_size;
            decompressed_block[start..start + 3].copy_from_slice(&ref_colors[index]);
            color_indices >>= 2;
        }
    }
}

/// Writes the explicit 4-bit alpha of BC2 to every fourth byte starting at 3.
pub(crate) fn sharp_alpha_block(
    compressed_block: &[u8],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
) {
    for i in 0..BLOCK_HEIGHT {
        let alpha = u16::from_le_bytes([compressed_block[i * 2], compressed_block[i * 2 + 1]]);
        for j in 0..BLOCK_WIDTH {
            let index = i * destination_pitch + j * 4 + 3;
            decompressed_block[index] = ((alpha >> (4 * j)) & 0x0F) as u8 * 17;
        }
    }
}

//! BC7 decoding to RGBA u8.
use crate::bitstream::Bitstream;
use crate::tables::{
    is_fix_up, partition_region, weights, BC7_MODES, WEIGHT_MAX, WEIGHT_ROUND, WEIGHT_SHIFT,
};
use crate::{fill_tile, InvalidBlock, BLOCK_HEIGHT, BLOCK_WIDTH};

/// The mode used for blocks without any set bits in the mode prefix.
const RESERVED_MODE: u8 = 8;

/// Reads the unary mode prefix. Returns 8 if none of the first 8 bits are set.
pub(crate) fn read_mode(bits: &mut Bitstream) -> u8 {
    let mut mode = 0;
    while mode < RESERVED_MODE && bits.read_bit() == 0 {
        mode += 1;
    }
    mode
}

/// Decodes the RGBA colors for all 16 texels in row-major order.
pub(crate) fn decode(compressed_block: &[u8; 16]) -> Result<[[u8; 4]; 16], InvalidBlock> {
    let mut bits = Bitstream::new(compressed_block);

    let mode = read_mode(&mut bits);
    if mode >= RESERVED_MODE {
        return Err(InvalidBlock::ReservedMode(mode));
    }
    let info = &BC7_MODES[mode as usize];
    let partitions = info.partitions;

    let shape = bits.checked_read_bits(info.partition_bits as u32)? as usize;
    let rotation = bits.checked_read_bits(info.rotation_bits as u32)?;
    let index_mode = bits.checked_read_bits(info.index_mode_bits as u32)?;

    // Endpoints are stored as all red values, then all green values, and so on.
    let endpoint_count = (partitions as usize + 1) * 2;
    let mut endpoints = [[0u8; 4]; 6];
    for c in 0..4 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[c] = bits.checked_read_bits(info.precision[c] as u32)?;
        }
    }

    if info.p_bits > 0 {
        let mut p_bits = [0u8; 6];
        for p in p_bits.iter_mut().take(info.p_bits as usize) {
            *p = bits.checked_read_bits(1)?;
        }
        for (i, endpoint) in endpoints.iter_mut().take(endpoint_count).enumerate() {
            // Modes have either one P-bit per endpoint or one P-bit per region.
            let p = p_bits[i * info.p_bits as usize / endpoint_count];
            for c in 0..4 {
                if info.precision[c] != info.precision_with_p[c] {
                    endpoint[c] = (endpoint[c] << 1) | p;
                }
            }
        }
    }

    for endpoint in endpoints.iter_mut().take(endpoint_count) {
        for c in 0..4 {
            endpoint[c] = unquantize(endpoint[c], info.precision_with_p[c]);
        }
    }

    let mut color_indices = [0u8; 16];
    for (i, index) in color_indices.iter_mut().enumerate() {
        let num_bits = if is_fix_up(partitions, shape, i) {
            info.index_precision - 1
        } else {
            info.index_precision
        };
        *index = bits.checked_read_bits(num_bits as u32)?;
    }

    let mut alpha_indices = [0u8; 16];
    if info.index_precision2 > 0 {
        for (i, index) in alpha_indices.iter_mut().enumerate() {
            // Modes with separate alpha have a single region anchored at the first texel.
            let num_bits = if i == 0 {
                info.index_precision2 - 1
            } else {
                info.index_precision2
            };
            *index = bits.checked_read_bits(num_bits as u32)?;
        }
    }

    let mut texels = [[0u8; 4]; 16];
    for (i, texel) in texels.iter_mut().enumerate() {
        let region = partition_region(partitions, shape, i);
        let e0 = endpoints[region * 2];
        let e1 = endpoints[region * 2 + 1];

        let (color_weight, alpha_weight) = if info.index_precision2 == 0 {
            let w = weights(info.index_precision)[color_indices[i] as usize];
            (w, w)
        } else {
            let w1 = weights(info.index_precision)[color_indices[i] as usize];
            let w2 = weights(info.index_precision2)[alpha_indices[i] as usize];
            // The index mode bit swaps which set of indices applies to color.
            if index_mode == 0 {
                (w1, w2)
            } else {
                (w2, w1)
            }
        };

        for c in 0..3 {
            texel[c] = interpolate(e0[c], e1[c], color_weight);
        }
        texel[3] = interpolate(e0[3], e1[3], alpha_weight);

        match rotation {
            1 => texel.swap(0, 3),
            2 => texel.swap(1, 3),
            3 => texel.swap(2, 3),
            _ => (),
        }
    }

    Ok(texels)
}

/// Expands a channel with `precision` bits including any P-bit to 8 bits.
fn unquantize(value: u8, precision: u8) -> u8 {
    match precision {
        // Channels without any bits are always opaque.
        0 => 255,
        8 => value,
        p => {
            let value = value << (8 - p);
            value | (value >> p)
        }
    }
}

fn interpolate(a: u8, b: u8, weight: u32) -> u8 {
    ((a as u32 * (WEIGHT_MAX - weight) + b as u32 * weight + WEIGHT_ROUND) >> WEIGHT_SHIFT) as u8
}

pub(crate) fn bc7(compressed_block: &[u8; 16], decompressed_block: &mut [u8], destination_pitch: usize) {
    match decode(compressed_block) {
        Ok(texels) => {
            for i in 0..BLOCK_HEIGHT {
                for j in 0..BLOCK_WIDTH {
                    let [r, g, b, a] = texels[i * BLOCK_WIDTH + j];
                    let start = i * destination_pitch + j * 4;
                    decompressed_block[start..start + 4].copy_from_slice(&[b, g, r, a]);
                }
            }
        }
        Err(InvalidBlock::ReservedMode(_)) => {
            tracing::debug!("BC7 mode 8 is reserved");
            fill_tile(decompressed_block, destination_pitch, [0, 0, 0, 0]);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "invalid BC7 block");
            fill_tile(decompressed_block, destination_pitch, [0, 0, 0, 255]);
        }
    }
}

//! BC6H decoding to RGB half floats.
//!
//! Every mode stores 2 or 4 RGB endpoints with 6 to 16 bits per channel
//! followed by 3-bit or 4-bit indices.
//! Transformed modes store every endpoint other than the first as a delta from the first endpoint.
use half::f16;

use crate::bitstream::Bitstream;
use crate::tables::{
    is_fix_up, partition_region, weights, Bc6hCode, Field, BC6H_CODES, BC6H_FIELDS,
    BC6H_MODES, WEIGHT_MAX, WEIGHT_ROUND, WEIGHT_SHIFT,
};
use crate::{fill_tile, InvalidBlock, BLOCK_HEIGHT, BLOCK_WIDTH};

const HEADER_BITS: usize = 82;
const HEADER_BITS_NO_PARTITIONS: usize = 65;

/// Reads the 2 or 5 bit mode code.
pub(crate) fn read_mode(bits: &mut Bitstream) -> u8 {
    let mode = bits.read_bits(2);
    if mode < 2 {
        mode
    } else {
        (bits.read_bits(3) << 2) | mode
    }
}

/// Decodes the RGB half float bits for all 16 texels in row-major order.
pub(crate) fn decode(
    compressed_block: &[u8; 16],
    is_signed: bool,
) -> Result<[[u16; 3]; 16], InvalidBlock> {
    let mut bits = Bitstream::new(compressed_block);

    let code = read_mode(&mut bits);
    let mode_index = match BC6H_CODES[code as usize] {
        Bc6hCode::Mode(i) => i as usize,
        Bc6hCode::Reserved => return Err(InvalidBlock::ReservedMode(code)),
        Bc6hCode::Invalid => return Err(InvalidBlock::InvalidMode(code)),
    };
    let mode = &BC6H_MODES[mode_index];
    let fields = &BC6H_FIELDS[mode_index];
    let partitions = mode.partitions;
    let precision = &mode.precision;

    let header_bits = if partitions > 0 {
        HEADER_BITS
    } else {
        HEADER_BITS_NO_PARTITIONS
    };

    // [region][endpoint][channel]
    let mut endpoints = [[[0i32; 3]; 2]; 2];
    let mut shape = 0usize;

    // Mode bits are already consumed and marked as M in every layout.
    for bit in bits.position() as usize..header_bits {
        if bits.checked_read_bits(1)? == 0 {
            continue;
        }
        let (field, shift) = fields[bit];
        match field.endpoint() {
            Some((region, endpoint, channel)) => {
                endpoints[region][endpoint][channel] |= 1 << shift;
            }
            None if field == Field::D => shape |= 1 << shift,
            None => return Err(InvalidBlock::InvalidField { bit }),
        }
    }

    if is_signed {
        for c in 0..3 {
            endpoints[0][0][c] = sign_extend(endpoints[0][0][c], precision[0][0][c]);
        }
    }

    if is_signed || mode.transformed {
        for p in 0..=partitions as usize {
            for c in 0..3 {
                if p != 0 {
                    endpoints[p][0][c] = sign_extend(endpoints[p][0][c], precision[p][0][c]);
                }
                endpoints[p][1][c] = sign_extend(endpoints[p][1][c], precision[p][1][c]);
            }
        }
    }

    if mode.transformed {
        inverse_transform(&mut endpoints, precision[0][0], is_signed);
    }

    let index_precision = mode.index_precision as u32;
    let weights = weights(mode.index_precision);
    let index_count = if partitions > 0 { 8 } else { 16 };

    let mut texels = [[0u16; 3]; 16];
    for (i, texel) in texels.iter_mut().enumerate() {
        let num_bits = if is_fix_up(partitions, shape, i) {
            index_precision - 1
        } else {
            index_precision
        };
        let index = bits.checked_read_bits(num_bits)?;
        if index >= index_count {
            return Err(InvalidBlock::InvalidIndex { pixel: i, index });
        }

        let region = partition_region(partitions, shape, i);
        let weight = weights[index as usize] as i32;
        for c in 0..3 {
            let endpoint_bits = precision[0][0][c];
            let a = unquantize(endpoints[region][0][c], endpoint_bits, is_signed);
            let b = unquantize(endpoints[region][1][c], endpoint_bits, is_signed);
            let value = (a * (WEIGHT_MAX as i32 - weight) + b * weight + WEIGHT_ROUND as i32)
                >> WEIGHT_SHIFT;
            texel[c] = finish_unquantize(value, is_signed);
        }
    }

    Ok(texels)
}

fn sign_extend(value: i32, bits: u8) -> i32 {
    if bits == 0 {
        return value;
    }
    let sign = 1 << (bits - 1);
    if value & sign != 0 {
        value | !((1 << bits) - 1)
    } else {
        value
    }
}

/// Converts the deltas to absolute values relative to the first endpoint.
fn inverse_transform(endpoints: &mut [[[i32; 3]; 2]; 2], precision: [u8; 3], is_signed: bool) {
    for c in 0..3 {
        let wrap_mask = (1 << precision[c]) - 1;
        let base = endpoints[0][0][c];
        for (region, endpoint) in [(0, 1), (1, 0), (1, 1)] {
            let value = (endpoints[region][endpoint][c] + base) & wrap_mask;
            endpoints[region][endpoint][c] = if is_signed {
                sign_extend(value, precision[c])
            } else {
                value
            };
        }
    }
}

/// Scales an endpoint with `bits` of precision to the full 16-bit or signed 15-bit range.
fn unquantize(value: i32, bits: u8, is_signed: bool) -> i32 {
    if is_signed {
        unquantize_signed(value, bits as i32)
    } else {
        unquantize_unsigned(value, bits as i32)
    }
}

fn unquantize_signed(value: i32, bits: i32) -> i32 {
    if bits >= 16 {
        return value;
    }

    let magnitude = value.abs();
    let unquantized = if magnitude == 0 {
        0
    } else if magnitude >= (1 << (bits - 1)) - 1 {
        0x7FFF
    } else {
        ((magnitude << 15) + 0x4000) >> (bits - 1)
    };

    if value < 0 {
        -unquantized
    } else {
        unquantized
    }
}

fn unquantize_unsigned(value: i32, bits: i32) -> i32 {
    if bits >= 15 {
        value
    } else if value == 0 {
        0
    } else if value == (1 << bits) - 1 {
        0xFFFF
    } else {
        ((value << 16) + 0x8000) >> bits
    }
}

/// Scales the interpolated value to the largest finite half float and returns its bits.
fn finish_unquantize(value: i32, is_signed: bool) -> u16 {
    if is_signed {
        if value < 0 {
            // Sign and magnitude rather than two's complement.
            // Magnitudes that scale to 0 are written as positive zero.
            let magnitude = (((-value) * 31) >> 5) as u16;
            if magnitude == 0 {
                0
            } else {
                0x8000 | magnitude
            }
        } else {
            ((value * 31) >> 5) as u16
        }
    } else {
        ((value * 31) >> 6) as u16
    }
}

fn decode_or_log(compressed_block: &[u8; 16], is_signed: bool) -> Option<[[u16; 3]; 16]> {
    match decode(compressed_block, is_signed) {
        Ok(texels) => Some(texels),
        Err(InvalidBlock::ReservedMode(code)) => {
            tracing::warn!("BC6H mode {code:#04x} is reserved");
            None
        }
        Err(e) => {
            tracing::debug!(error = ?e, "invalid BC6H block");
            None
        }
    }
}

pub(crate) fn bc6h_half(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [f16],
    destination_pitch: usize,
    is_signed: bool,
) {
    match decode_or_log(compressed_block, is_signed) {
        Some(texels) => write_texels(decompressed_block, destination_pitch, &texels, f16::from_bits),
        None => fill_tile(decompressed_block, destination_pitch, [f16::ZERO; 3]),
    }
}

pub(crate) fn bc6h_float(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [f32],
    destination_pitch: usize,
    is_signed: bool,
) {
    match decode_or_log(compressed_block, is_signed) {
        Some(texels) => write_texels(decompressed_block, destination_pitch, &texels, |h| {
            f16::from_bits(h).to_f32()
        }),
        None => fill_tile(decompressed_block, destination_pitch, [0.0; 3]),
    }
}

pub(crate) fn bc6h_unorm(
    compressed_block: &[u8; 16],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    is_signed: bool,
) {
    match decode_or_log(compressed_block, is_signed) {
        Some(texels) => {
            for i in 0..BLOCK_HEIGHT {
                for j in 0..BLOCK_WIDTH {
                    let [r, g, b] = texels[i * BLOCK_WIDTH + j].map(half_to_unorm);
                    let start = i * destination_pitch + j * 4;
                    decompressed_block[start..start + 4].copy_from_slice(&[b, g, r, 255]);
                }
            }
        }
        None => fill_tile(decompressed_block, destination_pitch, [0, 0, 0, 255]),
    }
}

fn half_to_unorm(bits: u16) -> u8 {
    (f16::from_bits(bits).to_f32().clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

fn write_texels<T>(
    decompressed_block: &mut [T],
    destination_pitch: usize,
    texels: &[[u16; 3]; 16],
    convert: impl Fn(u16) -> T,
) {
    for i in 0..BLOCK_HEIGHT {
        for j in 0..BLOCK_WIDTH {
            let start = i * destination_pitch + j * 3;
            for (c, value) in texels[i * BLOCK_WIDTH + j].iter().enumerate() {
                decompressed_block[start + c] = convert(*value);
            }
        }
    }
}

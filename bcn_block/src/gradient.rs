//! The 8 value gradient shared by the BC3 alpha block and the BC4 and BC5 channels.
use crate::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// The 8 values for an unsigned gradient from `a0` and `a1`.
pub(crate) fn unsigned_gradient(a0: u8, a1: u8) -> [u8; 8] {
    let mut alpha = [0u32; 8];

    alpha[0] = a0 as u32;
    alpha[1] = a1 as u32;

    if alpha[0] > alpha[1] {
        // 6 interpolated alpha values.
        alpha[2] = (6 * alpha[0] + alpha[1] + 1) / 7; // 6/7*alpha_0 + 1/7*alpha_1
        alpha[3] = (5 * alpha[0] + 2 * alpha[1] + 1) / 7; // 5/7*alpha_0 + 2/7*alpha_1
        alpha[4] = (4 * alpha[0] + 3 * alpha[1] + 1) / 7; // 4/7*alpha_0 + 3/7*alpha_1
        alpha[5] = (3 * alpha[0] + 4 * alpha[1] + 1) / 7; // 3/7*alpha_0 + 4/7*alpha_1
        alpha[6] = (2 * alpha[0] + 5 * alpha[1] + 1) / 7; // 2/7*alpha_0 + 5/7*alpha_1
        alpha[7] = (alpha[0] + 6 * alpha[1] + 1) / 7; // 1/7*alpha_0 + 6/7*alpha_1
    } else {
        // 4 interpolated alpha values.
        alpha[2] = (4 * alpha[0] + alpha[1] + 1) / 5; // 4/5*alpha_0 + 1/5*alpha_1
        alpha[3] = (3 * alpha[0] + 2 * alpha[1] + 1) / 5; // 3/5*alpha_0 + 2/5*alpha_1
        alpha[4] = (2 * alpha[0] + 3 * alpha[1] + 1) / 5; // 2/5*alpha_0 + 3/5*alpha_1
        alpha[5] = (alpha[0] + 4 * alpha[1] + 1) / 5; // 1/5*alpha_0 + 4/5*alpha_1
        alpha[6] = 0x00;
        alpha[7] = 0xFF;
    }

    alpha.map(|a| a as u8)
}

/// The 8 values for a signed gradient from `a0` and `a1` in the range `-127..=127`.
pub(crate) fn signed_gradient(a0: i8, a1: i8) -> [i8; 8] {
    // -128 and -127 both represent -1.0.
    let a0 = a0.max(-127) as i32;
    let a1 = a1.max(-127) as i32;

    let mut values = [0i32; 8];
    values[0] = a0;
    values[1] = a1;

    if a0 > a1 {
        for i in 1..7 {
            values[i + 1] = div_round(((7 - i) as i32) * a0 + i as i32 * a1, 7);
        }
    } else {
        for i in 1..5 {
            values[i + 1] = div_round(((5 - i) as i32) * a0 + i as i32 * a1, 5);
        }
        values[6] = -127;
        values[7] = 127;
    }

    values.map(|v| v as i8)
}

// Round to nearest with ties away from zero.
fn div_round(n: i32, d: i32) -> i32 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        -((-n + d / 2) / d)
    }
}

/// Maps a signed value in `-127..=127` to `0..=255`.
pub(crate) fn snorm_to_unorm(value: i8) -> u8 {
    let value = value.max(-127) as i32;
    ((value + 127) as f32 * 255.0 / 254.0 + 0.5) as u8
}

/// The gradient of the 8 byte block as unsigned values.
pub(crate) fn gradient(compressed_block: &[u8], is_signed: bool) -> [u8; 8] {
    if is_signed {
        signed_gradient(compressed_block[0] as i8, compressed_block[1] as i8).map(snorm_to_unorm)
    } else {
        unsigned_gradient(compressed_block[0], compressed_block[1])
    }
}

/// Writes a single channel to every texel `pixel_size` bytes apart.
pub(crate) fn gradient_block(
    compressed_block: &[u8],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
    pixel_size: usize,
    is_signed: bool,
) {
    let values = gradient(compressed_block, is_signed);

    let mut block = [0u8; 8];
    block.copy_from_slice(&compressed_block[..8]);
    // 16 3-bit indices follow the 2 endpoints.
    let mut indices = u64::from_le_bytes(block) >> 16;
    for i in 0..BLOCK_HEIGHT {
        for j in 0..BLOCK_WIDTH {
            let index = i * destination_pitch + j * pixel_size;
            decompressed_block[index] = values[(indices & 0x07) as usize];
            indices >>= 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn endpoints_reproduced_exactly() {
        for a0 in 0..=255u8 {
            for a1 in 0..=255u8 {
                let values = unsigned_gradient(a0, a1);
                assert_eq!(a0, values[0]);
                assert_eq!(a1, values[1]);
            }
        }
        for a0 in -127..=127i8 {
            for a1 in -127..=127i8 {
                let values = signed_gradient(a0, a1);
                assert_eq!(a0, values[0]);
                assert_eq!(a1, values[1]);
            }
        }
    }

    #[test]
    fn unsigned_seven_step() {
        assert_eq!([255, 0, 218, 182, 145, 109, 73, 36], unsigned_gradient(255, 0));
    }

    #[test]
    fn unsigned_five_step() {
        assert_eq!([0, 255, 51, 102, 153, 204, 0, 255], unsigned_gradient(0, 255));
    }

    #[test]
    fn signed_seven_step() {
        assert_eq!(
            [127, -127, 91, 54, 18, -18, -54, -91],
            signed_gradient(127, -127)
        );
    }

    #[test]
    fn signed_five_step() {
        assert_eq!([-100, 100, -60, -20, 20, 60, -127, 127], signed_gradient(-100, 100));
    }

    #[test]
    fn signed_clamps_minimum() {
        assert_eq!(signed_gradient(-127, 50), signed_gradient(-128, 50));
    }

    #[rstest]
    #[case(-128, 0)]
    #[case(-127, 0)]
    #[case(0, 128)]
    #[case(1, 129)]
    #[case(127, 255)]
    fn snorm_to_unorm_range(#[case] value: i8, #[case] expected: u8) {
        assert_eq!(expected, snorm_to_unorm(value));
    }

    #[test]
    fn gradient_block_indices() {
        // Indices 0 to 7 followed by 7 to 0.
        let indices: u64 = (0..8).chain((0..8).rev()).enumerate().fold(0, |acc, (i, index)| {
            acc | (index as u64) << (3 * i)
        });
        let mut block = [0u8; 8];
        block[0] = 255;
        block[1] = 0;
        block[2..].copy_from_slice(&indices.to_le_bytes()[..6]);

        let mut decompressed = [0u8; 16];
        gradient_block(&block, &mut decompressed, 4, 1, false);
        assert_eq!(
            [255, 0, 218, 182, 145, 109, 73, 36, 36, 73, 109, 145, 182, 218, 0, 255],
            decompressed
        );
    }
}

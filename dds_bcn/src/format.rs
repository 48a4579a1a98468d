use std::fmt;

use bcn_block::{BLOCK_HEIGHT, BLOCK_WIDTH};

use crate::DecodeError;

/// The format code declared by the container for the compressed blocks.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FormatCode {
    /// A four character code stored as little endian bytes like `b"DXT1"`.
    FourCC(u32),
    /// A numeric `DXGI_FORMAT` value from an extended header.
    Dxgi(u32),
}

impl FormatCode {
    /// The FourCC code for the four ASCII characters in `code`.
    pub const fn four_cc(code: &[u8; 4]) -> Self {
        Self::FourCC(u32::from_le_bytes(*code))
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatCode::FourCC(code) => {
                let bytes = code.to_le_bytes();
                if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
                    let text: String = bytes.iter().map(|b| *b as char).collect();
                    write!(f, "FourCC {text:?}")
                } else {
                    write!(f, "FourCC 0x{code:08X}")
                }
            }
            FormatCode::Dxgi(code) => write!(f, "DXGI format {code}"),
        }
    }
}

const DXT1: u32 = u32::from_le_bytes(*b"DXT1");
const DXT3: u32 = u32::from_le_bytes(*b"DXT3");
const DXT5: u32 = u32::from_le_bytes(*b"DXT5");
const ATI1: u32 = u32::from_le_bytes(*b"ATI1");
const BC4U: u32 = u32::from_le_bytes(*b"BC4U");
const BC4S: u32 = u32::from_le_bytes(*b"BC4S");
const ATI2: u32 = u32::from_le_bytes(*b"ATI2");
const BC5U: u32 = u32::from_le_bytes(*b"BC5U");
const BC5S: u32 = u32::from_le_bytes(*b"BC5S");

const DXGI_BC1_TYPELESS: u32 = 70;
const DXGI_BC1_UNORM_SRGB: u32 = 72;
const DXGI_BC2_TYPELESS: u32 = 73;
const DXGI_BC2_UNORM_SRGB: u32 = 75;
const DXGI_BC3_TYPELESS: u32 = 76;
const DXGI_BC3_UNORM_SRGB: u32 = 78;
const DXGI_BC4_TYPELESS: u32 = 79;
const DXGI_BC4_UNORM: u32 = 80;
const DXGI_BC4_SNORM: u32 = 81;
const DXGI_BC5_TYPELESS: u32 = 82;
const DXGI_BC5_UNORM: u32 = 83;
const DXGI_BC5_SNORM: u32 = 84;
const DXGI_BC6H_TYPELESS: u32 = 94;
const DXGI_BC6H_UF16: u32 = 95;
const DXGI_BC6H_SF16: u32 = 96;
const DXGI_BC7_TYPELESS: u32 = 97;
const DXGI_BC7_UNORM_SRGB: u32 = 99;

/// A supported block compressed format.
///
/// sRGB and typeless variants share a format since they decode to the same bytes.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "strum", derive(strum::EnumIter))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BcnFormat {
    Bc1,
    Bc2,
    Bc3,
    Bc4,
    Bc4S,
    Bc5,
    Bc5S,
    Bc6hUf16,
    Bc6hSf16,
    Bc7,
}

/// The byte order of the channels for each decoded pixel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ChannelLayout {
    /// A single red channel with 1 byte per pixel.
    R8,
    /// Blue, green, and red with 3 bytes per pixel.
    Bgr8,
    /// Blue, green, red, and alpha with 4 bytes per pixel.
    Bgra8,
}

/// Sizes and output layout for a [BcnFormat].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FormatDescriptor {
    /// The size of a single compressed block.
    pub block_size_in_bytes: usize,
    /// The size of a single decoded pixel.
    pub pixel_size_in_bytes: usize,
    pub block_width: usize,
    pub block_height: usize,
    pub layout: ChannelLayout,
}

impl FormatDescriptor {
    const fn new(block_size_in_bytes: usize, layout: ChannelLayout) -> Self {
        let pixel_size_in_bytes = match layout {
            ChannelLayout::R8 => 1,
            ChannelLayout::Bgr8 => 3,
            ChannelLayout::Bgra8 => 4,
        };
        Self {
            block_size_in_bytes,
            pixel_size_in_bytes,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            layout,
        }
    }
}

impl BcnFormat {
    pub fn descriptor(&self) -> FormatDescriptor {
        match self {
            BcnFormat::Bc1 => FormatDescriptor::new(8, ChannelLayout::Bgr8),
            BcnFormat::Bc2 => FormatDescriptor::new(16, ChannelLayout::Bgra8),
            BcnFormat::Bc3 => FormatDescriptor::new(16, ChannelLayout::Bgra8),
            BcnFormat::Bc4 => FormatDescriptor::new(8, ChannelLayout::R8),
            BcnFormat::Bc4S => FormatDescriptor::new(8, ChannelLayout::R8),
            BcnFormat::Bc5 => FormatDescriptor::new(16, ChannelLayout::Bgr8),
            BcnFormat::Bc5S => FormatDescriptor::new(16, ChannelLayout::Bgr8),
            BcnFormat::Bc6hUf16 => FormatDescriptor::new(16, ChannelLayout::Bgra8),
            BcnFormat::Bc6hSf16 => FormatDescriptor::new(16, ChannelLayout::Bgra8),
            BcnFormat::Bc7 => FormatDescriptor::new(16, ChannelLayout::Bgra8),
        }
    }

    /// Decodes a row of blocks into the 4 pixel rows of `decoded`
    /// with `stride` bytes between rows.
    ///
    /// `blocks` must contain a whole number of blocks,
    /// and each row of `decoded` must have space for every block.
    pub(crate) fn decode_block_row(&self, blocks: &[u8], decoded: &mut [u8], stride: usize) {
        let pixel_size = self.descriptor().pixel_size_in_bytes;
        match self {
            BcnFormat::Bc1 => decode_row(blocks, decoded, stride, pixel_size, bcn_block::bc1),
            BcnFormat::Bc2 => decode_row(blocks, decoded, stride, pixel_size, bcn_block::bc2),
            BcnFormat::Bc3 => decode_row(blocks, decoded, stride, pixel_size, bcn_block::bc3),
            BcnFormat::Bc4 => decode_row::<8, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc4(b, d, p, false)
            }),
            BcnFormat::Bc4S => decode_row::<8, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc4(b, d, p, true)
            }),
            BcnFormat::Bc5 => decode_row::<16, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc5(b, d, p, false)
            }),
            BcnFormat::Bc5S => decode_row::<16, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc5(b, d, p, true)
            }),
            BcnFormat::Bc6hUf16 => decode_row::<16, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc6h(b, d, p, false)
            }),
            BcnFormat::Bc6hSf16 => decode_row::<16, _>(blocks, decoded, stride, pixel_size, |b, d, p| {
                bcn_block::bc6h(b, d, p, true)
            }),
            BcnFormat::Bc7 => decode_row(blocks, decoded, stride, pixel_size, bcn_block::bc7),
        }
    }
}

fn decode_row<const N: usize, F>(
    blocks: &[u8],
    decoded: &mut [u8],
    stride: usize,
    pixel_size: usize,
    decode_block: F,
) where
    [u8; N]: bytemuck::Pod,
    F: Fn(&[u8; N], &mut [u8], usize),
{
    let blocks: &[[u8; N]] = bytemuck::cast_slice(blocks);
    for (x, block) in blocks.iter().enumerate() {
        // Each block fills a 4x4 region spanning 4 rows of the output.
        let start = x * BLOCK_WIDTH * pixel_size;
        decode_block(block, &mut decoded[start..], stride);
    }
}

impl TryFrom<FormatCode> for BcnFormat {
    type Error = DecodeError;

    fn try_from(code: FormatCode) -> Result<Self, Self::Error> {
        match code {
            FormatCode::FourCC(four_cc) => match four_cc {
                DXT1 => Ok(BcnFormat::Bc1),
                DXT3 => Ok(BcnFormat::Bc2),
                DXT5 => Ok(BcnFormat::Bc3),
                ATI1 | BC4U => Ok(BcnFormat::Bc4),
                BC4S => Ok(BcnFormat::Bc4S),
                ATI2 | BC5U => Ok(BcnFormat::Bc5),
                BC5S => Ok(BcnFormat::Bc5S),
                // DXT2 and DXT4 use premultiplied alpha.
                _ => Err(DecodeError::UnsupportedFormat { code }),
            },
            FormatCode::Dxgi(dxgi) => match dxgi {
                DXGI_BC1_TYPELESS..=DXGI_BC1_UNORM_SRGB => Ok(BcnFormat::Bc1),
                DXGI_BC2_TYPELESS..=DXGI_BC2_UNORM_SRGB => Ok(BcnFormat::Bc2),
                DXGI_BC3_TYPELESS..=DXGI_BC3_UNORM_SRGB => Ok(BcnFormat::Bc3),
                DXGI_BC4_TYPELESS | DXGI_BC4_UNORM => Ok(BcnFormat::Bc4),
                DXGI_BC4_SNORM => Ok(BcnFormat::Bc4S),
                DXGI_BC5_TYPELESS | DXGI_BC5_UNORM => Ok(BcnFormat::Bc5),
                DXGI_BC5_SNORM => Ok(BcnFormat::Bc5S),
                DXGI_BC6H_TYPELESS | DXGI_BC6H_UF16 => Ok(BcnFormat::Bc6hUf16),
                DXGI_BC6H_SF16 => Ok(BcnFormat::Bc6hSf16),
                DXGI_BC7_TYPELESS..=DXGI_BC7_UNORM_SRGB => Ok(BcnFormat::Bc7),
                _ => Err(DecodeError::UnsupportedFormat { code }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"DXT1", BcnFormat::Bc1)]
    #[case(b"DXT3", BcnFormat::Bc2)]
    #[case(b"DXT5", BcnFormat::Bc3)]
    #[case(b"ATI1", BcnFormat::Bc4)]
    #[case(b"BC4U", BcnFormat::Bc4)]
    #[case(b"BC4S", BcnFormat::Bc4S)]
    #[case(b"ATI2", BcnFormat::Bc5)]
    #[case(b"BC5U", BcnFormat::Bc5)]
    #[case(b"BC5S", BcnFormat::Bc5S)]
    fn format_from_four_cc(#[case] code: &[u8; 4], #[case] expected: BcnFormat) {
        assert_eq!(
            expected,
            BcnFormat::try_from(FormatCode::four_cc(code)).unwrap()
        );
    }

    #[rstest]
    #[case(70, BcnFormat::Bc1)]
    #[case(71, BcnFormat::Bc1)]
    #[case(72, BcnFormat::Bc1)]
    #[case(73, BcnFormat::Bc2)]
    #[case(74, BcnFormat::Bc2)]
    #[case(75, BcnFormat::Bc2)]
    #[case(76, BcnFormat::Bc3)]
    #[case(77, BcnFormat::Bc3)]
    #[case(78, BcnFormat::Bc3)]
    #[case(79, BcnFormat::Bc4)]
    #[case(80, BcnFormat::Bc4)]
    #[case(81, BcnFormat::Bc4S)]
    #[case(82, BcnFormat::Bc5)]
    #[case(83, BcnFormat::Bc5)]
    #[case(84, BcnFormat::Bc5S)]
    #[case(94, BcnFormat::Bc6hUf16)]
    #[case(95, BcnFormat::Bc6hUf16)]
    #[case(96, BcnFormat::Bc6hSf16)]
    #[case(97, BcnFormat::Bc7)]
    #[case(98, BcnFormat::Bc7)]
    #[case(99, BcnFormat::Bc7)]
    fn format_from_dxgi(#[case] code: u32, #[case] expected: BcnFormat) {
        assert_eq!(expected, BcnFormat::try_from(FormatCode::Dxgi(code)).unwrap());
    }

    #[rstest]
    #[case(FormatCode::four_cc(b"DXT2"))]
    #[case(FormatCode::four_cc(b"DXT4"))]
    #[case(FormatCode::four_cc(b"DX10"))]
    #[case(FormatCode::four_cc(b"ABCD"))]
    #[case(FormatCode::FourCC(0))]
    #[case(FormatCode::Dxgi(0))]
    #[case(FormatCode::Dxgi(28))]
    #[case(FormatCode::Dxgi(69))]
    #[case(FormatCode::Dxgi(85))]
    #[case(FormatCode::Dxgi(93))]
    #[case(FormatCode::Dxgi(100))]
    fn format_unsupported(#[case] code: FormatCode) {
        let result = BcnFormat::try_from(code);
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedFormat { code: c }) if c == code
        ));
    }

    #[test]
    fn display_four_cc() {
        assert_eq!(
            "FourCC \"DXT2\"",
            FormatCode::four_cc(b"DXT2").to_string()
        );
        assert_eq!("FourCC 0x00000001", FormatCode::FourCC(1).to_string());
    }

    #[test]
    fn display_dxgi() {
        assert_eq!("DXGI format 100", FormatCode::Dxgi(100).to_string());
    }

    #[test]
    fn unsupported_error_names_code() {
        let error = BcnFormat::try_from(FormatCode::four_cc(b"DXT4")).unwrap_err();
        assert_eq!("decoding FourCC \"DXT4\" is not supported", error.to_string());
    }

    #[cfg(feature = "strum")]
    #[test]
    fn descriptors_use_4x4_blocks() {
        use strum::IntoEnumIterator;

        for format in BcnFormat::iter() {
            let descriptor = format.descriptor();
            assert_eq!(4, descriptor.block_width);
            assert_eq!(4, descriptor.block_height);
            assert!(matches!(descriptor.block_size_in_bytes, 8 | 16));
        }
    }

    #[rstest]
    #[case(BcnFormat::Bc1, 8, 3, ChannelLayout::Bgr8)]
    #[case(BcnFormat::Bc3, 16, 4, ChannelLayout::Bgra8)]
    #[case(BcnFormat::Bc4S, 8, 1, ChannelLayout::R8)]
    #[case(BcnFormat::Bc5, 16, 3, ChannelLayout::Bgr8)]
    #[case(BcnFormat::Bc6hSf16, 16, 4, ChannelLayout::Bgra8)]
    #[case(BcnFormat::Bc7, 16, 4, ChannelLayout::Bgra8)]
    fn descriptor_sizes(
        #[case] format: BcnFormat,
        #[case] block_size: usize,
        #[case] pixel_size: usize,
        #[case] layout: ChannelLayout,
    ) {
        let descriptor = format.descriptor();
        assert_eq!(block_size, descriptor.block_size_in_bytes);
        assert_eq!(pixel_size, descriptor.pixel_size_in_bytes);
        assert_eq!(layout, descriptor.layout);
    }

    #[test]
    fn decode_block_row_bc1() {
        // Red followed by green.
        let blocks = [
            0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0, 0xE0, 0x07, 0xE0, 0x07, 0, 0, 0, 0,
        ];
        let stride = 2 * 4 * 3;
        let mut decoded = vec![0u8; stride * 4];
        BcnFormat::Bc1.decode_block_row(&blocks, &mut decoded, stride);

        for row in decoded.chunks_exact(stride) {
            for pixel in row[..12].chunks_exact(3) {
                assert_eq!([0, 0, 255], pixel);
            }
            for pixel in row[12..].chunks_exact(3) {
                assert_eq!([0, 255, 0], pixel);
            }
        }
    }

    #[test]
    fn decode_block_row_bc4_padded_stride() {
        let blocks = [0, 200, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        // Index 7 is 255 in the 5 step gradient.
        let stride = 6;
        let mut decoded = vec![1u8; stride * 4];
        BcnFormat::Bc4.decode_block_row(&blocks, &mut decoded, stride);

        for row in decoded.chunks_exact(stride) {
            assert_eq!([255, 255, 255, 255, 1, 1], row);
        }
    }
}

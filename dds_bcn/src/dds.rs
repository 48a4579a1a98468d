use crate::{decode_surface, DecodeError, DecodeOptions, DecodedImage, FormatCode, SurfaceGeometry};

/// The format code of `dds`.
///
/// The DXGI format from the extended header takes priority over the FourCC.
pub fn format_code_from_dds(dds: &ddsfile::Dds) -> Result<FormatCode, DecodeError> {
    // DX10 files store the actual format in the extended header.
    // get_dxgi_format also converts legacy FourCCs, so read the header directly.
    dds.header10
        .as_ref()
        .map(|header10| FormatCode::Dxgi(header10.dxgi_format as u32))
        .or_else(|| dds.header.spf.fourcc.as_ref().map(|f| FormatCode::FourCC(f.0)))
        .ok_or(DecodeError::UnrecognizedFormat)
}

/// The dimensions, mipmaps, and format for the first array layer of `dds`.
pub fn geometry_from_dds(dds: &ddsfile::Dds) -> Result<SurfaceGeometry, DecodeError> {
    Ok(SurfaceGeometry {
        width: dds.get_width(),
        height: dds.get_height(),
        mip_count: dds.get_num_mipmap_levels(),
        format: format_code_from_dds(dds)?,
    })
}

/// Decodes all mipmaps for the first array layer of `dds`.
pub fn decode_dds(dds: &ddsfile::Dds, options: &DecodeOptions) -> Result<DecodedImage, DecodeError> {
    let geometry = geometry_from_dds(dds)?;
    decode_surface(&dds.data[..], &geometry, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BcnFormat, ChannelLayout};
    use ddsfile::{D3DFormat, DxgiFormat};

    fn dxgi_dds(width: u32, height: u32, mipmaps: u32, format: DxgiFormat) -> ddsfile::Dds {
        ddsfile::Dds::new_dxgi(ddsfile::NewDxgiParams {
            height,
            width,
            depth: None,
            format,
            mipmap_levels: Some(mipmaps),
            array_layers: None,
            caps2: None,
            is_cubemap: false,
            resource_dimension: ddsfile::D3D10ResourceDimension::Texture2D,
            alpha_mode: ddsfile::AlphaMode::Straight,
        })
        .unwrap()
    }

    fn d3d_dds(width: u32, height: u32, format: D3DFormat) -> ddsfile::Dds {
        ddsfile::Dds::new_d3d(ddsfile::NewD3dParams {
            height,
            width,
            depth: None,
            format,
            mipmap_levels: None,
            caps2: None,
        })
        .unwrap()
    }

    #[test]
    fn format_code_dxgi() {
        let dds = dxgi_dds(4, 4, 1, DxgiFormat::BC7_UNorm_sRGB);
        assert_eq!(FormatCode::Dxgi(99), format_code_from_dds(&dds).unwrap());
    }

    #[test]
    fn format_code_four_cc() {
        let dds = d3d_dds(4, 4, D3DFormat::DXT5);
        assert_eq!(
            FormatCode::four_cc(b"DXT5"),
            format_code_from_dds(&dds).unwrap()
        );
    }

    #[test]
    fn geometry_legacy_four_cc() {
        let dds = d3d_dds(8, 4, D3DFormat::DXT1);
        assert_eq!(
            FormatCode::four_cc(b"DXT1"),
            geometry_from_dds(&dds).unwrap().format
        );
    }

    #[test]
    fn format_code_uncompressed() {
        let dds = d3d_dds(4, 4, D3DFormat::A8R8G8B8);
        assert!(matches!(
            format_code_from_dds(&dds),
            Err(DecodeError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn geometry_mipmaps() {
        let dds = dxgi_dds(16, 8, 5, DxgiFormat::BC1_UNorm);
        assert_eq!(
            SurfaceGeometry {
                width: 16,
                height: 8,
                mip_count: 5,
                format: FormatCode::Dxgi(71),
            },
            geometry_from_dds(&dds).unwrap()
        );
    }

    #[test]
    fn decode_dds_bc5() {
        let mut dds = dxgi_dds(4, 4, 1, DxgiFormat::BC5_UNorm);
        dds.data = vec![10, 0, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0];

        let image = decode_dds(&dds, &DecodeOptions::default()).unwrap();
        assert_eq!(BcnFormat::Bc5, image.format);
        assert_eq!(ChannelLayout::Bgr8, image.layout);
        assert_eq!([0u8, 20, 10].repeat(16), image.data);
    }

    #[test]
    fn decode_dds_dxt2() {
        let dds = d3d_dds(4, 4, D3DFormat::DXT2);
        assert!(matches!(
            decode_dds(&dds, &DecodeOptions::default()),
            Err(DecodeError::UnsupportedFormat { code }) if code == FormatCode::four_cc(b"DXT2")
        ));
    }
}

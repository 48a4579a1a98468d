#![no_main]

use dds_bcn::{decode_surface, BcnFormat, DecodeOptions, FormatCode, SurfaceGeometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (FormatCode, [u8; 16])| {
    let (format, block) = input;

    let geometry = SurfaceGeometry {
        width: 4,
        height: 4,
        mip_count: 1,
        format,
    };
    // Every supported format decodes a whole block without errors.
    if let Ok(bcn) = BcnFormat::try_from(format) {
        let image = decode_surface(&block[..], &geometry, &DecodeOptions::default()).unwrap();
        let descriptor = bcn.descriptor();
        assert_eq!(16 * descriptor.pixel_size_in_bytes, image.data.len());
    }
});

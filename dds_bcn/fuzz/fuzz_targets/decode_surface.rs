#![no_main]

use dds_bcn::{decode_surface, DecodeError, DecodeOptions, SurfaceGeometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (SurfaceGeometry, Vec<u8>, bool)| {
    let (mut geometry, data, allow_truncated) = input;
    // Keep allocations small enough for the fuzzer.
    geometry.width %= 257;
    geometry.height %= 257;

    let options = DecodeOptions {
        read_ahead_rows: 2,
        allow_truncated,
    };
    match decode_surface(&data[..], &geometry, &options) {
        Ok(image) => {
            let last = image.levels.last().unwrap();
            assert_eq!(last.offset + last.len, image.data.len());
        }
        Err(DecodeError::Io(e)) => panic!("unexpected io error: {e}"),
        Err(_) => (),
    }
});

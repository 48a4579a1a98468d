#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: ([u8; 16], bool)| {
    let (data, is_signed) = input;

    // 4x4 BGR
    let mut actual = [255u8; 4 * 4 * 3];
    bcn_block::bc5(&data, &mut actual, 4 * 3, is_signed);

    // Blue is always zero.
    for texel in actual.chunks_exact(3) {
        assert_eq!(0, texel[0]);
    }
});

#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 16]| {
    // 4x4 BGRA
    let mut actual = [0u8; 4 * 4 * 4];
    bcn_block::bc2(&data, &mut actual, 4 * 4);

    // Explicit alpha is always a multiple of 17.
    for texel in actual.chunks_exact(4) {
        assert_eq!(0, texel[3] % 17);
    }
});

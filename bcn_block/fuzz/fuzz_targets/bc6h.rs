#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: ([u8; 16], bool)| {
    let (data, is_signed) = input;

    // 4x4 BGRA
    // Start with non zeros to test filling every byte.
    let mut actual = [1u8; 4 * 4 * 4];
    bcn_block::bc6h(&data, &mut actual, 4 * 4, is_signed);

    let mut again = [2u8; 4 * 4 * 4];
    bcn_block::bc6h(&data, &mut again, 4 * 4, is_signed);

    assert_eq!(actual, again);
    for texel in actual.chunks_exact(4) {
        assert_eq!(255, texel[3]);
    }
});

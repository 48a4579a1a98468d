#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: ([u8; 8], bool)| {
    let (data, is_signed) = input;

    // 4x4 R
    let mut actual = [0u8; 4 * 4];
    bcn_block::bc4(&data, &mut actual, 4, is_signed);

    let index0 = data[2] & 0x7;
    if index0 == 0 && !is_signed {
        assert_eq!(data[0], actual[0]);
    }
});

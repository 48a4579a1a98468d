#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 8]| {
    // 4x4 BGR
    let mut actual = [0u8; 4 * 4 * 3];
    bcn_block::bc1(&data, &mut actual, 4 * 3);

    // Index 0 and 1 always select the endpoints.
    let c0 = u16::from_le_bytes([data[0], data[1]]);
    let red = (c0 >> 11) as u8;
    let index0 = data[4] & 0x3;
    if index0 == 0 {
        assert_eq!(red, actual[2] >> 3);
    }
});

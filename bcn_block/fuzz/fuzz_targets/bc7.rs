#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 16]| {
    // 4x4 BGRA
    let mut actual = [1u8; 4 * 4 * 4];
    bcn_block::bc7(&data, &mut actual, 4 * 4);

    let mut again = [2u8; 4 * 4 * 4];
    bcn_block::bc7(&data, &mut again, 4 * 4);

    assert_eq!(actual, again);
});

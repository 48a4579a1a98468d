#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 16]| {
    // 4x4 BGRA
    let mut expected = [0u8; 4 * 4 * 4];
    bcn_block::bc3(&data, &mut expected, 4 * 4);

    // Decode into the second block of a wider surface.
    let mut actual = [0u8; 8 * 4 * 4];
    bcn_block::bc3(&data, &mut actual[4 * 4..], 8 * 4);

    for (expected_row, actual_row) in expected.chunks_exact(4 * 4).zip(actual.chunks_exact(8 * 4)) {
        assert_eq!(expected_row, &actual_row[4 * 4..]);
    }
});

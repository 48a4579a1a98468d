#![no_main]

extern crate libfuzzer_sys;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: ([u8; 16], bool)| {
    let (data, is_signed) = input;

    // 4x4 RGB f16
    // The pitch is in terms of half floats rather than bytes.
    let mut halves = [bcn_block::f16::ONE; 4 * 4 * 3];
    bcn_block::bc6h_half(&data, &mut halves, 4 * 3, is_signed);

    let mut floats = [1.0f32; 4 * 4 * 3];
    bcn_block::bc6h_float(&data, &mut floats, 4 * 3, is_signed);

    for (half, float) in halves.iter().zip(floats) {
        assert!(!half.is_nan());
        assert_eq!(half.to_f32(), float);
        if !is_signed {
            assert!(float >= 0.0);
        }
    }
});

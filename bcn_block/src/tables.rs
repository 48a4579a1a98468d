//! Constant lookup data shared by the BC6H and BC7 decoders.
//!
//! The tables are kept as plain data so they can be checked against the
//! published BC6H and BC7 format documentation entry by entry.

/// Interpolation weights for 2, 3, and 4 bit indices out of a maximum of 64.
pub(crate) const WEIGHTS2: [u32; 4] = [0, 21, 43, 64];
pub(crate) const WEIGHTS3: [u32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
pub(crate) const WEIGHTS4: [u32; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

pub(crate) const WEIGHT_MAX: u32 = 64;
pub(crate) const WEIGHT_SHIFT: u32 = 6;
pub(crate) const WEIGHT_ROUND: u32 = 32;

/// Returns the weight table for indices with `index_precision` bits.
pub(crate) fn weights(index_precision: u8) -> &'static [u32] {
    match index_precision {
        2 => &WEIGHTS2,
        3 => &WEIGHTS3,
        _ => &WEIGHTS4,
    }
}

// There are 64 possible partition sets for two and three region tiles.
// Each row assigns the 16 pixels of a 4x4 block in row-major order to a region.
// The fix-up (anchor) pixel of each region has the MSB set.
const ANCHOR: u8 = 0x80;
const REGION_MASK: u8 = 0x03;

#[rustfmt::skip]
const PARTITION_SETS: [[[u8; 16]; 64]; 2] = [
    [
        // Partition table for 2-subset BPTC
        [128,   0,   1,   1,   0,   0,   1,   1,   0,   0,   1,   1,   0,   0,   1, 129], //  0
        [128,   0,   0,   1,   0,   0,   0,   1,   0,   0,   0,   1,   0,   0,   0, 129], //  1
        [128,   1,   1,   1,   0,   1,   1,   1,   0,   1,   1,   1,   0,   1,   1, 129], //  2
        [128,   0,   0,   1,   0,   0,   1,   1,   0,   0,   1,   1,   0,   1,   1, 129], //  3
        [128,   0,   0,   0,   0,   0,   0,   1,   0,   0,   0,   1,   0,   0,   1, 129], //  4
        [128,   0,   1,   1,   0,   1,   1,   1,   0,   1,   1,   1,   1,   1,   1, 129], //  5
        [128,   0,   0,   1,   0,   0,   1,   1,   0,   1,   1,   1,   1,   1,   1, 129], //  6
        [128,   0,   0,   0,   0,   0,   0,   1,   0,   0,   1,   1,   0,   1,   1, 129], //  7
        [128,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   0,   0,   1, 129], //  8
        [128,   0,   1,   1,   0,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1, 129], //  9
        [128,   0,   0,   0,   0,   0,   0,   1,   0,   1,   1,   1,   1,   1,   1, 129], // 10
        [128,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   0,   1,   1, 129], // 11
        [128,   0,   0,   1,   0,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1, 129], // 12
        [128,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   1,   1,   1, 129], // 13
        [128,   0,   0,   0,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1, 129], // 14
        [128,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1, 129], // 15
        [128,   0,   0,   0,   1,   0,   0,   0,   1,   1,   1,   0,   1,   1,   1, 129], // 16
        [128,   1, 129,   1,   0,   0,   0,   1,   0,   0,   0,   0,   0,   0,   0,   0], // 17
        [128,   0,   0,   0,   0,   0,   0,   0, 129,   0,   0,   0,   1,   1,   1,   0], // 18
        [128,   1, 129,   1,   0,   0,   1,   1,   0,   0,   0,   1,   0,   0,   0,   0], // 19
        [128,   0, 129,   1,   0,   0,   0,   1,   0,   0,   0,   0,   0,   0,   0,   0], // 20
        [128,   0,   0,   0,   1,   0,   0,   0, 129,   1,   0,   0,   1,   1,   1,   0], // 21
        [128,   0,   0,   0,   0,   0,   0,   0, 129,   0,   0,   0,   1,   1,   0,   0], // 22
        [128,   1,   1,   1,   0,   0,   1,   1,   0,   0,   1,   1,   0,   0,   0, 129], // 23
        [128,   0, 129,   1,   0,   0,   0,   1,   0,   0,   0,   1,   0,   0,   0,   0], // 24
        [128,   0,   0,   0,   1,   0,   0,   0, 129,   0,   0,   0,   1,   1,   0,   0], // 25
        [128,   1, 129,   0,   0,   1,   1,   0,   0,   1,   1,   0,   0,   1,   1,   0], // 26
        [128,   0, 129,   1,   0,   1,   1,   0,   0,   1,   1,   0,   1,   1,   0,   0], // 27
        [128,   0,   0,   1,   0,   1,   1,   1, 129,   1,   1,   0,   1,   0,   0,   0], // 28
        [128,   0,   0,   0,   1,   1,   1,   1, 129,   1,   1,   1,   0,   0,   0,   0], // 29
        [128,   1, 129,   1,   0,   0,   0,   1,   1,   0,   0,   0,   1,   1,   1,   0], // 30
        [128,   0, 129,   1,   1,   0,   0,   1,   1,   0,   0,   1,   1,   1,   0,   0], // 31
        [128,   1,   0,   1,   0,   1,   0,   1,   0,   1,   0,   1,   0,   1,   0, 129], // 32
        [128,   0,   0,   0,   1,   1,   1,   1,   0,   0,   0,   0,   1,   1,   1, 129], // 33
        [128,   1,   0,   1,   1,   0, 129,   0,   0,   1,   0,   1,   1,   0,   1,   0], // 34
        [128,   0,   1,   1,   0,   0,   1,   1, 129,   1,   0,   0,   1,   1,   0,   0], // 35
        [128,   0, 129,   1,   1,   1,   0,   0,   0,   0,   1,   1,   1,   1,   0,   0], // 36
        [128,   1,   0,   1,   0,   1,   0,   1, 129,   0,   1,   0,   1,   0,   1,   0], // 37
        [128,   1,   1,   0,   1,   0,   0,   1,   0,   1,   1,   0,   1,   0,   0, 129], // 38
        [128,   1,   0,   1,   1,   0,   1,   0,   1,   0,   1,   0,   0,   1,   0, 129], // 39
        [128,   1, 129,   1,   0,   0,   1,   1,   1,   1,   0,   0,   1,   1,   1,   0], // 40
        [128,   0,   0,   1,   0,   0,   1,   1, 129,   1,   0,   0,   1,   0,   0,   0], // 41
        [128,   0, 129,   1,   0,   0,   1,   0,   0,   1,   0,   0,   1,   1,   0,   0], // 42
        [128,   0, 129,   1,   1,   0,   1,   1,   1,   1,   0,   1,   1,   1,   0,   0], // 43
        [128,   1, 129,   0,   1,   0,   0,   1,   1,   0,   0,   1,   0,   1,   1,   0], // 44
        [128,   0,   1,   1,   1,   1,   0,   0,   1,   1,   0,   0,   0,   0,   1, 129], // 45
        [128,   1,   1,   0,   0,   1,   1,   0,   1,   0,   0,   1,   1,   0,   0, 129], // 46
        [128,   0,   0,   0,   0,   1, 129,   0,   0,   1,   1,   0,   0,   0,   0,   0], // 47
        [128,   1,   0,   0,   1,   1, 129,   0,   0,   1,   0,   0,   0,   0,   0,   0], // 48
        [128,   0, 129,   0,   0,   1,   1,   1,   0,   0,   1,   0,   0,   0,   0,   0], // 49
        [128,   0,   0,   0,   0,   0, 129,   0,   0,   1,   1,   1,   0,   0,   1,   0], // 50
        [128,   0,   0,   0,   0,   1,   0,   0, 129,   1,   1,   0,   0,   1,   0,   0], // 51
        [128,   1,   1,   0,   1,   1,   0,   0,   1,   0,   0,   1,   0,   0,   1, 129], // 52
        [128,   0,   1,   1,   0,   1,   1,   0,   1,   1,   0,   0,   1,   0,   0, 129], // 53
        [128,   1, 129,   0,   0,   0,   1,   1,   1,   0,   0,   1,   1,   1,   0,   0], // 54
        [128,   0, 129,   1,   1,   0,   0,   1,   1,   1,   0,   0,   0,   1,   1,   0], // 55
        [128,   1,   1,   0,   1,   1,   0,   0,   1,   1,   0,   0,   1,   0,   0, 129], // 56
        [128,   1,   1,   0,   0,   0,   1,   1,   0,   0,   1,   1,   1,   0,   0, 129], // 57
        [128,   1,   1,   1,   1,   1,   1,   0,   1,   0,   0,   0,   0,   0,   0, 129], // 58
        [128,   0,   0,   1,   1,   0,   0,   0,   1,   1,   1,   0,   0,   1,   1, 129], // 59
        [128,   0,   0,   0,   1,   1,   1,   1,   0,   0,   1,   1,   0,   0,   1, 129], // 60
        [128,   0, 129,   1,   0,   0,   1,   1,   1,   1,   1,   1,   0,   0,   0,   0], // 61
        [128,   0, 129,   0,   0,   0,   1,   0,   1,   1,   1,   0,   1,   1,   1,   0], // 62
        [128,   1,   0,   0,   0,   1,   0,   0,   0,   1,   1,   1,   0,   1,   1, 129], // 63
    ],
    [
        // Partition table for 3-subset BPTC
        [128,   0,   1, 129,   0,   0,   1,   1,   0,   2,   2,   1,   2,   2,   2, 130], //  0
        [128,   0,   0, 129,   0,   0,   1,   1, 130,   2,   1,   1,   2,   2,   2,   1], //  1
        [128,   0,   0,   0,   2,   0,   0,   1, 130,   2,   1,   1,   2,   2,   1, 129], //  2
        [128,   2,   2, 130,   0,   0,   2,   2,   0,   0,   1,   1,   0,   1,   1, 129], //  3
        [128,   0,   0,   0,   0,   0,   0,   0, 129,   1,   2,   2,   1,   1,   2, 130], //  4
        [128,   0,   1, 129,   0,   0,   1,   1,   0,   0,   2,   2,   0,   0,   2, 130], //  5
        [128,   0,   2, 130,   0,   0,   2,   2,   1,   1,   1,   1,   1,   1,   1, 129], //  6
        [128,   0,   1,   1,   0,   0,   1,   1, 130,   2,   1,   1,   2,   2,   1, 129], //  7
        [128,   0,   0,   0,   0,   0,   0,   0, 129,   1,   1,   1,   2,   2,   2, 130], //  8
        [128,   0,   0,   0,   1,   1,   1,   1, 129,   1,   1,   1,   2,   2,   2, 130], //  9
        [128,   0,   0,   0,   1,   1, 129,   1,   2,   2,   2,   2,   2,   2,   2, 130], // 10
        [128,   0,   1,   2,   0,   0, 129,   2,   0,   0,   1,   2,   0,   0,   1, 130], // 11
        [128,   1,   1,   2,   0,   1, 129,   2,   0,   1,   1,   2,   0,   1,   1, 130], // 12
        [128,   1,   2,   2,   0, 129,   2,   2,   0,   1,   2,   2,   0,   1,   2, 130], // 13
        [128,   0,   1, 129,   0,   1,   1,   2,   1,   1,   2,   2,   1,   2,   2, 130], // 14
        [128,   0,   1, 129,   2,   0,   0,   1, 130,   2,   0,   0,   2,   2,   2,   0], // 15
        [128,   0,   0, 129,   0,   0,   1,   1,   0,   1,   1,   2,   1,   1,   2, 130], // 16
        [128,   1,   1, 129,   0,   0,   1,   1, 130,   0,   0,   1,   2,   2,   0,   0], // 17
        [128,   0,   0,   0,   1,   1,   2,   2, 129,   1,   2,   2,   1,   1,   2, 130], // 18
        [128,   0,   2, 130,   0,   0,   2,   2,   0,   0,   2,   2,   1,   1,   1, 129], // 19
        [128,   1,   1, 129,   0,   1,   1,   1,   0,   2,   2,   2,   0,   2,   2, 130], // 20
        [128,   0,   0, 129,   0,   0,   0,   1, 130,   2,   2,   1,   2,   2,   2,   1], // 21
        [128,   0,   0,   0,   0,   0, 129,   1,   0,   1,   2,   2,   0,   1,   2, 130], // 22
        [128,   0,   0,   0,   1,   1,   0,   0, 130,   2, 129,   0,   2,   2,   1,   0], // 23
        [128,   1,   2, 130,   0, 129,   2,   2,   0,   0,   1,   1,   0,   0,   0,   0], // 24
        [128,   0,   1,   2,   0,   0,   1,   2, 129,   1,   2,   2,   2,   2,   2, 130], // 25
        [128,   1,   1,   0,   1,   2, 130,   1, 129,   2,   2,   1,   0,   1,   1,   0], // 26
        [128,   0,   0,   0,   0,   1, 129,   0,   1,   2, 130,   1,   1,   2,   2,   1], // 27
        [128,   0,   2,   2,   1,   1,   0,   2, 129,   1,   0,   2,   0,   0,   2, 130], // 28
        [128,   1,   1,   0,   0, 129,   1,   0,   2,   0,   0,   2,   2,   2,   2, 130], // 29
        [128,   0,   1,   1,   0,   1,   2,   2,   0,   1, 130,   2,   0,   0,   1, 129], // 30
        [128,   0,   0,   0,   2,   0,   0,   0, 130,   2,   1,   1,   2,   2,   2, 129], // 31
        [128,   0,   0,   0,   0,   0,   0,   2, 129,   1,   2,   2,   1,   2,   2, 130], // 32
        [128,   2,   2, 130,   0,   0,   2,   2,   0,   0,   1,   2,   0,   0,   1, 129], // 33
        [128,   0,   1, 129,   0,   0,   1,   2,   0,   0,   2,   2,   0,   2,   2, 130], // 34
        [128,   1,   2,   0,   0, 129,   2,   0,   0,   1, 130,   0,   0,   1,   2,   0], // 35
        [128,   0,   0,   0,   1,   1, 129,   1,   2,   2, 130,   2,   0,   0,   0,   0], // 36
        [128,   1,   2,   0,   1,   2,   0,   1, 130,   0, 129,   2,   0,   1,   2,   0], // 37
        [128,   1,   2,   0,   2,   0,   1,   2, 129, 130,   0,   1,   0,   1,   2,   0], // 38
        [128,   0,   1,   1,   2,   2,   0,   0,   1,   1, 130,   2,   0,   0,   1, 129], // 39
        [128,   0,   1,   1,   1,   1, 130,   2,   2,   2,   0,   0,   0,   0,   1, 129], // 40
        [128,   1,   0, 129,   0,   1,   0,   1,   2,   2,   2,   2,   2,   2,   2, 130], // 41
        [128,   0,   0,   0,   0,   0,   0,   0, 130,   1,   2,   1,   2,   1,   2, 129], // 42
        [128,   0,   2,   2,   1, 129,   2,   2,   0,   0,   2,   2,   1,   1,   2, 130], // 43
        [128,   0,   2, 130,   0,   0,   1,   1,   0,   0,   2,   2,   0,   0,   1, 129], // 44
        [128,   2,   2,   0,   1,   2, 130,   1,   0,   2,   2,   0,   1,   2,   2, 129], // 45
        [128,   1,   0,   1,   2,   2, 130,   2,   2,   2,   2,   2,   0,   1,   0, 129], // 46
        [128,   0,   0,   0,   2,   1,   2,   1, 130,   1,   2,   1,   2,   1,   2, 129], // 47
        [128,   1,   0, 129,   0,   1,   0,   1,   0,   1,   0,   1,   2,   2,   2, 130], // 48
        [128,   2,   2, 130,   0,   1,   1,   1,   0,   2,   2,   2,   0,   1,   1, 129], // 49
        [128,   0,   0,   2,   1, 129,   1,   2,   0,   0,   0,   2,   1,   1,   1, 130], // 50
        [128,   0,   0,   0,   2, 129,   1,   2,   2,   1,   1,   2,   2,   1,   1, 130], // 51
        [128,   2,   2,   2,   0, 129,   1,   1,   0,   1,   1,   1,   0,   2,   2, 130], // 52
        [128,   0,   0,   2,   1,   1,   1,   2, 129,   1,   1,   2,   0,   0,   0, 130], // 53
        [128,   1,   1,   0,   0, 129,   1,   0,   0,   1,   1,   0,   2,   2,   2, 130], // 54
        [128,   0,   0,   0,   0,   0,   0,   0,   2,   1, 129,   2,   2,   1,   1, 130], // 55
        [128,   1,   1,   0,   0, 129,   1,   0,   2,   2,   2,   2,   2,   2,   2, 130], // 56
        [128,   0,   2,   2,   0,   0,   1,   1,   0,   0, 129,   1,   0,   0,   2, 130], // 57
        [128,   0,   2,   2,   1,   1,   2,   2, 129,   1,   2,   2,   0,   0,   2, 130], // 58
        [128,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   2, 129,   1, 130], // 59
        [128,   0,   0, 130,   0,   0,   0,   1,   0,   0,   0,   2,   0,   0,   0, 129], // 60
        [128,   2,   2,   2,   1,   2,   2,   2,   0,   2,   2,   2, 129,   2,   2, 130], // 61
        [128,   1,   0, 129,   2,   2,   2,   2,   2,   2,   2,   2,   2,   2,   2, 130], // 62
        [128,   1,   1, 129,   2,   0,   1,   1, 130,   2,   0,   1,   2,   2,   2,   0], // 63
    ],
];

/// The region of `pixel` for a block with `partitions` additional regions
/// using partition `shape`.
///
/// A `partitions` value of 0 means the block has a single region.
pub(crate) fn partition_region(partitions: u8, shape: usize, pixel: usize) -> usize {
    match partitions {
        0 => 0,
        p => (PARTITION_SETS[p as usize - 1][shape][pixel] & REGION_MASK) as usize,
    }
}

/// Fix-up pixels store their index with one less bit since the MSB is implied 0.
pub(crate) fn is_fix_up(partitions: u8, shape: usize, pixel: usize) -> bool {
    match partitions {
        0 => pixel == 0,
        p => PARTITION_SETS[p as usize - 1][shape][pixel] & ANCHOR != 0,
    }
}

/// Bit layout and precision for one of the 8 BC7 modes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bc7Mode {
    /// The number of regions minus one.
    pub partitions: u8,
    pub partition_bits: u8,
    pub p_bits: u8,
    pub rotation_bits: u8,
    pub index_mode_bits: u8,
    pub index_precision: u8,
    /// The precision of the separate alpha index or 0 if there is only one set of indices.
    pub index_precision2: u8,
    /// RGBA endpoint bits stored in the block.
    pub precision: [u8; 4],
    /// RGBA endpoint bits after appending P-bits.
    pub precision_with_p: [u8; 4],
}

const fn bc7_mode(
    partitions: u8,
    partition_bits: u8,
    p_bits: u8,
    rotation_bits: u8,
    index_mode_bits: u8,
    index_precision: u8,
    index_precision2: u8,
    precision: [u8; 4],
    precision_with_p: [u8; 4],
) -> Bc7Mode {
    Bc7Mode {
        partitions,
        partition_bits,
        p_bits,
        rotation_bits,
        index_mode_bits,
        index_precision,
        index_precision2,
        precision,
        precision_with_p,
    }
}

pub(crate) const BC7_MODES: [Bc7Mode; 8] = [
    // Color only, 3 subsets, RGBP 4441 (unique P-bit), 3-bit indices, 16 partitions
    bc7_mode(2, 4, 6, 0, 0, 3, 0, [4, 4, 4, 0], [5, 5, 5, 0]),
    // Color only, 2 subsets, RGBP 6661 (shared P-bit), 3-bit indices, 64 partitions
    bc7_mode(1, 6, 2, 0, 0, 3, 0, [6, 6, 6, 0], [7, 7, 7, 0]),
    // Color only, 3 subsets, RGB 555, 2-bit indices, 64 partitions
    bc7_mode(2, 6, 0, 0, 0, 2, 0, [5, 5, 5, 0], [5, 5, 5, 0]),
    // Color only, 2 subsets, RGBP 7771 (unique P-bit), 2-bit indices, 64 partitions
    bc7_mode(1, 6, 4, 0, 0, 2, 0, [7, 7, 7, 0], [8, 8, 8, 0]),
    // Separate alpha, 1 subset, RGB 555, A6, 2/3-bit indices, 2-bit rotation, 1-bit index selector
    bc7_mode(0, 0, 0, 2, 1, 2, 3, [5, 5, 5, 6], [5, 5, 5, 6]),
    // Separate alpha, 1 subset, RGB 777, A8, 2/2-bit indices, 2-bit rotation
    bc7_mode(0, 0, 0, 2, 0, 2, 2, [7, 7, 7, 8], [7, 7, 7, 8]),
    // Color and alpha, 1 subset, RGBAP 77771 (unique P-bit), 4-bit indices
    bc7_mode(0, 0, 2, 0, 0, 4, 0, [7, 7, 7, 7], [8, 8, 8, 8]),
    // Color and alpha, 2 subsets, RGBAP 55551 (unique P-bit), 2-bit indices, 64 partitions
    bc7_mode(1, 6, 4, 0, 0, 2, 0, [5, 5, 5, 5], [6, 6, 6, 6]),
];

/// The destination of a single BC6H header bit.
///
/// Endpoint fields are named by channel and endpoint.
/// W and X are the first and second endpoint of region 0.
/// Y and Z are the first and second endpoint of region 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// Unused.
    Na,
    /// Mode selector.
    M,
    /// Partition shape.
    D,
    Rw,
    Rx,
    Ry,
    Rz,
    Gw,
    Gx,
    Gy,
    Gz,
    Bw,
    Bx,
    By,
    Bz,
}

impl Field {
    /// The (region, endpoint, channel) accumulator for endpoint fields.
    pub fn endpoint(self) -> Option<(usize, usize, usize)> {
        match self {
            Field::Rw => Some((0, 0, 0)),
            Field::Rx => Some((0, 1, 0)),
            Field::Ry => Some((1, 0, 0)),
            Field::Rz => Some((1, 1, 0)),
            Field::Gw => Some((0, 0, 1)),
            Field::Gx => Some((0, 1, 1)),
            Field::Gy => Some((1, 0, 1)),
            Field::Gz => Some((1, 1, 1)),
            Field::Bw => Some((0, 0, 2)),
            Field::Bx => Some((0, 1, 2)),
            Field::By => Some((1, 0, 2)),
            Field::Bz => Some((1, 1, 2)),
            Field::Na | Field::M | Field::D => None,
        }
    }
}

/// Endpoint precision and index layout for one of the 14 BC6H modes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bc6hMode {
    /// The number of regions minus one.
    pub partitions: u8,
    /// Endpoints other than the first are stored as deltas from the first endpoint.
    pub transformed: bool,
    pub index_precision: u8,
    /// RGB bits for `[region][endpoint]`.
    pub precision: [[[u8; 3]; 2]; 2],
}

const fn bc6h_mode(
    partitions: u8,
    transformed: bool,
    index_precision: u8,
    base: [u8; 3],
    delta: [u8; 3],
) -> Bc6hMode {
    // Modes without partitions leave the second region unused.
    let region1 = if partitions > 0 { [delta, delta] } else { [[0; 3], [0; 3]] };
    Bc6hMode {
        partitions,
        transformed,
        index_precision,
        precision: [[base, delta], region1],
    }
}

pub(crate) const BC6H_MODES: [Bc6hMode; 14] = [
    bc6h_mode(1, true, 3, [10, 10, 10], [5, 5, 5]), // 0x00
    bc6h_mode(1, true, 3, [7, 7, 7], [6, 6, 6]),    // 0x01
    bc6h_mode(1, true, 3, [11, 11, 11], [5, 4, 4]), // 0x02
    bc6h_mode(1, true, 3, [11, 11, 11], [4, 5, 4]), // 0x06
    bc6h_mode(1, true, 3, [11, 11, 11], [4, 4, 5]), // 0x0a
    bc6h_mode(1, true, 3, [9, 9, 9], [5, 5, 5]),    // 0x0e
    bc6h_mode(1, true, 3, [8, 8, 8], [6, 5, 5]),    // 0x12
    bc6h_mode(1, true, 3, [8, 8, 8], [5, 6, 5]),    // 0x16
    bc6h_mode(1, true, 3, [8, 8, 8], [5, 5, 6]),    // 0x1a
    bc6h_mode(1, false, 3, [6, 6, 6], [6, 6, 6]),   // 0x1e
    bc6h_mode(0, false, 4, [10, 10, 10], [10, 10, 10]), // 0x03
    bc6h_mode(0, true, 4, [11, 11, 11], [9, 9, 9]),     // 0x07
    bc6h_mode(0, true, 4, [12, 12, 12], [8, 8, 8]),     // 0x0b
    bc6h_mode(0, true, 4, [16, 16, 16], [4, 4, 4]),     // 0x0f
];

/// The meaning of a 5-bit BC6H mode code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bc6hCode {
    /// Index into [BC6H_MODES] and [BC6H_FIELDS].
    Mode(u8),
    Reserved,
    Invalid,
}

use Bc6hCode::{Invalid, Mode, Reserved};

pub(crate) const BC6H_CODES: [Bc6hCode; 32] = [
    Mode(0),  // 0x00
    Mode(1),  // 0x01
    Mode(2),  // 0x02
    Mode(10), // 0x03
    Invalid,  // 0x04
    Invalid,  // 0x05
    Mode(3),  // 0x06
    Mode(11), // 0x07
    Invalid,  // 0x08
    Invalid,  // 0x09
    Mode(4),  // 0x0a
    Mode(12), // 0x0b
    Invalid,  // 0x0c
    Invalid,  // 0x0d
    Mode(5),  // 0x0e
    Mode(13), // 0x0f
    Invalid,  // 0x10
    Invalid,  // 0x11
    Mode(6),  // 0x12
    Reserved, // 0x13
    Invalid,  // 0x14
    Invalid,  // 0x15
    Mode(7),  // 0x16
    Reserved, // 0x17
    Invalid,  // 0x18
    Invalid,  // 0x19
    Mode(8),  // 0x1a
    Reserved, // 0x1b
    Invalid,  // 0x1c
    Invalid,  // 0x1d
    Mode(9),  // 0x1e
    Reserved, // 0x1f
];

use Field::{Bw, Bx, By, Bz, Gw, Gx, Gy, Gz, Na, Rw, Rx, Ry, Rz, D, M};

/// The destination of each of the first 82 bits for every BC6H mode.
///
/// Modes without partitions only use the first 65 bits.
#[rustfmt::skip]
pub(crate) const BC6H_FIELDS: [[(Field, u8); 82]; 14] = [
    [
        (M, 0), (M, 1), (Gy, 4), (By, 4), (Bz, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (Gy, 5), (Gz, 4), (Gz, 5), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Bz, 0), (Bz, 1), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (By, 5), (Bz, 2),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bz, 3), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Ry, 5), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rw, 10), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gw, 10), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 10), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 10),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gw, 10), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 10), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Bz, 0), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Gy, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 10),
        (By, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gw, 10), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bw, 10), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Bz, 1), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Bz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Gz, 4), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Bz, 2),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bz, 3), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Ry, 5), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Bz, 0), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gy, 5),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Gz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bz, 1), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Bz, 1), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (By, 5),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Gz, 4), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Bz, 0), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Bz, 2), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Bz, 3), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Gz, 4), (Bz, 0), (Bz, 1), (By, 4), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gy, 5), (By, 5), (Bz, 2),
        (Gy, 4), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Gz, 5),
        (Bz, 3), (Bz, 5), (Bz, 4), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Gy, 0), (Gy, 1), (Gy, 2), (Gy, 3), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gz, 0), (Gz, 1), (Gz, 2), (Gz, 3), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (By, 0), (By, 1), (By, 2),
        (By, 3), (Ry, 0), (Ry, 1), (Ry, 2), (Ry, 3), (Ry, 4), (Ry, 5), (Rz, 0),
        (Rz, 1), (Rz, 2), (Rz, 3), (Rz, 4), (Rz, 5), (D, 0), (D, 1), (D, 2),
        (D, 3), (D, 4),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rx, 8), (Rx, 9), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gx, 6), (Gx, 7), (Gx, 8), (Gx, 9), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (Bx, 6), (Bx, 7), (Bx, 8),
        (Bx, 9), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rx, 8), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gx, 6), (Gx, 7), (Gx, 8), (Gw, 10), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (Bx, 6), (Bx, 7), (Bx, 8),
        (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rx, 4),
        (Rx, 5), (Rx, 6), (Rx, 7), (Rw, 11), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gx, 4), (Gx, 5), (Gx, 6), (Gx, 7), (Gw, 11), (Gw, 10), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bx, 4), (Bx, 5), (Bx, 6), (Bx, 7), (Bw, 11),
        (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
    [
        (M, 0), (M, 1), (M, 2), (M, 3), (M, 4), (Rw, 0), (Rw, 1), (Rw, 2),
        (Rw, 3), (Rw, 4), (Rw, 5), (Rw, 6), (Rw, 7), (Rw, 8), (Rw, 9), (Gw, 0),
        (Gw, 1), (Gw, 2), (Gw, 3), (Gw, 4), (Gw, 5), (Gw, 6), (Gw, 7), (Gw, 8),
        (Gw, 9), (Bw, 0), (Bw, 1), (Bw, 2), (Bw, 3), (Bw, 4), (Bw, 5), (Bw, 6),
        (Bw, 7), (Bw, 8), (Bw, 9), (Rx, 0), (Rx, 1), (Rx, 2), (Rx, 3), (Rw, 15),
        (Rw, 14), (Rw, 13), (Rw, 12), (Rw, 11), (Rw, 10), (Gx, 0), (Gx, 1), (Gx, 2),
        (Gx, 3), (Gw, 15), (Gw, 14), (Gw, 13), (Gw, 12), (Gw, 11), (Gw, 10), (Bx, 0),
        (Bx, 1), (Bx, 2), (Bx, 3), (Bw, 15), (Bw, 14), (Bw, 13), (Bw, 12), (Bw, 11),
        (Bw, 10), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0), (Na, 0),
        (Na, 0), (Na, 0),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_regions_in_range() {
        for partitions in 0..=2u8 {
            for shape in 0..64 {
                for pixel in 0..16 {
                    assert!(partition_region(partitions, shape, pixel) <= partitions as usize);
                }
            }
        }
    }

    #[test]
    fn each_region_has_one_fix_up_pixel() {
        for partitions in 0..=2u8 {
            for shape in 0..64 {
                let mut anchors = [0; 3];
                for pixel in 0..16 {
                    if is_fix_up(partitions, shape, pixel) {
                        anchors[partition_region(partitions, shape, pixel)] += 1;
                    }
                }
                assert_eq!([1, 1, 1][..=partitions as usize], anchors[..=partitions as usize]);
                // The first pixel always anchors region 0.
                assert!(is_fix_up(partitions, shape, 0));
            }
        }
    }

    #[test]
    fn bc6h_codes_cover_all_modes() {
        let mut seen = [false; 14];
        for code in BC6H_CODES {
            if let Bc6hCode::Mode(i) = code {
                assert!(!seen[i as usize]);
                seen[i as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(4, BC6H_CODES.iter().filter(|c| **c == Bc6hCode::Reserved).count());
    }

    #[test]
    fn bc6h_field_bits_match_precision() {
        // Every endpoint bit below the declared precision appears exactly once.
        for (fields, mode) in BC6H_FIELDS.iter().zip(BC6H_MODES) {
            let header_bits = if mode.partitions > 0 { 82 } else { 65 };
            let mut masks = [[[0u32; 3]; 2]; 2];
            for (field, bit) in &fields[..header_bits] {
                if let Some((region, endpoint, channel)) = field.endpoint() {
                    let mask = 1u32 << bit;
                    assert_eq!(0, masks[region][endpoint][channel] & mask);
                    masks[region][endpoint][channel] |= mask;
                }
            }
            for region in 0..2 {
                for endpoint in 0..2 {
                    for channel in 0..3 {
                        let bits = mode.precision[region][endpoint][channel];
                        assert_eq!((1u32 << bits) - 1, masks[region][endpoint][channel]);
                    }
                }
            }
        }
    }

    #[test]
    fn bc7_modes_use_128_bits() {
        for (i, mode) in BC7_MODES.iter().enumerate() {
            let endpoints = (mode.partitions as usize + 1) * 2;
            let channel_bits: usize = mode.precision.iter().map(|p| *p as usize).sum();
            let index_bits = 16 * mode.index_precision as usize - (mode.partitions as usize + 1);
            let index2_bits = if mode.index_precision2 > 0 {
                16 * mode.index_precision2 as usize - 1
            } else {
                0
            };
            let total = i
                + 1
                + mode.partition_bits as usize
                + mode.rotation_bits as usize
                + mode.index_mode_bits as usize
                + endpoints * channel_bits
                + mode.p_bits as usize
                + index_bits
                + index2_bits;
            assert_eq!(128, total, "mode {i}");
        }
    }
}

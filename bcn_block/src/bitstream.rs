use crate::InvalidBlock;

/// An LSB first bit reader over a single 8 or 16 byte block.
///
/// The block is loaded into a single little endian integer,
/// so reads that straddle a byte boundary take the remaining high bits
/// of the current byte followed by the low bits of the next byte.
pub(crate) struct Bitstream {
    bits: u128,
    len: u32,
    position: u32,
}

impl Bitstream {
    /// Creates a reader positioned at the first bit of `block`.
    pub fn new(block: &[u8]) -> Self {
        debug_assert!(block.len() <= 16);
        let mut bytes = [0u8; 16];
        let len = block.len().min(16);
        bytes[..len].copy_from_slice(&block[..len]);
        Self {
            bits: u128::from_le_bytes(bytes),
            len: len as u32 * 8,
            position: 0,
        }
    }

    /// The index of the next bit to read.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns `true` if `num_bits` more bits can be read without overflowing the block.
    pub fn can_read(&self, num_bits: u32) -> bool {
        self.position + num_bits <= self.len
    }

    /// Reads up to 8 bits.
    ///
    /// # Panics
    /// Panics if the read would move past the end of the block.
    /// Use [Bitstream::checked_read_bits] for untrusted layouts.
    pub fn read_bits(&mut self, num_bits: u32) -> u8 {
        assert!(num_bits <= 8, "cannot read {num_bits} bits at once");
        assert!(
            self.can_read(num_bits),
            "reading {num_bits} bits at {} overflows a {} bit block",
            self.position,
            self.len
        );

        let mask = (1u128 << num_bits) - 1;
        let bits = (self.bits >> self.position) & mask;
        self.position += num_bits;
        bits as u8
    }

    pub fn read_bit(&mut self) -> u8 {
        self.read_bits(1)
    }

    /// Reads up to 8 bits or returns an error instead of moving past the end of the block.
    pub fn checked_read_bits(&mut self, num_bits: u32) -> Result<u8, InvalidBlock> {
        if self.can_read(num_bits) {
            Ok(self.read_bits(num_bits))
        } else {
            Err(InvalidBlock::EndOfBlock {
                position: self.position,
                num_bits,
            })
        }
    }
}

/// Packs values LSB first to assemble blocks for tests.
#[cfg(test)]
pub(crate) struct BitWriter {
    bits: u128,
    position: u32,
}

#[cfg(test)]
impl BitWriter {
    pub fn new() -> Self {
        Self {
            bits: 0,
            position: 0,
        }
    }

    pub fn write(&mut self, value: u32, num_bits: u32) -> &mut Self {
        assert!(self.position + num_bits <= 128);
        let mask = (1u128 << num_bits) - 1;
        self.bits |= (value as u128 & mask) << self.position;
        self.position += num_bits;
        self
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn finish(&self) -> [u8; 16] {
        self.bits.to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_bits_lsb_first() {
        let mut bits = Bitstream::new(&[0b1010_0110, 0xFF]);
        assert_eq!(0, bits.read_bit());
        assert_eq!(0b11, bits.read_bits(2));
        assert_eq!(0b0100, bits.read_bits(4));
        assert_eq!(7, bits.position());
    }

    #[test]
    fn read_bits_straddle_byte_boundary() {
        // The high 3 bits of the first byte followed by the low 5 bits of the second byte.
        let mut bits = Bitstream::new(&[0b1110_0000, 0b0001_0101]);
        bits.read_bits(5);
        assert_eq!(0b10101_111, bits.read_bits(8));
    }

    #[test]
    fn read_bits_to_end_of_block() {
        let mut bits = Bitstream::new(&[0x80; 8]);
        for _ in 0..7 {
            bits.read_bits(8);
        }
        assert!(bits.can_read(8));
        assert_eq!(0x80, bits.read_bits(8));
        assert!(!bits.can_read(1));
        assert_eq!(0, bits.read_bits(0));
    }

    #[test]
    fn checked_read_bits_overflow() {
        let mut bits = Bitstream::new(&[0xFF; 16]);
        for _ in 0..15 {
            bits.read_bits(8);
        }
        bits.read_bits(5);
        assert_eq!(
            Err(InvalidBlock::EndOfBlock {
                position: 125,
                num_bits: 4
            }),
            bits.checked_read_bits(4)
        );
        assert_eq!(Ok(0b111), bits.checked_read_bits(3));
    }

    #[test]
    #[should_panic]
    fn read_bits_past_end() {
        let mut bits = Bitstream::new(&[0u8; 8]);
        bits.read_bits(8);
        for _ in 0..8 {
            bits.read_bits(8);
        }
    }

    #[test]
    fn bit_writer_matches_reader() {
        let mut writer = BitWriter::new();
        writer.write(0b101, 3).write(0xAB, 8).write(1, 1);
        assert_eq!(12, writer.position());

        let mut bits = Bitstream::new(&writer.finish());
        assert_eq!(0b101, bits.read_bits(3));
        assert_eq!(0xAB, bits.read_bits(8));
        assert_eq!(1, bits.read_bit());
    }
}

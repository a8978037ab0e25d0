//! Byte-indexed lookup tables.

use core::ops::Index;

use crate::reflect::{Width, reverse_bits};

/// The 256 register updates for one CRC parameter set, indexed by byte.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<W: Width>([W; 256]);

impl<W: Width> CrcTable<W> {
    /// All entries, in byte order.
    pub fn entries(&self) -> &[W; 256] {
        &self.0
    }
}

impl<W: Width> Index<u8> for CrcTable<W> {
    type Output = W;

    #[inline]
    fn index(&self, byte: u8) -> &W {
        &self.0[byte as usize]
    }
}

impl<W: Width> core::fmt::Debug for CrcTable<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = (W::BITS / 4) as usize;
        for (i, entry) in self.0.iter().enumerate() {
            write!(f, "0x{entry:0digits$X}, ")?;
            if (i + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Build the lookup table for `polynomial` at width `W::BITS`.
///
/// Each entry is the full bit-at-a-time polynomial division of one byte:
/// the byte is seeded into the low end of the register (bit-reversed first
/// when `reflect_in`), shifted through all `W::BITS` positions, and the
/// remainder is stored reversed when `reflect_out`.
pub fn build_table<W: Width>(polynomial: W, reflect_in: bool, reflect_out: bool) -> CrcTable<W> {
    let shift = W::BITS - 8;
    let mut table = [W::ZERO; 256];

    for (byte, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
        let mut crc = if reflect_in {
            reverse_bits(W::from_byte(byte)) >> shift
        } else {
            W::from_byte(byte)
        };

        for _ in 0..W::BITS {
            crc = if crc & W::TOP_BIT != W::ZERO {
                (crc << 1) ^ polynomial
            } else {
                crc << 1
            };
        }

        *slot = if reflect_out { reverse_bits(crc) } else { crc };
    }

    CrcTable(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_table_matches_well_known_entries() {
        let table = build_table(0x04C1_1DB7u32, true, true);
        assert_eq!(table[0x00], 0x0000_0000);
        assert_eq!(table[0x01], 0x7707_3096);
        assert_eq!(table[0x80], 0xEDB8_8320);
        assert_eq!(table[0xFF], 0x2D02_EF8D);
    }

    #[test]
    fn xmodem_table_matches_well_known_entries() {
        let table = build_table(0x1021u16, false, false);
        assert_eq!(table[0x00], 0x0000);
        assert_eq!(table[0x01], 0x1021);
        assert_eq!(table[0x02], 0x2042);
        assert_eq!(table[0xFF], 0x1EF0);
    }

    #[test]
    fn crc8_table_is_plain_division() {
        let table = build_table(0x07u8, false, false);
        assert_eq!(table[0x00], 0x00);
        assert_eq!(table[0x01], 0x07);
        assert_eq!(table[0x80], 0x89);
    }

    #[test]
    fn building_twice_is_identical() {
        let a = build_table(0x42F0_E1EB_A9EA_3693u64, false, false);
        let b = build_table(0x42F0_E1EB_A9EA_3693u64, false, false);
        assert_eq!(a, b);

        let a = build_table(0x31u8, true, true);
        let b = build_table(0x31u8, true, true);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_byte_maps_to_zero() {
        assert_eq!(build_table(0x9Bu8, true, true)[0], 0);
        assert_eq!(build_table(0x8005u16, true, true)[0], 0);
        assert_eq!(build_table(0x1Bu64, true, true)[0], 0);
    }
}

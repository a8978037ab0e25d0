use crcsum::table::build_table;
use crcsum::{Checksum, Parameters, Variant, compute};
use proptest::prelude::*;

const CHECK: &[u8] = b"123456789";

/// Published check values for every catalogued algorithm.
const CHECK_VALUES: &[(Variant, u64)] = &[
    (Variant::Crc8, 0xF4),
    (Variant::Crc8Cdma2000, 0xDA),
    (Variant::Crc8Darc, 0x15),
    (Variant::Crc8DvbS2, 0xBC),
    (Variant::Crc8Ebu, 0x97),
    (Variant::Crc8ICode, 0x7E),
    (Variant::Crc8Itu, 0xA1),
    (Variant::Crc8Maxim, 0xA1),
    (Variant::Crc8Rohc, 0xD0),
    (Variant::Crc8Wcdma, 0x25),
    (Variant::Crc16A, 0xBF05),
    (Variant::Crc16Arc, 0xBB3D),
    (Variant::Crc16AugCcitt, 0xE5CC),
    (Variant::Crc16Buypass, 0xFEE8),
    (Variant::Crc16CcittFalse, 0x29B1),
    (Variant::Crc16Cdma2000, 0x4C06),
    (Variant::Crc16Dds110, 0x9ECF),
    (Variant::Crc16DectR, 0x007E),
    (Variant::Crc16DectX, 0x007F),
    (Variant::Crc16Dnp, 0xEA82),
    (Variant::Crc16En13757, 0xC2B7),
    (Variant::Crc16Genibus, 0xD64E),
    (Variant::Crc16Kermit, 0x2189),
    (Variant::Crc16Maxim, 0x44C2),
    (Variant::Crc16Mcrf4xx, 0x6F91),
    (Variant::Crc16Modbus, 0x4B37),
    (Variant::Crc16Riello, 0x63D0),
    (Variant::Crc16T10Dif, 0xD0DB),
    (Variant::Crc16Teledisk, 0x0FB3),
    (Variant::Crc16Tms37157, 0x26B1),
    (Variant::Crc16Usb, 0xB4C8),
    (Variant::Crc16X25, 0x906E),
    (Variant::Crc16Xmodem, 0x31C3),
    (Variant::Crc32, 0xCBF4_3926),
    (Variant::Crc32Bzip2, 0xFC89_1918),
    (Variant::Crc32C, 0xE306_9283),
    (Variant::Crc32D, 0x8731_5576),
    (Variant::Crc32Jamcrc, 0x340B_C6D9),
    (Variant::Crc32Mpeg2, 0x0376_E6E7),
    (Variant::Crc32Posix, 0x765E_7680),
    (Variant::Crc32Q, 0x3010_BF7F),
    (Variant::Crc32Xfer, 0xBD0B_E338),
    (Variant::Crc64Ecma, 0x6C40_DF5F_0B49_7347),
    (Variant::Crc64Iso, 0xB909_56C7_75A4_1001),
];

/// Width-erased parameters, for the bitwise reference.
struct Model {
    width: u32,
    poly: u64,
    init: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
}

fn model(variant: Variant) -> Model {
    macro_rules! erase {
        ($p:expr) => {
            Model {
                width: $p.width(),
                poly: $p.poly.into(),
                init: $p.init.into(),
                xor_out: $p.xor_out.into(),
                reflect_in: $p.reflect_in,
                reflect_out: $p.reflect_out,
            }
        };
    }
    match variant.parameters() {
        Parameters::Width8(p) => erase!(p),
        Parameters::Width16(p) => erase!(p),
        Parameters::Width32(p) => erase!(p),
        Parameters::Width64(p) => erase!(p),
    }
}

/// Bit-at-a-time polynomial division, straight from the parameter model.
fn reference(variant: Variant, data: &[u8]) -> u64 {
    let m = model(variant);
    let mask = u64::MAX >> (64 - m.width);
    let top = 1u64 << (m.width - 1);

    let mut reg = m.init;
    for &byte in data {
        let byte = if m.reflect_in { byte.reverse_bits() } else { byte };
        reg ^= u64::from(byte) << (m.width - 8);
        for _ in 0..8 {
            reg = if reg & top != 0 { (reg << 1) ^ m.poly } else { reg << 1 };
            reg &= mask;
        }
    }
    if m.reflect_out {
        reg = reg.reverse_bits() >> (64 - m.width);
    }
    reg ^ m.xor_out
}

#[test]
fn every_variant_reproduces_its_check_value() {
    assert_eq!(CHECK_VALUES.len(), Variant::ALL.len());
    for &(variant, expected) in CHECK_VALUES {
        let crc = compute(variant, CHECK);
        assert_eq!(crc.value(), expected, "{variant}: got {crc}");
        assert_eq!(crc, variant.check(), "{variant}");
        assert_eq!(crc.width(), variant.width(), "{variant}");
    }
}

#[test]
fn reference_agrees_on_check_input() {
    for &variant in Variant::ALL {
        assert_eq!(compute(variant, CHECK).value(), reference(variant, CHECK), "{variant}");
    }
}

#[test]
fn empty_input_matches_reference() {
    for &variant in Variant::ALL {
        assert_eq!(compute(variant, b"").value(), reference(variant, b""), "{variant}");
    }
}

#[test]
fn crc8_maxim_single_zero_byte() {
    let expected = reference(Variant::Crc8Maxim, &[0x00]) as u8;
    assert_eq!(compute(Variant::Crc8Maxim, [0x00u8]), Checksum::U8(expected));
}

#[test]
fn tables_stay_within_width() {
    for bits in [8u32, 16, 32] {
        let limit = 1u64 << bits;
        let entries: Vec<u64> = match bits {
            8 => build_table(0x9Bu8, true, true).entries().iter().map(|&e| u64::from(e)).collect(),
            16 => build_table(0xA097u16, false, false).entries().iter().map(|&e| u64::from(e)).collect(),
            _ => build_table(0xA833_982Bu32, true, true).entries().iter().map(|&e| u64::from(e)).collect(),
        };
        assert!(entries.iter().all(|&e| e < limit), "{bits}-bit table overflowed");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn table_driven_matches_bitwise(
        index in 0..Variant::ALL.len(),
        data in proptest::collection::vec(any::<u8>(), 0..=512),
    ) {
        let variant = Variant::ALL[index];
        prop_assert_eq!(compute(variant, &data).value(), reference(variant, &data));
    }

    #[test]
    fn deterministic(
        index in 0..Variant::ALL.len(),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let variant = Variant::ALL[index];
        prop_assert_eq!(compute(variant, &data), compute(variant, data.clone()));
    }

    #[test]
    fn single_bit_flips_are_detected(
        index in 0..Variant::ALL.len(),
        data in proptest::collection::vec(any::<u8>(), 1..=256),
        position in any::<usize>(),
        bit in 0..8u8,
    ) {
        let variant = Variant::ALL[index];
        let mut flipped = data.clone();
        let position = position % flipped.len();
        flipped[position] ^= 1 << bit;
        prop_assert_ne!(compute(variant, &data), compute(variant, &flipped));
    }
}

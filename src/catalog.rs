//! The fixed catalogue of standard CRC algorithms.
//!
//! Every algorithm is described by the Rocksoft parameter model: register
//! width, generator polynomial (normal form, top bit implied), initial register
//! value, final XOR value and input/output reflection. `init` is given in the
//! unreflected convention used by the published catalogues. Constants are typed
//! at their width, so a value that does not fit is rejected by the compiler.

use core::fmt;
use core::str::FromStr;

use crate::crc::{Algorithm, Checksum};
use crate::reflect::Width;

/// Defining parameters of one CRC algorithm at width `W`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params<W: Width> {
    /// Canonical catalogue name, e.g. `CRC-16/XMODEM`.
    pub name: &'static str,
    pub poly: W,
    pub init: W,
    pub xor_out: W,
    pub reflect_in: bool,
    pub reflect_out: bool,
    /// Published checksum of the ASCII bytes `123456789`.
    pub check: W,
}

impl<W: Width> Params<W> {
    /// Register width in bits.
    pub fn width(&self) -> u32 {
        W::BITS
    }
}

/// The parameters of a [`Variant`], tagged by width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameters {
    Width8(Params<u8>),
    Width16(Params<u16>),
    Width32(Params<u32>),
    Width64(Params<u64>),
}

impl Parameters {
    /// Register width in bits.
    pub fn width(&self) -> u32 {
        match self {
            Self::Width8(p) => p.width(),
            Self::Width16(p) => p.width(),
            Self::Width32(p) => p.width(),
            Self::Width64(p) => p.width(),
        }
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write<W: Width>(f: &mut fmt::Formatter<'_>, p: &Params<W>) -> fmt::Result {
            let digits = (W::BITS / 4) as usize;
            write!(
                f,
                "width={} poly=0x{:0digits$x} init=0x{:0digits$x} refin={} refout={} xorout=0x{:0digits$x} check=0x{:0digits$x} name=\"{}\"",
                W::BITS,
                p.poly,
                p.init,
                p.reflect_in,
                p.reflect_out,
                p.xor_out,
                p.check,
                p.name,
            )
        }

        match self {
            Self::Width8(p) => write(f, p),
            Self::Width16(p) => write(f, p),
            Self::Width32(p) => write(f, p),
            Self::Width64(p) => write(f, p),
        }
    }
}

/// A catalogued algorithm resolved to its width-typed engine.
#[derive(Clone, Copy, Debug)]
pub(crate) enum AnyAlgorithm {
    Width8(&'static Algorithm<u8>),
    Width16(&'static Algorithm<u16>),
    Width32(&'static Algorithm<u32>),
    Width64(&'static Algorithm<u64>),
}

impl AnyAlgorithm {
    pub(crate) fn parameters(self) -> Parameters {
        match self {
            Self::Width8(a) => Parameters::Width8(*a.params()),
            Self::Width16(a) => Parameters::Width16(*a.params()),
            Self::Width32(a) => Parameters::Width32(*a.params()),
            Self::Width64(a) => Parameters::Width64(*a.params()),
        }
    }

    pub(crate) fn checksum(self, data: &[u8]) -> Checksum {
        match self {
            Self::Width8(a) => Checksum::U8(a.checksum(data)),
            Self::Width16(a) => Checksum::U16(a.checksum(data)),
            Self::Width32(a) => Checksum::U32(a.checksum(data)),
            Self::Width64(a) => Checksum::U64(a.checksum(data)),
        }
    }
}

/// Error returned when parsing an algorithm name that is not catalogued.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown CRC algorithm `{0}`; run with --list to see the catalogue")]
pub struct UnknownVariant(pub String);

macro_rules! catalog {
    ($(
        $(#[$doc:meta])*
        $variant:ident => $konst:ident: $ty:ident / $tag:ident {
            name: $name:literal,
            poly: $poly:literal,
            init: $init:literal,
            xor_out: $xor_out:literal,
            refin: $refin:literal,
            refout: $refout:literal,
            check: $check:literal,
            aliases: [$($alias:literal),* $(,)?] $(,)?
        }
    ),* $(,)?) => {
        $(
            $(#[$doc])*
            pub static $konst: Algorithm<$ty> = Algorithm::new(Params {
                name: $name,
                poly: $poly,
                init: $init,
                xor_out: $xor_out,
                reflect_in: $refin,
                reflect_out: $refout,
                check: $check,
            });
        )*

        /// Identifies one catalogued CRC algorithm.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Variant {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        impl Variant {
            /// Every catalogued algorithm, in catalogue order.
            pub const ALL: &'static [Variant] = &[$(Variant::$variant),*];

            pub(crate) fn algorithm(self) -> AnyAlgorithm {
                match self {
                    $(Variant::$variant => AnyAlgorithm::$tag(&$konst),)*
                }
            }

            /// Alternative names this algorithm is published under.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Variant::$variant => &[$($alias),*],)*
                }
            }
        }
    };
}

catalog! {
    Crc8 => CRC_8: u8 / Width8 {
        name: "CRC-8", poly: 0x07, init: 0x00, xor_out: 0x00,
        refin: false, refout: false, check: 0xF4,
        aliases: ["CRC-8/SMBUS"],
    },
    Crc8Cdma2000 => CRC_8_CDMA2000: u8 / Width8 {
        name: "CRC-8/CDMA2000", poly: 0x9B, init: 0xFF, xor_out: 0x00,
        refin: false, refout: false, check: 0xDA,
        aliases: [],
    },
    Crc8Darc => CRC_8_DARC: u8 / Width8 {
        name: "CRC-8/DARC", poly: 0x39, init: 0x00, xor_out: 0x00,
        refin: true, refout: true, check: 0x15,
        aliases: [],
    },
    Crc8DvbS2 => CRC_8_DVB_S2: u8 / Width8 {
        name: "CRC-8/DVB-S2", poly: 0xD5, init: 0x00, xor_out: 0x00,
        refin: false, refout: false, check: 0xBC,
        aliases: [],
    },
    Crc8Ebu => CRC_8_EBU: u8 / Width8 {
        name: "CRC-8/EBU", poly: 0x1D, init: 0xFF, xor_out: 0x00,
        refin: true, refout: true, check: 0x97,
        aliases: ["CRC-8/AES", "CRC-8/TECH-3250"],
    },
    Crc8ICode => CRC_8_I_CODE: u8 / Width8 {
        name: "CRC-8/I-CODE", poly: 0x1D, init: 0xFD, xor_out: 0x00,
        refin: false, refout: false, check: 0x7E,
        aliases: [],
    },
    Crc8Itu => CRC_8_ITU: u8 / Width8 {
        name: "CRC-8/ITU", poly: 0x07, init: 0x00, xor_out: 0x55,
        refin: false, refout: false, check: 0xA1,
        aliases: ["CRC-8/I-432-1"],
    },
    Crc8Maxim => CRC_8_MAXIM: u8 / Width8 {
        name: "CRC-8/MAXIM", poly: 0x31, init: 0x00, xor_out: 0x00,
        refin: true, refout: true, check: 0xA1,
        aliases: ["CRC-8/MAXIM-DOW", "DOW-CRC"],
    },
    Crc8Rohc => CRC_8_ROHC: u8 / Width8 {
        name: "CRC-8/ROHC", poly: 0x07, init: 0xFF, xor_out: 0x00,
        refin: true, refout: true, check: 0xD0,
        aliases: [],
    },
    Crc8Wcdma => CRC_8_WCDMA: u8 / Width8 {
        name: "CRC-8/WCDMA", poly: 0x9B, init: 0x00, xor_out: 0x00,
        refin: true, refout: true, check: 0x25,
        aliases: [],
    },

    Crc16A => CRC_16_A: u16 / Width16 {
        name: "CRC-16/A", poly: 0x1021, init: 0xC6C6, xor_out: 0x0000,
        refin: true, refout: true, check: 0xBF05,
        aliases: ["CRC-16/ISO-IEC-14443-3-A", "CRC-A"],
    },
    Crc16Arc => CRC_16_ARC: u16 / Width16 {
        name: "CRC-16/ARC", poly: 0x8005, init: 0x0000, xor_out: 0x0000,
        refin: true, refout: true, check: 0xBB3D,
        aliases: ["CRC-16", "CRC-16/LHA", "CRC-IBM"],
    },
    Crc16AugCcitt => CRC_16_AUG_CCITT: u16 / Width16 {
        name: "CRC-16/AUG-CCITT", poly: 0x1021, init: 0x1D0F, xor_out: 0x0000,
        refin: false, refout: false, check: 0xE5CC,
        aliases: ["CRC-16/SPI-FUJITSU"],
    },
    Crc16Buypass => CRC_16_BUYPASS: u16 / Width16 {
        name: "CRC-16/BUYPASS", poly: 0x8005, init: 0x0000, xor_out: 0x0000,
        refin: false, refout: false, check: 0xFEE8,
        aliases: ["CRC-16/UMTS", "CRC-16/VERIFONE"],
    },
    Crc16CcittFalse => CRC_16_CCITT_FALSE: u16 / Width16 {
        name: "CRC-16/CCITT-FALSE", poly: 0x1021, init: 0xFFFF, xor_out: 0x0000,
        refin: false, refout: false, check: 0x29B1,
        aliases: ["CRC-16/IBM-3740", "CRC-16/AUTOSAR"],
    },
    Crc16Cdma2000 => CRC_16_CDMA2000: u16 / Width16 {
        name: "CRC-16/CDMA2000", poly: 0xC867, init: 0xFFFF, xor_out: 0x0000,
        refin: false, refout: false, check: 0x4C06,
        aliases: [],
    },
    Crc16Dds110 => CRC_16_DDS_110: u16 / Width16 {
        name: "CRC-16/DDS-110", poly: 0x8005, init: 0x800D, xor_out: 0x0000,
        refin: false, refout: false, check: 0x9ECF,
        aliases: [],
    },
    Crc16DectR => CRC_16_DECT_R: u16 / Width16 {
        name: "CRC-16/DECT-R", poly: 0x0589, init: 0x0000, xor_out: 0x0001,
        refin: false, refout: false, check: 0x007E,
        aliases: ["R-CRC-16"],
    },
    Crc16DectX => CRC_16_DECT_X: u16 / Width16 {
        name: "CRC-16/DECT-X", poly: 0x0589, init: 0x0000, xor_out: 0x0000,
        refin: false, refout: false, check: 0x007F,
        aliases: ["X-CRC-16"],
    },
    Crc16Dnp => CRC_16_DNP: u16 / Width16 {
        name: "CRC-16/DNP", poly: 0x3D65, init: 0x0000, xor_out: 0xFFFF,
        refin: true, refout: true, check: 0xEA82,
        aliases: [],
    },
    Crc16En13757 => CRC_16_EN_13757: u16 / Width16 {
        name: "CRC-16/EN-13757", poly: 0x3D65, init: 0x0000, xor_out: 0xFFFF,
        refin: false, refout: false, check: 0xC2B7,
        aliases: [],
    },
    Crc16Genibus => CRC_16_GENIBUS: u16 / Width16 {
        name: "CRC-16/GENIBUS", poly: 0x1021, init: 0xFFFF, xor_out: 0xFFFF,
        refin: false, refout: false, check: 0xD64E,
        aliases: ["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/I-CODE"],
    },
    Crc16Kermit => CRC_16_KERMIT: u16 / Width16 {
        name: "CRC-16/KERMIT", poly: 0x1021, init: 0x0000, xor_out: 0x0000,
        refin: true, refout: true, check: 0x2189,
        aliases: ["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT"],
    },
    Crc16Maxim => CRC_16_MAXIM: u16 / Width16 {
        name: "CRC-16/MAXIM", poly: 0x8005, init: 0x0000, xor_out: 0xFFFF,
        refin: true, refout: true, check: 0x44C2,
        aliases: ["CRC-16/MAXIM-DOW"],
    },
    Crc16Mcrf4xx => CRC_16_MCRF4XX: u16 / Width16 {
        name: "CRC-16/MCRF4XX", poly: 0x1021, init: 0xFFFF, xor_out: 0x0000,
        refin: true, refout: true, check: 0x6F91,
        aliases: [],
    },
    Crc16Modbus => CRC_16_MODBUS: u16 / Width16 {
        name: "CRC-16/MODBUS", poly: 0x8005, init: 0xFFFF, xor_out: 0x0000,
        refin: true, refout: true, check: 0x4B37,
        aliases: ["MODBUS"],
    },
    Crc16Riello => CRC_16_RIELLO: u16 / Width16 {
        name: "CRC-16/RIELLO", poly: 0x1021, init: 0xB2AA, xor_out: 0x0000,
        refin: true, refout: true, check: 0x63D0,
        aliases: [],
    },
    Crc16T10Dif => CRC_16_T10_DIF: u16 / Width16 {
        name: "CRC-16/T10-DIF", poly: 0x8BB7, init: 0x0000, xor_out: 0x0000,
        refin: false, refout: false, check: 0xD0DB,
        aliases: [],
    },
    Crc16Teledisk => CRC_16_TELEDISK: u16 / Width16 {
        name: "CRC-16/TELEDISK", poly: 0xA097, init: 0x0000, xor_out: 0x0000,
        refin: false, refout: false, check: 0x0FB3,
        aliases: [],
    },
    Crc16Tms37157 => CRC_16_TMS37157: u16 / Width16 {
        name: "CRC-16/TMS37157", poly: 0x1021, init: 0x89EC, xor_out: 0x0000,
        refin: true, refout: true, check: 0x26B1,
        aliases: [],
    },
    Crc16Usb => CRC_16_USB: u16 / Width16 {
        name: "CRC-16/USB", poly: 0x8005, init: 0xFFFF, xor_out: 0xFFFF,
        refin: true, refout: true, check: 0xB4C8,
        aliases: [],
    },
    Crc16X25 => CRC_16_X_25: u16 / Width16 {
        name: "CRC-16/X-25", poly: 0x1021, init: 0xFFFF, xor_out: 0xFFFF,
        refin: true, refout: true, check: 0x906E,
        aliases: ["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "CRC-B"],
    },
    /// The checksum used by XMODEM-CRC and most CCITT framing on serial links.
    Crc16Xmodem => CRC_16_XMODEM: u16 / Width16 {
        name: "CRC-16/XMODEM", poly: 0x1021, init: 0x0000, xor_out: 0x0000,
        refin: false, refout: false, check: 0x31C3,
        aliases: ["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "ZMODEM"],
    },

    /// The Ethernet, zlib and PNG checksum.
    Crc32 => CRC_32: u32 / Width32 {
        name: "CRC-32", poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, xor_out: 0xFFFF_FFFF,
        refin: true, refout: true, check: 0xCBF4_3926,
        aliases: ["CRC-32/ISO-HDLC", "CRC-32/ADCCP", "CRC-32/V-42", "PKZIP"],
    },
    Crc32Bzip2 => CRC_32_BZIP2: u32 / Width32 {
        name: "CRC-32/BZIP2", poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, xor_out: 0xFFFF_FFFF,
        refin: false, refout: false, check: 0xFC89_1918,
        aliases: ["CRC-32/AAL5", "CRC-32/DECT-B"],
    },
    /// Castagnoli; used by iSCSI, SCTP and ext4.
    Crc32C => CRC_32_C: u32 / Width32 {
        name: "CRC-32C", poly: 0x1EDC_6F41, init: 0xFFFF_FFFF, xor_out: 0xFFFF_FFFF,
        refin: true, refout: true, check: 0xE306_9283,
        aliases: ["CRC-32/ISCSI", "CRC-32/CASTAGNOLI"],
    },
    Crc32D => CRC_32_D: u32 / Width32 {
        name: "CRC-32D", poly: 0xA833_982B, init: 0xFFFF_FFFF, xor_out: 0xFFFF_FFFF,
        refin: true, refout: true, check: 0x8731_5576,
        aliases: ["CRC-32/BASE91-D"],
    },
    Crc32Jamcrc => CRC_32_JAMCRC: u32 / Width32 {
        name: "CRC-32/JAMCRC", poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, xor_out: 0x0000_0000,
        refin: true, refout: true, check: 0x340B_C6D9,
        aliases: [],
    },
    Crc32Mpeg2 => CRC_32_MPEG_2: u32 / Width32 {
        name: "CRC-32/MPEG-2", poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, xor_out: 0x0000_0000,
        refin: false, refout: false, check: 0x0376_E6E7,
        aliases: [],
    },
    Crc32Posix => CRC_32_POSIX: u32 / Width32 {
        name: "CRC-32/POSIX", poly: 0x04C1_1DB7, init: 0x0000_0000, xor_out: 0xFFFF_FFFF,
        refin: false, refout: false, check: 0x765E_7680,
        aliases: ["CRC-32/CKSUM"],
    },
    Crc32Q => CRC_32_Q: u32 / Width32 {
        name: "CRC-32Q", poly: 0x8141_41AB, init: 0x0000_0000, xor_out: 0x0000_0000,
        refin: false, refout: false, check: 0x3010_BF7F,
        aliases: ["CRC-32/AIXM"],
    },
    Crc32Xfer => CRC_32_XFER: u32 / Width32 {
        name: "CRC-32/XFER", poly: 0x0000_00AF, init: 0x0000_0000, xor_out: 0x0000_0000,
        refin: false, refout: false, check: 0xBD0B_E338,
        aliases: [],
    },

    Crc64Ecma => CRC_64_ECMA: u64 / Width64 {
        name: "CRC-64/ECMA", poly: 0x42F0_E1EB_A9EA_3693, init: 0x0000_0000_0000_0000,
        xor_out: 0x0000_0000_0000_0000, refin: false, refout: false,
        check: 0x6C40_DF5F_0B49_7347,
        aliases: ["CRC-64/ECMA-182"],
    },
    Crc64Iso => CRC_64_ISO: u64 / Width64 {
        name: "CRC-64/ISO", poly: 0x0000_0000_0000_001B, init: 0xFFFF_FFFF_FFFF_FFFF,
        xor_out: 0xFFFF_FFFF_FFFF_FFFF, refin: true, refout: true,
        check: 0xB909_56C7_75A4_1001,
        aliases: ["CRC-64/GO-ISO"],
    },
}

impl Variant {
    /// The defining parameters of this algorithm.
    pub fn parameters(self) -> Parameters {
        self.algorithm().parameters()
    }

    /// Canonical catalogue name.
    pub fn name(self) -> &'static str {
        match self.algorithm() {
            AnyAlgorithm::Width8(a) => a.params().name,
            AnyAlgorithm::Width16(a) => a.params().name,
            AnyAlgorithm::Width32(a) => a.params().name,
            AnyAlgorithm::Width64(a) => a.params().name,
        }
    }

    /// Register width in bits: 8, 16, 32 or 64.
    pub fn width(self) -> u32 {
        self.parameters().width()
    }

    /// Published checksum of the ASCII bytes `123456789`.
    pub fn check(self) -> Checksum {
        match self.parameters() {
            Parameters::Width8(p) => Checksum::U8(p.check),
            Parameters::Width16(p) => Checksum::U16(p.check),
            Parameters::Width32(p) => Checksum::U32(p.check),
            Parameters::Width64(p) => Checksum::U64(p.check),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uppercase alphanumerics only, so `crc16_xmodem` matches `CRC-16/XMODEM`.
fn normalize(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_uppercase()).collect()
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| {
                normalize(v.name()) == wanted || v.aliases().iter().any(|a| normalize(a) == wanted)
            })
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

use std::ffi::CStr;
use std::fmt;
use std::sync::OnceLock;

use crate::catalog::{Params, Variant};
use crate::reflect::{Width, reverse_bits};
use crate::table::{CrcTable, build_table};

/// A catalogued CRC algorithm together with its lazily built lookup table.
///
/// The table is built by the first caller that needs it and shared by every
/// later computation; concurrent first callers wait for the same build.
pub struct Algorithm<W: Width> {
    params: Params<W>,
    table: OnceLock<CrcTable<W>>,
}

impl<W: Width> Algorithm<W> {
    pub const fn new(params: Params<W>) -> Self {
        Self {
            params,
            table: OnceLock::new(),
        }
    }

    pub fn params(&self) -> &Params<W> {
        &self.params
    }

    /// The lookup table for this algorithm, built on first use.
    pub fn table(&self) -> &CrcTable<W> {
        self.table.get_or_init(|| {
            tracing::debug!(algorithm = self.params.name, "building lookup table");
            build_table(self.params.poly, self.params.reflect_in, self.params.reflect_out)
        })
    }

    /// Checksum of `data`.
    ///
    /// Empty input yields the seeded register XOR `xor_out`, i.e.
    /// `init ^ xor_out` for every catalogued variant whose init reads the same
    /// reflected or not.
    pub fn checksum(&self, data: &[u8]) -> W {
        let p = &self.params;
        // Reflected registers run LSB-first, so the init has to be too.
        let seed = if p.reflect_in { reverse_bits(p.init) } else { p.init };
        update(seed, self.table(), p.reflect_in, p.reflect_out, data) ^ p.xor_out
    }
}

impl<W: Width> fmt::Debug for Algorithm<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("params", &self.params)
            .field("table_built", &self.table.get().is_some())
            .finish()
    }
}

/// Fold `data` into `crc`, one table lookup per byte.
fn update<W: Width>(
    mut crc: W,
    table: &CrcTable<W>,
    reflect_in: bool,
    reflect_out: bool,
    data: &[u8],
) -> W {
    let shift = W::BITS - 8;
    for &byte in data {
        let top = if reflect_in { crc.low_byte() } else { (crc >> shift).low_byte() };
        let rest = if reflect_out { crc.shr_byte() } else { crc.shl_byte() };
        crc = rest ^ table[top ^ byte];
    }
    crc
}

/// Order of the checksum bytes when a checksum is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first, as most serial framings send it.
    #[default]
    Big,
    Little,
}

/// A checksum value, tagged with the width of the algorithm that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Checksum {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Checksum {
    /// Zero-extended value.
    pub fn value(self) -> u64 {
        match self {
            Self::U8(v) => v.widen(),
            Self::U16(v) => v.widen(),
            Self::U32(v) => v.widen(),
            Self::U64(v) => v,
        }
    }

    /// Width in bits.
    pub fn width(self) -> u32 {
        match self {
            Self::U8(_) => u8::BITS,
            Self::U16(_) => u16::BITS,
            Self::U32(_) => u32::BITS,
            Self::U64(_) => u64::BITS,
        }
    }

    /// The `width / 8` bytes of the checksum in `order`.
    pub fn to_bytes(self, order: ByteOrder) -> Vec<u8> {
        let len = (self.width() / 8) as usize;
        let be = self.value().to_be_bytes();
        let mut bytes = be[be.len() - len..].to_vec();
        if order == ByteOrder::Little {
            bytes.reverse();
        }
        bytes
    }
}

impl fmt::Display for Checksum {
    /// Lowercase hex, zero-padded to the width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.width() / 4) as usize;
        write!(f, "{:0digits$x}", self.value())
    }
}

impl From<u8> for Checksum {
    fn from(v: u8) -> Self {
        Self::U8(v)
    }
}

impl From<u16> for Checksum {
    fn from(v: u16) -> Self {
        Self::U16(v)
    }
}

impl From<u32> for Checksum {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<u64> for Checksum {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

/// Compute the `variant` checksum of `data`.
///
/// Accepts anything that views as bytes: slices, arrays, `Vec<u8>`, `&str`,
/// `String`.
pub fn compute(variant: Variant, data: impl AsRef<[u8]>) -> Checksum {
    variant.algorithm().checksum(data.as_ref())
}

/// Compute the `variant` checksum of a NUL-terminated byte run, excluding the
/// terminator.
pub fn compute_cstr(variant: Variant, data: &CStr) -> Checksum {
    compute(variant, data.to_bytes())
}

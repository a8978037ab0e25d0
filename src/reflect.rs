//! Bit reflection and the register widths the engine runs at.

use core::fmt::{Debug, LowerHex, UpperHex};
use core::ops::{BitAnd, BitXor, Shl, Shr};

/// An unsigned register width supported by the engine: `u8`, `u16`, `u32`
/// or `u64`.
pub trait Width:
    Copy
    + Eq
    + Debug
    + LowerHex
    + UpperHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits in the register.
    const BITS: u32;
    /// All bits clear.
    const ZERO: Self;
    /// Only the most significant bit set.
    const TOP_BIT: Self;

    /// Widen a byte into the low byte of the register.
    fn from_byte(byte: u8) -> Self;

    /// The low 8 bits of the register.
    fn low_byte(self) -> u8;

    /// Reverse the order of all `BITS` bits.
    fn reflect(self) -> Self;

    /// Shift left by one byte, dropping everything shifted past the top.
    /// An 8-bit register becomes zero.
    fn shl_byte(self) -> Self;

    /// Shift right by one byte. An 8-bit register becomes zero.
    fn shr_byte(self) -> Self;

    /// Zero-extend into a `u64`.
    fn widen(self) -> u64;
}

macro_rules! impl_width {
    ($($ty:ty),*) => {
        $(
            impl Width for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const TOP_BIT: Self = 1 << (<$ty>::BITS - 1);

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as Self
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn reflect(self) -> Self {
                    self.reverse_bits()
                }

                #[inline]
                fn shl_byte(self) -> Self {
                    self.checked_shl(8).unwrap_or(0)
                }

                #[inline]
                fn shr_byte(self) -> Self {
                    self.checked_shr(8).unwrap_or(0)
                }

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_width!(u8, u16, u32, u64);

/// Reverse the bit order of `value` across its full width, so bit 0 becomes
/// bit `W::BITS - 1`.
#[inline]
pub fn reverse_bits<W: Width>(value: W) -> W {
    value.reflect()
}

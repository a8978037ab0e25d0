//! Checksum trailers for framed payloads.
//!
//! A sealed frame is the payload followed by its checksum, `width / 8` bytes
//! long. Layout for CRC-16 in big-endian order:
//!
//! ```text
//! [0..n)    payload
//! [n]       checksum_h
//! [n + 1]   checksum_l
//! ```

use crate::catalog::Variant;
use crate::crc::{ByteOrder, Checksum, compute};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("frame is {len} bytes, shorter than its {trailer}-byte checksum")]
    Truncated { len: usize, trailer: usize },
    #[error("checksum mismatch: frame carries {carried}, payload computes to {computed}")]
    Mismatch { carried: Checksum, computed: Checksum },
}

/// Append the `variant` checksum of `payload` in `order`.
pub fn seal(variant: Variant, payload: &[u8], order: ByteOrder) -> Vec<u8> {
    let crc = compute(variant, payload);
    let mut frame = Vec::with_capacity(payload.len() + (variant.width() / 8) as usize);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&crc.to_bytes(order));
    tracing::trace!(%variant, len = payload.len(), %crc, "sealed frame");
    frame
}

/// Verify the trailing checksum of `frame` and return the payload before it.
pub fn open(variant: Variant, frame: &[u8], order: ByteOrder) -> Result<&[u8], FrameError> {
    let trailer = (variant.width() / 8) as usize;
    if frame.len() < trailer {
        return Err(FrameError::Truncated {
            len: frame.len(),
            trailer,
        });
    }

    let (payload, raw) = frame.split_at(frame.len() - trailer);
    let computed = compute(variant, payload);
    let carried = read_checksum(computed, raw, order);

    if carried != computed {
        tracing::trace!(%variant, %carried, %computed, "rejected frame");
        return Err(FrameError::Mismatch { carried, computed });
    }

    Ok(payload)
}

/// Decode `raw` as a checksum of the same width as `like`.
fn read_checksum(like: Checksum, raw: &[u8], order: ByteOrder) -> Checksum {
    let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
    let value = match order {
        ByteOrder::Big => raw.iter().fold(0, fold),
        ByteOrder::Little => raw.iter().rev().fold(0, fold),
    };
    match like {
        Checksum::U8(_) => Checksum::U8(value as u8),
        Checksum::U16(_) => Checksum::U16(value as u16),
        Checksum::U32(_) => Checksum::U32(value as u32),
        Checksum::U64(_) => Checksum::U64(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_appends_big_endian_trailer() {
        let frame = seal(Variant::Crc16Xmodem, b"123456789", ByteOrder::Big);
        assert_eq!(frame.len(), 11);
        assert_eq!(&frame[..9], b"123456789");
        assert_eq!(&frame[9..], &[0x31, 0xC3]);
    }

    #[test]
    fn seal_appends_little_endian_trailer() {
        let frame = seal(Variant::Crc32, b"123456789", ByteOrder::Little);
        assert_eq!(&frame[9..], &[0x26, 0x39, 0xF4, 0xCB]);
    }

    #[test]
    fn open_returns_payload() {
        for &variant in Variant::ALL {
            for order in [ByteOrder::Big, ByteOrder::Little] {
                let frame = seal(variant, b"frame payload", order);
                assert_eq!(open(variant, &frame, order), Ok(&b"frame payload"[..]), "{variant}");
            }
        }
    }

    #[test]
    fn open_rejects_corruption() {
        let mut frame = seal(Variant::Crc16Modbus, &[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A], ByteOrder::Little);
        frame[2] ^= 0x40;
        assert!(matches!(
            open(Variant::Crc16Modbus, &frame, ByteOrder::Little),
            Err(FrameError::Mismatch { .. })
        ));
    }

    #[test]
    fn open_rejects_short_frames() {
        assert_eq!(
            open(Variant::Crc32, &[0xAA, 0xBB], ByteOrder::Big),
            Err(FrameError::Truncated { len: 2, trailer: 4 })
        );
    }

    #[test]
    fn empty_payload_round_trips() {
        let frame = seal(Variant::Crc8Itu, &[], ByteOrder::Big);
        assert_eq!(frame, [0x55]);
        assert_eq!(open(Variant::Crc8Itu, &frame, ByteOrder::Big), Ok(&[][..]));
    }
}

//! Table-driven CRC checksums for the standard catalogue of CRC-8, CRC-16,
//! CRC-32 and CRC-64 algorithms.
//! Provides the catalogue, a width-generic engine with lazily built lookup
//! tables, and checksum trailer helpers for framed payloads.

pub mod catalog;
pub mod crc;
pub mod frame;
pub mod reflect;
pub mod table;

pub use catalog::{Params, Parameters, UnknownVariant, Variant};
pub use crc::{Algorithm, ByteOrder, Checksum, compute, compute_cstr};

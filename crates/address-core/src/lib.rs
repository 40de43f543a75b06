//! Legacy Bitcoin address validation.
//!
//! This crate provides pure Rust implementations of:
//! - Base58 decoding with leading-zero restoration
//! - SHA256 double-hashing and Base58Check checksums
//! - Validation of mainnet P2PKH and P2SH addresses

pub mod address;
pub mod base58;
pub mod hash;
pub mod network;

pub use address::{is_valid, is_valid_bytes, validate, validate_payload, AddressError, LegacyAddress};
pub use base58::{DecodeError, Limited};
pub use hash::{checksum, double_sha256};
pub use network::AddressType;

//! SHA256 double-hashing and Base58Check checksums.

use sha2::{Digest, Sha256};

use crate::network::CHECKSUM_LEN;

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(&first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Base58Check checksum: the first four bytes of `double_sha256(data)`.
#[inline]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = double_sha256(data);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&digest[..CHECKSUM_LEN]);
    result
}

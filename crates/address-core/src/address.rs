//! Legacy Bitcoin address validation.
//!
//! Supports mainnet Base58Check addresses only:
//! - P2PKH (Pay to Public Key Hash) - version 0x00, addresses starting with 1
//! - P2SH (Pay to Script Hash) - version 0x05, addresses starting with 3
//!
//! A decoded address is laid out as `version (1) | hash160 (20) | checksum (4)`,
//! where the checksum is the first four bytes of SHA256d over the first 21.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::base58::{self, DecodeError, Limited};
use crate::hash::checksum;
use crate::network::{AddressType, CHECKSUM_LEN, HASH_LEN, PAYLOAD_LEN};

/// Address validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The string contains a character outside the Base58 alphabet.
    #[error(transparent)]
    InvalidCharacter(#[from] DecodeError),
    /// The decoded payload is not 25 bytes. Overlong input reports the size
    /// reached when decoding stopped, which is already past 25.
    #[error("decoded address is {0} bytes, expected 25")]
    WrongLength(usize),
    /// The embedded checksum does not match the recomputed one.
    #[error("checksum mismatch: expected {}, found {}", hex::encode(.expected), hex::encode(.found))]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_LEN],
        found: [u8; CHECKSUM_LEN],
    },
    /// The version byte is not a mainnet P2PKH or P2SH version.
    #[error("unsupported version byte 0x{0:02x}")]
    BadVersion(u8),
}

impl AddressError {
    /// Stable machine-readable tag for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            AddressError::InvalidCharacter(_) => "invalid_character",
            AddressError::WrongLength(_) => "wrong_length",
            AddressError::ChecksumMismatch { .. } => "checksum_mismatch",
            AddressError::BadVersion(_) => "bad_version",
        }
    }
}

/// A validated legacy address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LegacyAddress {
    address_type: AddressType,
    #[serde(serialize_with = "serialize_hex")]
    hash160: [u8; HASH_LEN],
    display: String,
}

fn serialize_hex<S: serde::Serializer>(bytes: &[u8; HASH_LEN], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

impl LegacyAddress {
    /// The type of address.
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// The version byte of the decoded payload.
    pub fn version(&self) -> u8 {
        self.address_type.version()
    }

    /// The 20-byte hash carried by the address.
    pub fn hash160(&self) -> &[u8; HASH_LEN] {
        &self.hash160
    }

    /// The hash160 as lowercase hex.
    pub fn hash160_hex(&self) -> String {
        hex::encode(self.hash160)
    }

    /// The scriptPubKey for this address (used in transaction outputs).
    pub fn script_pubkey(&self) -> Vec<u8> {
        self.address_type.script_pubkey(&self.hash160)
    }

    /// The original address string.
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for LegacyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for LegacyAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Validate a legacy address and return its details.
///
/// The input is not trimmed; surrounding whitespace is rejected as an
/// invalid character.
pub fn validate(address: &str) -> Result<LegacyAddress, AddressError> {
    let decoded = match base58::decode_limited(address, PAYLOAD_LEN)? {
        Limited::Within(bytes) => bytes,
        Limited::Exceeded(len) => return Err(AddressError::WrongLength(len)),
    };
    let (address_type, hash160) = validate_payload(&decoded)?;

    Ok(LegacyAddress {
        address_type,
        hash160,
        display: address.to_string(),
    })
}

/// Validate an already-decoded payload: length, then checksum, then version.
pub fn validate_payload(payload: &[u8]) -> Result<(AddressType, [u8; HASH_LEN]), AddressError> {
    if payload.len() != PAYLOAD_LEN {
        return Err(AddressError::WrongLength(payload.len()));
    }

    let (versioned_hash, embedded) = payload.split_at(PAYLOAD_LEN - CHECKSUM_LEN);
    let expected = checksum(versioned_hash);

    if embedded != expected {
        let mut found = [0u8; CHECKSUM_LEN];
        found.copy_from_slice(embedded);
        return Err(AddressError::ChecksumMismatch { expected, found });
    }

    let version = versioned_hash[0];
    let address_type = AddressType::from_version(version).ok_or(AddressError::BadVersion(version))?;

    let mut hash160 = [0u8; HASH_LEN];
    hash160.copy_from_slice(&versioned_hash[1..]);

    Ok((address_type, hash160))
}

/// Whether `address` is a well-formed, checksummed, mainnet legacy address.
///
/// Never panics; every failure collapses to `false`.
pub fn is_valid(address: &str) -> bool {
    validate(address).is_ok()
}

/// Like [`is_valid`], for untyped input. Bytes that are not UTF-8 are `false`.
pub fn is_valid_bytes(raw: &[u8]) -> bool {
    core::str::from_utf8(raw).map(is_valid).unwrap_or(false)
}

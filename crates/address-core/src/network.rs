//! Mainnet address constants and legacy address types.

use serde::Serialize;

/// Decoded size of a legacy address: version + hash160 + checksum.
pub const PAYLOAD_LEN: usize = 1 + HASH_LEN + CHECKSUM_LEN;

/// Size of the RIPEMD160(SHA256) hash carried by the address.
pub const HASH_LEN: usize = 20;

/// Size of the Base58Check checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Mainnet P2PKH version byte (addresses starting with 1).
pub const P2PKH_VERSION: u8 = 0x00;

/// Mainnet P2SH version byte (addresses starting with 3).
pub const P2SH_VERSION: u8 = 0x05;

/// Version bytes accepted by the validator.
pub const ALLOWED_VERSIONS: [u8; 2] = [P2PKH_VERSION, P2SH_VERSION];

/// mempool.space Esplora API base URL.
pub const MEMPOOL_API_URL: &str = "https://mempool.space/api";

/// blockstream.info Esplora API base URL (alternative, chosen explicitly).
pub const BLOCKSTREAM_API_URL: &str = "https://blockstream.info/api";

/// Legacy address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressType {
    /// P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    #[serde(rename = "P2PKH")]
    P2pkh,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    #[serde(rename = "P2SH")]
    P2sh,
}

impl AddressType {
    /// Map a version byte to its address type. Non-mainnet bytes yield `None`.
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            P2PKH_VERSION => Some(AddressType::P2pkh),
            P2SH_VERSION => Some(AddressType::P2sh),
            _ => None,
        }
    }

    /// The version byte that prefixes this address type's payload.
    pub fn version(&self) -> u8 {
        match self {
            AddressType::P2pkh => P2PKH_VERSION,
            AddressType::P2sh => P2SH_VERSION,
        }
    }

    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2pkh => "P2PKH",
            AddressType::P2sh => "P2SH",
        }
    }

    /// Build the scriptPubKey paying to `hash`.
    pub fn script_pubkey(&self, hash: &[u8; HASH_LEN]) -> Vec<u8> {
        match self {
            AddressType::P2pkh => {
                let mut script = Vec::with_capacity(25);
                script.push(0x76); // OP_DUP
                script.push(0xa9); // OP_HASH160
                script.push(0x14); // Push 20 bytes
                script.extend_from_slice(hash);
                script.push(0x88); // OP_EQUALVERIFY
                script.push(0xac); // OP_CHECKSIG
                script
            }
            AddressType::P2sh => {
                let mut script = Vec::with_capacity(23);
                script.push(0xa9); // OP_HASH160
                script.push(0x14); // Push 20 bytes
                script.extend_from_slice(hash);
                script.push(0x87); // OP_EQUAL
                script
            }
        }
    }
}

impl core::fmt::Display for AddressType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout() {
        assert_eq!(PAYLOAD_LEN, 25);
    }

    #[test]
    fn test_from_version() {
        assert_eq!(AddressType::from_version(0x00), Some(AddressType::P2pkh));
        assert_eq!(AddressType::from_version(0x05), Some(AddressType::P2sh));
        // Testnet P2PKH and P2SH are rejected
        assert_eq!(AddressType::from_version(0x6f), None);
        assert_eq!(AddressType::from_version(0xc4), None);

        for version in ALLOWED_VERSIONS {
            let ty = AddressType::from_version(version).unwrap();
            assert_eq!(ty.version(), version);
        }
    }

    #[test]
    fn test_script_pubkey() {
        let hash = [0x11u8; HASH_LEN];

        let p2pkh = AddressType::P2pkh.script_pubkey(&hash);
        assert_eq!(p2pkh.len(), 25);
        assert_eq!(&p2pkh[..3], &[0x76, 0xa9, 0x14]);
        assert_eq!(&p2pkh[3..23], &hash);
        assert_eq!(&p2pkh[23..], &[0x88, 0xac]);

        let p2sh = AddressType::P2sh.script_pubkey(&hash);
        assert_eq!(p2sh.len(), 23);
        assert_eq!(&p2sh[..2], &[0xa9, 0x14]);
        assert_eq!(p2sh[22], 0x87);
    }

    #[test]
    fn test_display() {
        assert_eq!(AddressType::P2pkh.to_string(), "P2PKH");
        assert_eq!(AddressType::P2sh.to_string(), "P2SH");
    }
}

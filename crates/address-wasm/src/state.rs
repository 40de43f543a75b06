//! Data passed across the JS boundary.

use address_core::{AddressError, LegacyAddress};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Satoshis per bitcoin.
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Reason reported when the JS value is not a string at all.
pub const NOT_A_STRING: &str = "not_a_string";

/// Outcome of inspecting a candidate address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressReport {
    /// The candidate as received (empty if it was not a string).
    pub address: String,
    /// Whether the candidate is a valid mainnet legacy address.
    pub valid: bool,
    /// Failure tag, `None` when valid.
    pub reason: Option<String>,
    /// Human-readable failure message, `None` when valid.
    pub message: Option<String>,
    /// "P2PKH" or "P2SH" when valid.
    pub address_type: Option<String>,
    /// Hex hash160 when valid.
    pub hash160: Option<String>,
}

impl AddressReport {
    /// Build a report from a validation result.
    pub fn from_result(address: &str, result: Result<LegacyAddress, AddressError>) -> Self {
        match result {
            Ok(validated) => AddressReport {
                address: address.to_string(),
                valid: true,
                reason: None,
                message: None,
                address_type: Some(validated.address_type().name().to_string()),
                hash160: Some(validated.hash160_hex()),
            },
            Err(e) => AddressReport {
                address: address.to_string(),
                valid: false,
                reason: Some(e.kind().to_string()),
                message: Some(e.to_string()),
                address_type: None,
                hash160: None,
            },
        }
    }

    /// Report for a JS value that is not a string.
    pub fn not_a_string() -> Self {
        AddressReport {
            address: String::new(),
            valid: false,
            reason: Some(NOT_A_STRING.to_string()),
            message: Some("Address must be a string".to_string()),
            address_type: None,
            hash160: None,
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Funding totals for one side (chain or mempool) of an Esplora address response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainStats {
    pub funded_txo_count: u64,
    pub funded_txo_sum: u64,
    pub spent_txo_count: u64,
    pub spent_txo_sum: u64,
    pub tx_count: u64,
}

impl ChainStats {
    /// Funded minus spent, in satoshis. Negative for a pending spend.
    /// Saturates at the `i64` bounds.
    pub fn net_sats(&self) -> i64 {
        if self.funded_txo_sum >= self.spent_txo_sum {
            i64::try_from(self.funded_txo_sum - self.spent_txo_sum).unwrap_or(i64::MAX)
        } else {
            i64::try_from(self.spent_txo_sum - self.funded_txo_sum)
                .map(|spent| -spent)
                .unwrap_or(i64::MIN)
        }
    }
}

/// Esplora `GET /address/:address` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressStats {
    pub address: String,
    pub chain_stats: ChainStats,
    pub mempool_stats: ChainStats,
}

/// Balance of an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// The address queried.
    pub address: String,
    /// Confirmed balance in satoshis.
    pub confirmed_sats: i64,
    /// Net unconfirmed change in satoshis.
    pub unconfirmed_sats: i64,
    /// Confirmed plus unconfirmed, in BTC.
    pub total_btc: f64,
    /// Number of confirmed transactions.
    pub tx_count: u64,
}

impl BalanceInfo {
    /// Summarize an Esplora response.
    pub fn from_stats(stats: &AddressStats) -> Self {
        let confirmed_sats = stats.chain_stats.net_sats();
        let unconfirmed_sats = stats.mempool_stats.net_sats();

        BalanceInfo {
            address: stats.address.clone(),
            confirmed_sats,
            unconfirmed_sats,
            total_btc: confirmed_sats.saturating_add(unconfirmed_sats) as f64 / SATS_PER_BTC,
            tx_count: stats.chain_stats.tx_count,
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

//! Esplora API integration for fetching address balances.

use address_core::network::{BLOCKSTREAM_API_URL, MEMPOOL_API_URL};
use address_core::validate;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::state::{AddressStats, BalanceInfo};

/// Balance lookup client. Only validated addresses reach the network.
#[wasm_bindgen]
pub struct BalanceApi {
    /// Base URL for the API
    base_url: String,
}

#[wasm_bindgen]
impl BalanceApi {
    /// Create a new API client.
    ///
    /// # Arguments
    /// * `base_url` - Esplora base URL, or one of "mempool" / "blockstream".
    ///   Defaults to mempool.space.
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = match base_url.as_deref() {
            None | Some("") | Some("mempool") => MEMPOOL_API_URL.to_string(),
            Some("blockstream") => BLOCKSTREAM_API_URL.to_string(),
            Some(url) => url.trim_end_matches('/').to_string(),
        };

        BalanceApi { base_url }
    }

    /// Get the balance of `address`.
    ///
    /// Rejects invalid addresses before any request is made.
    pub async fn get_balance(&self, address: &str) -> Result<JsValue, JsValue> {
        let validated = validate(address)
            .map_err(|e| JsValue::from_str(&format!("Invalid address: {}", e)))?;

        let url = self.address_url(validated.as_str());
        let json = self.fetch_json(&url).await.map_err(|e| {
            web_sys::console::warn_2(&JsValue::from_str("Balance fetch failed:"), &e);
            e
        })?;

        let stats: AddressStats = serde_wasm_bindgen::from_value(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse address stats: {:?}", e)))?;

        BalanceInfo::from_stats(&stats).to_js()
    }

    /// Get the base URL.
    #[wasm_bindgen(getter)]
    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.base_url, address)
    }

    /// Fetch JSON from a URL.
    async fn fetch_json(&self, url: &str) -> Result<JsValue, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "HTTP error: {}",
                resp.status()
            )));
        }

        JsFuture::from(resp.json()?).await
    }
}

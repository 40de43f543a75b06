//! WebAssembly bindings for legacy Bitcoin address validation.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Validating Base58Check P2PKH/P2SH addresses
//! - Inspecting why an address was rejected
//! - Fetching the balance of a validated address from a public Esplora API

use wasm_bindgen::prelude::*;

pub mod api;
pub mod state;
pub mod validator;

// Re-export main types for JS access
pub use api::BalanceApi;
pub use validator::{inspect_address, is_valid_address};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

//! Address validation exported to JavaScript.

use address_core::validate;
use wasm_bindgen::prelude::*;

use crate::state::AddressReport;

/// Whether `value` is a valid mainnet legacy address.
///
/// Never throws. Non-string values (numbers, `null`, objects) are `false`.
#[wasm_bindgen]
pub fn is_valid_address(value: JsValue) -> bool {
    value
        .as_string()
        .map(|address| address_core::is_valid(&address))
        .unwrap_or(false)
}

/// Validate `value` and describe the outcome.
#[wasm_bindgen]
pub fn inspect_address(value: JsValue) -> Result<JsValue, JsValue> {
    let report = match value.as_string() {
        Some(address) => AddressReport::from_result(&address, validate(&address)),
        None => AddressReport::not_a_string(),
    };

    report.to_js()
}

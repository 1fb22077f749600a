//! WASM utility functions

use crate::error::TransliterationError;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Construction errors cross the boundary as plain strings
pub(crate) fn to_js(err: TransliterationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

//! Error handling for the browser binding

use navguard_core::GuardError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error type for all browser-side guard operations
#[derive(Error, Debug)]
pub enum WasmError {
    /// A required browser global (`window`, `document`) is missing.
    #[error("Browser environment error: {0}")]
    Environment(String),

    /// Guard configuration or navigation error.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Configuration object could not be converted from JavaScript.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_wasm_bindgen::Error),

    /// JavaScript interop error.
    #[error("JavaScript error: {0}")]
    JavaScript(String),
}

impl From<JsValue> for WasmError {
    fn from(js_val: JsValue) -> Self {
        let message = js_val
            .as_string()
            .unwrap_or_else(|| format!("{js_val:?}"));
        WasmError::JavaScript(message)
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type for browser-side operations
pub type WasmResult<T> = Result<T, WasmError>;

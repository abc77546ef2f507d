//! # Navguard WASM
//!
//! Browser binding for the navigation guard. Load the module on a protected
//! page and install the guard for that area:
//!
//! ```js
//! import init, { installAdminGuard } from "/js/navguard_wasm.js";
//! await init();
//! installAdminGuard();
//! ```
//!
//! `installGuard` takes a plain object with `allowedPrefixes`, `fallbackPath`
//! and `promptMessage`, or a `variant` plus any of those as overrides.

use navguard_core::{GuardFile, GuardVariant, NavigationGuard, PageOrigin};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod logging;

pub use dom::{install, BrowserEffects, DomNode};
pub use error::{WasmError, WasmResult};

/// Install the admin-area guard (fallback `/admin`).
#[wasm_bindgen(js_name = installAdminGuard)]
pub fn install_admin_guard() -> WasmResult<()> {
    install_variant(GuardVariant::Admin)
}

/// Install the user-area guard (fallback `/user/dashboard`).
#[wasm_bindgen(js_name = installUserGuard)]
pub fn install_user_guard() -> WasmResult<()> {
    install_variant(GuardVariant::User)
}

/// Install a guard built from a JavaScript configuration object.
#[wasm_bindgen(js_name = installGuard)]
pub fn install_guard(config: JsValue) -> WasmResult<()> {
    logging::init_logging();
    install(guard_from_js(config)?)
}

/// Build a validated guard from a JavaScript configuration object.
pub fn guard_from_js(config: JsValue) -> WasmResult<NavigationGuard> {
    let file: GuardFile = serde_wasm_bindgen::from_value(config)?;
    Ok(NavigationGuard::new(file.resolve()?)?)
}

/// Classify `href` for a preset as the page at `origin` would, without
/// side effects. Returns e.g. `"allow (exempt-scheme)"` or
/// `"intercept /reports"`.
#[wasm_bindgen(js_name = classifyHref)]
pub fn classify_href(variant: &str, href: &str, origin: &str) -> WasmResult<String> {
    let guard = NavigationGuard::for_variant(variant.parse()?);
    Ok(guard.classify(Some(href), &PageOrigin::new(origin)).to_string())
}

fn install_variant(variant: GuardVariant) -> WasmResult<()> {
    logging::init_logging();
    install(NavigationGuard::for_variant(variant))
}

//! Logging infrastructure for the browser binding

use std::sync::Once;

/// Log a warning message to browser console
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        web_sys::console::warn_1(&format!("WARN: {}", format_args!($($t)*)).into())
    }
}

static INIT: Once = Once::new();

/// Route `tracing` events to the browser console and install the panic hook.
///
/// Safe to call from every install entry point; only the first call has an
/// effect. A subscriber already installed by the host page is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        if let Err(e) = tracing_wasm::try_set_as_global_default() {
            console_warn!("navguard: keeping existing tracing subscriber ({})", e);
        }
    });
}

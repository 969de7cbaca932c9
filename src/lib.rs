//! # parceiros-client
//!
//! Browser-side interaction layer for the parceiros community app: chat
//! sidebar menus and modals, multi-select conversation deletion, group
//! creation, community search/join/create, and readable text colors for
//! colored community cards.
//!
//! The interaction state lives in plain Rust models (`state`, `util`) that
//! compile and test natively. Browser glue (DOM lookups, `fetch`, console
//! logging) is compiled only with the `hydrate` feature and stays at the
//! edges so the core never touches the DOM.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Install the panic hook and console logger for the browser build.
///
/// Safe to call more than once; later calls keep the first logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_client() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_document();
    let _ = console_log::init_with_level(config.log_level());
    log::debug!("parceiros client initialized");
}

//! # client
//!
//! Leptos + WASM front-end for the login and registration screens.
//!
//! Pages and components render the `signon` core; `net` and `util` provide
//! the browser side of its seams (gloo-net transport, cookie token store).
//! Browser-only code is behind the `csr` feature and stubs out otherwise so
//! the crate still builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

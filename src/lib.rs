//! # portfolio-ui
//!
//! WASM interactive layer for a static portfolio page.
//!
//! The page ships as plain HTML and CSS; this crate attaches the behavior:
//! theme switching, the mobile menu, smooth in-page scrolling, scroll-driven
//! reveals, stat counters and the contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution, persistence and toggle |
//! | [`menu`] | Mobile navigation open/close glyph handling |
//! | [`scroll`] | Fragment routing, header offset, back-to-top visibility |
//! | [`reveal`] | Viewport band test and per-element reveal tracking |
//! | [`counter`] | Stat counter state machines and the shared tick set |
//! | [`form`] | Contact form submission flow |
//! | [`config`] | Page selectors, timings and copy |
//! | [`error`] | Startup and configuration errors |
//!
//! Browser glue (`app`, `dom`) is compiled only with the `browser` feature.
//! Everything else is plain Rust and tested natively.

pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;

/// WASM entry point. Installs logging, reads the page config and wires every
/// behavior unit to the document.
///
/// # Errors
///
/// Returns the setup error (as a JS error string) when a required page
/// element is missing or the embedded config is invalid.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let config = match app::load_config() {
        Ok(config) => config,
        Err(err) => {
            init_logging(false);
            log::error!("portfolio setup failed: {err}");
            return Err(wasm_bindgen::JsValue::from_str(&err.to_string()));
        }
    };
    init_logging(config.debug);

    app::mount(config).map_err(|err| {
        log::error!("portfolio setup failed: {err}");
        wasm_bindgen::JsValue::from_str(&err.to_string())
    })
}

#[cfg(feature = "browser")]
fn init_logging(debug: bool) {
    let level = if debug { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

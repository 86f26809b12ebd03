//! # learn-english
//!
//! Leptos + WASM client shell for the Learn English language-learning
//! product. Hash-fragment routing, a dark/light theme flag mirrored onto
//! the document root, placeholder pages, and an inert record-store
//! client stub pending the real backend integration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point — mounts the root component onto `<body>`.
#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("client shell starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}

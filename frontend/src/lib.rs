use wasm_bindgen::prelude::*;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting SlotSwapper frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}

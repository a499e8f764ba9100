mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::info!("starting account portal frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}

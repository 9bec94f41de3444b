use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging, loads the runtime config and then
/// mounts the router.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::error_1(&format!("console logger unavailable: {err}").into());
    }
    // Until config.json arrives only info and above reach the console.
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Starting Gym Portal frontend");

    // Mount only once config is installed; the gate reads the sign-in path at render.
    spawn_local(async move {
        let cfg = config::init().await;
        log::debug!(
            "Runtime config: time_zone={}, sign_in_path={}",
            cfg.time_zone,
            cfg.sign_in_path
        );
        router::mount_app();
    });
}

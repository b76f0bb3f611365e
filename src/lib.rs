// ============================================================================
// MISSION 2050 - CANADA OPPORTUNITY MAP (Yew + MapLibre, Rust/WASM)
// ============================================================================
// - models: marker data, geometry, demo dataset
// - maps: renderer boundary, controller (sync / hover / selection)
// - hooks + components: Yew lifecycle and UI (wasm32 only)
// ============================================================================

pub mod config;
pub mod models;
pub mod maps;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if config::CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Mission 2050 map ({})", config::CONFIG.environment);

    yew::Renderer::<components::App>::new().render();

    Ok(())
}

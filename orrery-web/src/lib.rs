//! Orrery WASM Web Runtime
//!
//! Steps a preset scene once per requestAnimationFrame tick and hands the
//! results to the JavaScript side: geometry buffers once at setup, world and
//! projection matrices every frame. Shader compilation, buffer upload, and
//! draw calls all live in the JS host.

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point — called when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Orrery Web Runtime initialized");
}

/// Create a new application instance for the named preset scene
/// (`"solar"` or `"pyramid"`).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn create_app(canvas_id: String, scene_name: String) -> Result<app::App, JsValue> {
    app::App::new(&canvas_id, &scene_name)
}

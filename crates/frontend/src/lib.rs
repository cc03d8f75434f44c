pub mod app;
pub mod binder;
pub mod pages;
pub mod shared;

use contracts::binding::table::travel_bindings;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);

    // mount_to_body renders synchronously: every trigger element exists here
    match shared::api_utils::api_config() {
        Ok(api) => {
            let bindings = travel_bindings();
            let attached = binder::bind_all(&bindings, &api.base_url);
            log::info!(
                "Attached {}/{} bindings against {}",
                attached,
                bindings.len(),
                api.base_url
            );
        }
        Err(e) => log::error!("API configuration is invalid: {}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod common;
pub mod settings;

use components::dashboard::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    log::trace!("Rendering Dashboard page");
    html! {
        <main class="container mx-auto p-4">
            <Dashboard />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Gym Ops Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API config: {:?}", settings.api_config());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

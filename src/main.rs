mod api;
mod components;
mod config;
mod link;
mod model;
mod state;
mod util;
mod validation;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("fitchat starting");
    yew::Renderer::<App>::new().render();
}

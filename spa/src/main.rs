mod api;
mod app;
mod components;
mod download;
mod notifications;
mod pages;
mod router;
mod session;
mod token;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

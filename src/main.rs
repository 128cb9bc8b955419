use tracing::Level;

mod config;
mod controller;
mod host;
mod theme;
mod web;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    web::boot();
}

// src/main.rs: Repo Deployer (Rust + Yew + WASM)
// Paste a GitHub repository URL, send it to the deploy endpoint, copy the site URL it returns.

mod api;
mod app;
mod clipboard;
mod config;
mod error;
mod logger;
mod state;
mod validate;

fn main() {
    if let Err(e) = logger::init() {
        gloo::console::error!(format!("logger init failed: {e}"));
    }
    yew::Renderer::<app::App>::new().render();
}

mod articles;
mod config;
mod pages;
mod route;
mod storage;
mod ui;
mod util;

fn main() {
    tracing_wasm::set_as_global_default();
    tracing::info!(site = %config::site().base_url, "starting site");
    yew::Renderer::<ui::App>::new().render();
}

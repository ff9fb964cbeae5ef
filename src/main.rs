use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        let config = backend::config::AqiApiConfig::from_env();
        match config.url() {
            Ok(url) => dioxus::logger::tracing::info!(
                "[aqi] upstream: {}",
                backend::config::url_origin(url)
            ),
            Err(e) => dioxus::logger::tracing::warn!(
                "[aqi] {e}; every fetch will fail and the dashboard will show fallback data"
            ),
        }
    }
    dioxus::launch(app::App);
}

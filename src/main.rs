//! Text Extractor - Dioxus web frontend
//!
//! Single-page app: paste text, send it to the extraction service, and
//! render the email addresses and phone numbers it found.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! The extraction service address defaults to `http://localhost:8000` and
//! can be overridden at build time with `EXTRACTOR_API_URL`.

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging
    dioxus::logger::initialize_default();

    if let Some(url) = option_env!("EXTRACTOR_API_URL") {
        api::init_api_url(url.to_string());
    }

    // Launch the Dioxus app
    dioxus::launch(app::App);
}

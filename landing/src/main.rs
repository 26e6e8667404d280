// AI Security Shield pitch site, browser entry point.

use std::sync::Arc;

use aiss_core::Catalog;
use aiss_landing::{App, url_fragment};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let catalog = match Catalog::embedded() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            tracing::error!(%err, "site content failed to load");
            return;
        }
    };
    let fragment = url_fragment();
    tracing::info!(fragment = ?fragment, "mounting pitch site");

    leptos::mount::mount_to_body(move || view! { <App catalog=catalog fragment=fragment.unwrap_or_default() /> });
}

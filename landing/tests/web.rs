//! Browser tests for the mounted site. Run with `wasm-pack test --headless --firefox landing`.
#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use aiss_core::Catalog;
use aiss_landing::App;
use leptos::prelude::*;
use leptos::task::tick;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts a fresh app into its own host element and returns the host.
fn mount(fragment: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let catalog = Arc::new(Catalog::embedded().unwrap());
    let fragment = fragment.to_string();
    leptos::mount::mount_to(host.clone().unchecked_into::<HtmlElement>(), move || {
        view! { <App catalog=catalog fragment=fragment /> }
    })
    .forget();
    host
}

fn active_section(host: &Element) -> String {
    host.query_selector("main")
        .unwrap()
        .unwrap()
        .get_attribute("data-active-section")
        .unwrap()
}

fn count(host: &Element, selector: &str) -> u32 {
    host.query_selector_all(selector).unwrap().length()
}

fn click(host: &Element, selector: &str) {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

#[wasm_bindgen_test]
fn starts_on_home() {
    let host = mount("");
    assert_eq!(active_section(&host), "home");
    assert_eq!(count(&host, "[data-page=home]"), 1);
    assert_eq!(count(&host, "[data-mobile-menu]"), 0);
}

#[wasm_bindgen_test]
fn fragment_selects_the_starting_section() {
    let host = mount("#business");
    assert_eq!(active_section(&host), "business");
    assert_eq!(count(&host, "[data-page=business]"), 1);
}

#[wasm_bindgen_test]
fn unknown_fragment_falls_back_to_home() {
    let host = mount("#pricing");
    assert_eq!(active_section(&host), "home");
}

#[wasm_bindgen_test]
async fn demo_toggle_shows_one_row_per_threat() {
    let host = mount("");
    assert_eq!(count(&host, "[data-demo-row]"), 0);

    click(&host, "[data-demo-toggle]");
    tick().await;
    assert_eq!(count(&host, "[data-demo-row]"), 7);
    let label = host.query_selector("[data-demo-toggle]").unwrap().unwrap().text_content().unwrap();
    assert!(label.contains("Pause Demo"), "button reads {label:?}");

    click(&host, "[data-demo-toggle]");
    tick().await;
    assert_eq!(count(&host, "[data-demo-row]"), 0);
}

#[wasm_bindgen_test]
async fn demo_keeps_playing_across_navigation() {
    let host = mount("");
    click(&host, "[data-demo-toggle]");
    tick().await;

    click(&host, "[data-section=problem]");
    tick().await;
    assert_eq!(active_section(&host), "problem");

    click(&host, "[data-section=home]");
    tick().await;
    assert_eq!(count(&host, "[data-demo-row]"), 7);
}

#[wasm_bindgen_test]
async fn see_solution_navigates() {
    let host = mount("");
    click(&host, "[data-cta=solution]");
    tick().await;
    assert_eq!(active_section(&host), "solution");
    assert_eq!(count(&host, "[data-page=solution]"), 1);
}

#[wasm_bindgen_test]
async fn mobile_selection_closes_the_menu() {
    let host = mount("");
    click(&host, "[data-menu-toggle]");
    tick().await;
    assert_eq!(count(&host, "[data-mobile-menu]"), 1);

    click(&host, "[data-mobile-menu] [data-section=features]");
    tick().await;
    assert_eq!(active_section(&host), "features");
    assert_eq!(count(&host, "[data-mobile-menu]"), 0);
}

#[wasm_bindgen_test]
fn market_stats_start_hidden() {
    let host = mount("#market");
    assert_eq!(active_section(&host), "market");
    assert_eq!(count(&host, "#stats-section"), 1);

    let stats = host.query_selector_all("[data-stat]").unwrap();
    assert_eq!(stats.length(), 4);
    for i in 0..stats.length() {
        let text = stats.item(i).unwrap().text_content().unwrap();
        assert_eq!(text.trim(), "...");
    }
}

//! AI Security Shield pitch site.
//!
//! A single-page Leptos 0.8 CSR app. One [`PitchController`] lives in a
//! reactive signal; the navigation bar, the sections and the statistics
//! observer all drive it through its methods and render from its state.

use std::sync::Arc;

use aiss_core::{Catalog, PitchController, Section};
use leptos::prelude::*;

pub mod icons;
pub mod observer;
pub mod sections;
mod theme;

use sections::{Business, Features, Footer, FounderSection, Home, Market, Nav, Problem, Solution};

/// Root component.
///
/// `fragment` picks the starting section (`#market`, `founder`, ...). An
/// unknown or empty fragment falls back to home.
#[component]
pub fn App(catalog: Arc<Catalog>, #[prop(optional)] fragment: Option<String>) -> impl IntoView {
    let mut controller = PitchController::new();
    if let Some(id) = fragment.as_deref().map(str::trim).filter(|id| !id.trim_start_matches('#').is_empty()) {
        // Rejections are logged by the controller; home stays active.
        let _ = controller.navigate_to(id);
    }
    let deck = RwSignal::new(controller);
    let section = Memo::new(move |_| deck.with(|d| d.active_section()));

    let nav_site = catalog.site.clone();
    let nav_entries = catalog.nav().to_vec();
    let footer_site = catalog.site.clone();
    let footer_founder = catalog.founder.clone();

    let page = move || {
        let catalog = catalog.clone();
        match section.get() {
            Section::Home => view! { <Home deck=deck catalog=catalog /> }.into_any(),
            Section::Problem => view! { <Problem threats=catalog.threats.clone() /> }.into_any(),
            Section::Solution => view! {
                <Solution detections=catalog.detections.clone() recipients=catalog.alert_recipients.clone() />
            }
            .into_any(),
            Section::Features => view! {
                <Features features=catalog.features.clone() use_cases=catalog.use_cases.clone() />
            }
            .into_any(),
            Section::Market => view! {
                <Market
                    deck=deck
                    stats=catalog.stats.clone()
                    regions=catalog.regions.clone()
                    advantages=catalog.advantages.clone()
                />
            }
            .into_any(),
            Section::Business => view! {
                <Business pricing=catalog.pricing.clone() projections=catalog.projections.clone() />
            }
            .into_any(),
            Section::Founder => view! {
                <FounderSection founder=catalog.founder.clone() site=catalog.site.clone() />
            }
            .into_any(),
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-950 via-purple-950 to-slate-900 text-white">
            <Nav deck=deck site=nav_site entries=nav_entries />
            <main class="pt-16" data-active-section=move || section.get().id()>
                {page}
            </main>
            <Footer site=footer_site founder=footer_founder />
        </div>
    }
}

/// Current `location.hash`, if any.
pub fn url_fragment() -> Option<String> {
    web_sys::window()?
        .location()
        .hash()
        .ok()
        .filter(|hash| !hash.is_empty())
}

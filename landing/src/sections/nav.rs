use aiss_core::catalog::{NavEntry, SiteInfo};
use aiss_core::{IconKind, PitchController, Section};
use leptos::prelude::*;

use super::ImageWithFallback;
use crate::icons::Icon;

#[component]
pub fn Nav(deck: RwSignal<PitchController>, site: SiteInfo, entries: Vec<NavEntry>) -> impl IntoView {
    let active = Memo::new(move |_| deck.with(|d| d.active_section()));
    let menu_open = Memo::new(move |_| deck.with(|d| d.menu_open()));
    let desktop = entries.clone();

    view! {
        <nav class="fixed top-0 w-full bg-slate-950/80 backdrop-blur-lg border-b border-purple-500/20 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <div class="relative">
                            <ImageWithFallback
                                src=site.logo_url.clone()
                                alt=format!("{} Logo", site.short_name)
                                class="w-10 h-10 object-contain"
                            >
                                <Icon kind=IconKind::Shield class="w-8 h-8 text-cyan-400" />
                            </ImageWithFallback>
                            <div class="absolute inset-0 bg-cyan-400 blur-xl opacity-50 animate-pulse"></div>
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                            {site.brand.clone()}
                        </span>
                    </div>

                    // Desktop tabs
                    <div class="hidden md:flex gap-6">
                        {desktop
                            .into_iter()
                            .map(|entry| view! { <NavButton deck=deck entry=entry active=active mobile=false /> })
                            .collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle navigation"
                        data-menu-toggle=""
                        on:click=move |_| {
                            deck.update(|d| {
                                d.toggle_menu();
                            })
                        }
                    >
                        {move || {
                            let kind = if menu_open.get() { IconKind::X } else { IconKind::Menu };
                            view! { <Icon kind=kind class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </div>

            // Mobile overlay; any tab selection also closes it
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-slate-900 border-t border-purple-500/20" data-mobile-menu="">
                    {entries
                        .clone()
                        .into_iter()
                        .map(|entry| view! { <NavButton deck=deck entry=entry active=active mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavButton(
    deck: RwSignal<PitchController>,
    entry: NavEntry,
    active: Memo<Section>,
    mobile: bool,
) -> impl IntoView {
    let section = entry.section;
    let class = move || match (mobile, active.get() == section) {
        (false, true) => {
            "flex items-center gap-2 px-4 py-2 rounded-lg transition-all bg-purple-600 text-white shadow-lg shadow-purple-500/50"
        }
        (false, false) => {
            "flex items-center gap-2 px-4 py-2 rounded-lg transition-all text-gray-300 hover:text-white hover:bg-slate-800"
        }
        (true, true) => "w-full flex items-center gap-3 px-6 py-3 bg-purple-600",
        (true, false) => "w-full flex items-center gap-3 px-6 py-3 hover:bg-slate-800",
    };
    let icon_class = if mobile { "w-5 h-5" } else { "w-4 h-4" };

    view! {
        <button
            class=class
            data-section=section.id()
            aria-current=move || (active.get() == section).then_some("page")
            on:click=move |_| {
                deck.update(|d| {
                    d.set_active_section(section);
                })
            }
        >
            <Icon kind=entry.icon class=icon_class />
            {entry.label()}
        </button>
    }
}

use std::sync::Arc;

use aiss_core::{Catalog, IconKind, PitchController, Section};
use leptos::prelude::*;

use crate::icons::Icon;

#[component]
pub fn Home(deck: RwSignal<PitchController>, catalog: Arc<Catalog>) -> impl IntoView {
    let demo = Memo::new(move |_| deck.with(|d| d.demo()));
    let site = catalog.site.clone();
    let feed = Memo::new(move |_| deck.with(|d| d.demo_feed(&catalog)));

    view! {
        <div class="min-h-screen flex items-center justify-center relative overflow-hidden" data-page="home">
            <div class="absolute inset-0 opacity-30">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-purple-500 rounded-full filter blur-3xl animate-pulse"></div>
                <div
                    class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-cyan-500 rounded-full filter blur-3xl animate-pulse"
                    style="animation-delay: 1s"
                ></div>
            </div>

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto">
                <div class="mb-8">
                    <h1 class="text-5xl sm:text-7xl font-black mb-4 leading-tight">
                        <span class="inline-block animate-gradient bg-gradient-to-r from-red-500 via-yellow-500 to-green-500 bg-clip-text text-transparent bg-[length:200%_auto]">
                            "AI SECURITY"
                        </span>
                        <br />
                        <span
                            class="inline-block animate-gradient bg-gradient-to-r from-green-500 via-blue-500 to-purple-500 bg-clip-text text-transparent bg-[length:200%_auto]"
                            style="animation-delay: 0.5s"
                        >
                            "SHIELD"
                        </span>
                    </h1>
                </div>

                <p class="text-2xl sm:text-3xl text-cyan-300 mb-6 font-light">{site.tagline}</p>
                <p class="text-lg text-gray-300 mb-12 max-w-2xl mx-auto">{site.pitch}</p>

                <div class="flex flex-wrap gap-4 justify-center mb-16">
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full font-semibold text-lg shadow-lg shadow-purple-500/50 hover:shadow-xl hover:shadow-purple-500/70 transition-all transform hover:scale-105 flex items-center gap-2"
                        data-cta="solution"
                        on:click=move |_| {
                            deck.update(|d| {
                                d.set_active_section(Section::Solution);
                            })
                        }
                    >
                        "See Solution"
                        <Icon kind=IconKind::ChevronRight />
                    </button>
                    <button
                        class="px-8 py-4 bg-slate-800 border-2 border-cyan-500 rounded-full font-semibold text-lg hover:bg-slate-700 transition-all flex items-center gap-2"
                        data-demo-toggle=""
                        on:click=move |_| {
                            deck.update(|d| {
                                d.toggle_demo();
                            })
                        }
                    >
                        {move || {
                            let kind = if demo.get().is_playing() { IconKind::Pause } else { IconKind::Play };
                            view! { <Icon kind=kind /> }
                        }}
                        <span>{move || demo.get().button_label()}</span>
                    </button>
                </div>

                <Show when=move || demo.get().is_playing()>
                    <div
                        class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-2xl p-8 max-w-3xl mx-auto"
                        data-demo-panel=""
                    >
                        <div class="flex items-center gap-3 mb-6">
                            <div class="relative">
                                <Icon kind=IconKind::Activity class="w-6 h-6 text-red-500 animate-pulse" />
                                <div class="absolute inset-0 bg-red-500 blur-lg opacity-50"></div>
                            </div>
                            <h3 class="text-xl font-bold">"Real-Time Threat Simulation"</h3>
                        </div>
                        <div class="space-y-3">
                            {move || {
                                feed.get()
                                    .into_iter()
                                    .map(|row| {
                                        let style = format!("animation-delay: {}", row.animation_delay());
                                        view! {
                                            <div
                                                class="flex items-center gap-3 p-3 bg-slate-900/50 rounded-lg border border-red-500/20 animate-pulse"
                                                style=style
                                                data-demo-row=""
                                            >
                                                <Icon kind=IconKind::AlertTriangle class="w-5 h-5 text-yellow-500" />
                                                <span class="text-sm">{row.caption()}</span>
                                                <span class="ml-auto text-green-400 text-xs font-mono">"ACTIVE"</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

use aiss_core::catalog::{Region, Stat};
use aiss_core::{IconKind, PitchController, WatchToken, begin_observation};
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::Element;

use super::SectionHeader;
use crate::icons::Icon;
use crate::observer::{DomViewport, ObservationGuard};

#[component]
pub fn Market(
    deck: RwSignal<PitchController>,
    stats: Vec<Stat>,
    regions: Vec<Region>,
    advantages: Vec<String>,
) -> impl IntoView {
    let revealed = Memo::new(move |_| deck.with(|d| d.stats()));
    let stats_ref = NodeRef::<Div>::new();
    let guard = StoredValue::new_local(None::<ObservationGuard>);
    let scope = StoredValue::new(None::<WatchToken>);

    // Observe the statistics grid once it is mounted. A revealed latch
    // never needs another observer.
    Effect::new(move || {
        let Some(el) = stats_ref.get() else {
            return;
        };
        if deck.with_untracked(|d| d.stats().is_revealed()) {
            return;
        }
        let Some(token) = deck.try_update(|d| d.attach_stats_region()).flatten() else {
            return;
        };
        scope.set_value(Some(token));

        let viewport = DomViewport::new(Element::from(el));
        let observation = begin_observation(&viewport, move |sample| {
            deck.try_update(|d| d.on_intersection(token, sample));
        });
        guard.set_value(observation);
    });

    on_cleanup(move || {
        // Disconnect first so no late callback reaches the controller.
        drop(guard.try_update_value(|g| g.take()));
        if let Some(token) = scope.try_get_value().flatten() {
            deck.try_update_untracked(|d| d.release_stats_region(token));
        }
    });

    view! {
        <div class="min-h-screen py-20 px-4" data-page="market">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Massive Market Opportunity"
                    intro="Nigeria's first AI preventive-security platform for Africa"
                    gradient="from-yellow-400 to-orange-400"
                />

                <div id="stats-section" node_ref=stats_ref class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            let label = stat.label.clone();
                            view! {
                                <div class="bg-gradient-to-br from-yellow-900/20 to-orange-900/20 border border-yellow-500/30 rounded-xl p-8 text-center hover:border-yellow-400 transition-all">
                                    <div
                                        class="text-4xl font-black mb-2 bg-gradient-to-r from-yellow-400 to-orange-400 bg-clip-text text-transparent"
                                        data-stat=""
                                    >
                                        {move || stat.display(revealed.get()).to_owned()}
                                    </div>
                                    <div class="text-sm text-gray-400">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-2xl p-8 mb-8">
                    <h3 class="text-3xl font-bold mb-6 text-center">"Continental Scalability"</h3>
                    <div class="grid md:grid-cols-3 gap-6">
                        {regions
                            .into_iter()
                            .map(|region| {
                                view! {
                                    <div class="bg-slate-900/50 border border-cyan-500/20 rounded-lg p-4">
                                        <div class="text-2xl mb-2">{region.country}</div>
                                        <div class="text-sm text-gray-400">{region.market}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="text-center bg-gradient-to-r from-purple-600 to-pink-600 rounded-2xl p-8">
                    <h3 class="text-3xl font-bold mb-4">"🎯 Competitive Advantage"</h3>
                    <p class="text-lg mb-4">"First-to-market AI preventive security for African communities"</p>
                    <ul class="text-left max-w-2xl mx-auto space-y-2">
                        {advantages
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-center gap-3">
                                        <Icon kind=IconKind::Check class="w-5 h-5 flex-shrink-0" />
                                        <span>{item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

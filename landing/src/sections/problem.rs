use aiss_core::IconKind;
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;

#[component]
pub fn Problem(threats: Vec<String>) -> impl IntoView {
    view! {
        <div class="min-h-screen py-20 px-4" data-page="problem">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Nigeria's Security Crisis"
                    intro="Traditional CCTV cameras only record crime; they don't detect, predict, or prevent it. Security agencies lack early-warning systems to sense danger before attacks occur."
                    gradient="from-red-400 to-orange-400"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-12">
                    {threats
                        .into_iter()
                        .map(|threat| {
                            view! {
                                <div class="bg-gradient-to-br from-red-900/20 to-orange-900/20 border border-red-500/30 rounded-xl p-6 hover:border-red-400 transition-all hover:shadow-lg hover:shadow-red-500/20">
                                    <Icon kind=IconKind::AlertTriangle class="w-8 h-8 text-red-400 mb-4" />
                                    <h3 class="text-lg font-semibold mb-2">{threat}</h3>
                                    <div class="h-2 bg-slate-800 rounded-full overflow-hidden">
                                        <div class="h-full bg-gradient-to-r from-red-500 to-orange-500 animate-pulse" style="width: 85%"></div>
                                    </div>
                                    <p class="text-sm text-gray-400 mt-2">"High Risk"</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-2xl p-8 text-center">
                    <h3 class="text-3xl font-bold mb-4 text-red-400">"The Biggest Gap"</h3>
                    <p class="text-lg text-gray-300 max-w-2xl mx-auto">
                        "Institutions lack early-warning systems. By the time traditional security responds, it's often too late. AISS changes this with predictive AI that detects threats before they escalate."
                    </p>
                </div>
            </div>
        </div>
    }
}

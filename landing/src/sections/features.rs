use aiss_core::catalog::{Feature, UseCase};
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;

#[component]
pub fn Features(features: Vec<Feature>, use_cases: Vec<UseCase>) -> impl IntoView {
    view! {
        <div class="min-h-screen py-20 px-4" data-page="features">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Revolutionary Features"
                    intro="What makes AISS truly innovative and market-creating"
                    gradient="from-green-400 to-cyan-400"
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {features
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-xl p-6 hover:border-cyan-400 transition-all hover:shadow-lg hover:shadow-cyan-500/20 group">
                                    <div class="relative mb-4">
                                        <Icon kind=feature.icon class="w-10 h-10 text-cyan-400 group-hover:scale-110 transition-transform" />
                                        <div class="absolute inset-0 bg-cyan-400 blur-xl opacity-0 group-hover:opacity-50 transition-opacity"></div>
                                    </div>
                                    <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
                                    <p class="text-gray-400">{feature.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {use_cases
                        .into_iter()
                        .map(|case| {
                            view! {
                                <div class="bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 rounded-xl p-6 text-center hover:scale-105 transition-transform">
                                    <div class="text-4xl mb-3">{case.emoji}</div>
                                    <h3 class="text-xl font-bold mb-2">{case.title}</h3>
                                    <p class="text-sm text-gray-400">{case.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

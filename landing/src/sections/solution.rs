use aiss_core::IconKind;
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;

#[component]
pub fn Solution(detections: Vec<String>, recipients: Vec<String>) -> impl IntoView {
    view! {
        <div class="min-h-screen py-20 px-4" data-page="solution">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="The AISS Solution"
                    intro="A cross-platform AI system that monitors environments through multiple sensors and detects threats in real-time with instant alerts."
                    gradient="from-cyan-400 via-purple-400 to-pink-400"
                />

                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    <div class="bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 rounded-2xl p-8">
                        <Icon kind=IconKind::Camera class="w-12 h-12 text-cyan-400 mb-4" />
                        <h3 class="text-2xl font-bold mb-4">"What We Detect"</h3>
                        <CheckList items=detections icon=IconKind::Check icon_class="w-5 h-5 text-green-400" />
                    </div>
                    <div class="bg-gradient-to-br from-cyan-900/30 to-blue-900/30 border border-cyan-500/30 rounded-2xl p-8">
                        <Icon kind=IconKind::Radio class="w-12 h-12 text-purple-400 mb-4" />
                        <h3 class="text-2xl font-bold mb-4">"Who Gets Alerted"</h3>
                        <CheckList items=recipients icon=IconKind::Users icon_class="w-5 h-5 text-cyan-400" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CheckList(items: Vec<String>, icon: IconKind, icon_class: &'static str) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex items-center gap-3">
                            <Icon kind=icon class=icon_class />
                            <span>{item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

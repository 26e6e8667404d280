use aiss_core::catalog::{Accent, PricingTier, Projection};
use leptos::prelude::*;

use super::SectionHeader;
use crate::icons::Icon;
use crate::theme::{accent_button, accent_card, accent_text};

#[component]
pub fn Business(pricing: Vec<PricingTier>, projections: Vec<Projection>) -> impl IntoView {
    view! {
        <div class="min-h-screen py-20 px-4" data-page="business">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Revenue Model"
                    intro="Multiple revenue streams for sustainable growth"
                    gradient="from-green-400 to-emerald-400"
                />

                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    {pricing.into_iter().map(|tier| view! { <TierCard tier=tier /> }).collect_view()}
                </div>

                <div class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-2xl p-8 text-center">
                    <h3 class="text-3xl font-bold mb-6">"📊 Financial Projections"</h3>
                    <div class="grid md:grid-cols-3 gap-6 mb-8">
                        {projections
                            .into_iter()
                            .map(|p| {
                                let year_class = format!("text-2xl font-bold mb-2 {}", accent_text(p.accent));
                                view! {
                                    <div>
                                        <div class=year_class>{p.year}</div>
                                        <div class="text-lg text-gray-400">{p.phase}</div>
                                        <div class="text-xl font-semibold mt-2">{p.sites}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    // No deck file is published yet; the button is inert.
                    <button class=accent_button(Accent::Green)>"Download Full Pitch Deck"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    let icon_class = match tier.accent {
        Accent::Green => "w-12 h-12 text-green-400 mb-4",
        Accent::Blue => "w-12 h-12 text-blue-400 mb-4",
        Accent::Purple => "w-12 h-12 text-purple-400 mb-4",
        Accent::Cyan => "w-12 h-12 text-cyan-400 mb-4",
        Accent::Pink => "w-12 h-12 text-pink-400 mb-4",
    };
    let price_class = format!("text-3xl font-black mb-2 {}", accent_text(tier.accent));

    view! {
        <div class=accent_card(tier.accent)>
            <Icon kind=tier.icon class=icon_class />
            <h3 class="text-2xl font-bold mb-4">{tier.name}</h3>
            <div class=price_class>{tier.price}</div>
            <p class="text-gray-400 mb-4">{tier.cadence}</p>
            <ul class="space-y-2 text-sm">
                {tier.audiences.into_iter().map(|a| view! { <li>"• "{a}</li> }).collect_view()}
            </ul>
        </div>
    }
}

use aiss_core::IconKind;
use aiss_core::catalog::{Founder, SiteInfo};
use leptos::prelude::*;

use super::ImageWithFallback;
use crate::icons::Icon;

#[component]
pub fn Footer(site: SiteInfo, founder: Founder) -> impl IntoView {
    view! {
        <footer class="bg-slate-950 border-t border-purple-500/20 py-8 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <div class="flex items-center justify-center gap-3 mb-4">
                    <ImageWithFallback
                        src=site.logo_url
                        alt=format!("{} Logo", site.short_name)
                        class="w-8 h-8 object-contain"
                    >
                        <Icon kind=IconKind::Shield class="w-6 h-6 text-cyan-400" />
                    </ImageWithFallback>
                    <span class="text-lg font-bold">{site.full_name}</span>
                </div>
                <p class="text-gray-400 mb-4">{site.footer_line}</p>
                <div class="flex flex-wrap justify-center gap-4 text-sm text-gray-500 mb-4">
                    <span>{founder.email}</span>
                    <span>"•"</span>
                    <span>{founder.phone}</span>
                </div>
                <p class="text-xs text-gray-600">{site.copyright}</p>
            </div>
        </footer>
    }
}

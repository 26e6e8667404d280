use aiss_core::IconKind;
use aiss_core::catalog::{Founder, SiteInfo};
use leptos::prelude::*;

use super::{ImageWithFallback, SectionHeader};
use crate::icons::Icon;
use crate::theme::{accent_button, social_button};

#[component]
pub fn FounderSection(founder: Founder, site: SiteInfo) -> impl IntoView {
    let phone_href = founder.phone_href();
    let email_href = founder.mailto(None);
    let inquiries = founder
        .inquiries
        .iter()
        .map(|inquiry| (founder.mailto(Some(&inquiry.subject)), inquiry.clone()))
        .collect::<Vec<_>>();

    view! {
        <div class="min-h-screen py-20 px-4" data-page="founder">
            <div class="max-w-5xl mx-auto">
                <SectionHeader
                    title="Meet the Founder"
                    intro="Visionary leader driving innovation in AI-powered security solutions"
                    gradient="from-cyan-400 via-purple-400 to-pink-400"
                />

                <div class="bg-slate-800/50 backdrop-blur-lg border border-purple-500/30 rounded-3xl p-8 md:p-12">
                    <div class="flex flex-col md:flex-row gap-8 items-center md:items-start mb-8">
                        <div class="flex-shrink-0 text-center">
                            <div class="relative inline-block mb-4">
                                <div class="w-48 h-48 rounded-2xl overflow-hidden border-4 border-purple-500 shadow-2xl">
                                    <ImageWithFallback
                                        src=founder.photo_url.clone()
                                        alt=founder.name.clone()
                                        class="w-full h-full object-cover"
                                    >
                                        <div class="w-full h-full bg-gradient-to-br from-cyan-500 via-purple-500 to-pink-500 flex items-center justify-center">
                                            <Icon kind=IconKind::User class="w-32 h-32 text-white" />
                                        </div>
                                    </ImageWithFallback>
                                </div>
                                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500 to-purple-500 rounded-2xl blur-2xl opacity-50 animate-pulse"></div>
                            </div>
                            // A broken logo simply disappears here
                            <div class="flex justify-center mb-4">
                                <ImageWithFallback
                                    src=site.logo_url.clone()
                                    alt=format!("{} Logo", site.short_name)
                                    class="w-24 h-24 object-contain"
                                />
                            </div>
                        </div>

                        <div class="flex-1">
                            <h3 class="text-4xl font-bold mb-2 bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                                {founder.name.clone()}
                            </h3>
                            <p class="text-xl text-purple-400 mb-6">{founder.role.clone()}</p>

                            <div class="space-y-4 mb-8">
                                <div class="flex items-center gap-3 text-gray-300">
                                    <Icon kind=IconKind::Phone class="w-5 h-5 text-cyan-400" />
                                    <a href=phone_href class="hover:text-cyan-400 transition-colors">
                                        {founder.phone.clone()}
                                    </a>
                                </div>
                                <div class="flex items-center gap-3 text-gray-300">
                                    <Icon kind=IconKind::Mail class="w-5 h-5 text-cyan-400" />
                                    <a href=email_href class="hover:text-cyan-400 transition-colors">
                                        {founder.email.clone()}
                                    </a>
                                </div>
                            </div>

                            <div class="flex flex-wrap gap-4">
                                {founder
                                    .socials
                                    .iter()
                                    .cloned()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=social_button(link.icon)
                                            >
                                                <Icon kind=link.icon />
                                                <span>{link.label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 rounded-xl p-6">
                        <h4 class="text-2xl font-bold mb-4 text-center">"Vision & Mission"</h4>
                        <p class="text-gray-300 text-center text-lg leading-relaxed">
                            {format!("\"{}\"", founder.vision)}
                        </p>
                    </div>

                    <div class="mt-8 text-center">
                        <h4 class="text-xl font-semibold mb-4">"Let's Build a Safer Africa Together"</h4>
                        <div class="flex flex-wrap justify-center gap-4">
                            {inquiries
                                .into_iter()
                                .map(|(href, inquiry)| {
                                    view! {
                                        <a href=href class=accent_button(inquiry.accent)>
                                            {inquiry.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

// Pitch site sections
// One component per `Section`, plus the chrome around them.

mod business;
mod features;
mod footer;
mod founder;
mod home;
mod image;
mod market;
mod nav;
mod problem;
mod solution;

pub use business::Business;
pub use features::Features;
pub use footer::Footer;
pub use founder::FounderSection;
pub use home::Home;
pub use image::ImageWithFallback;
pub use market::Market;
pub use nav::Nav;
pub use problem::Problem;
pub use solution::Solution;

use leptos::prelude::*;

/// Centered gradient heading with an intro paragraph.
#[component]
fn SectionHeader(
    title: &'static str,
    intro: &'static str,
    /// Gradient stops, e.g. `from-red-400 to-orange-400`
    gradient: &'static str,
) -> impl IntoView {
    let class = format!("text-5xl font-bold mb-6 bg-gradient-to-r {gradient} bg-clip-text text-transparent");
    view! {
        <div class="text-center mb-16">
            <h2 class=class>{title}</h2>
            <p class="text-xl text-gray-300 max-w-3xl mx-auto">{intro}</p>
        </div>
    }
}

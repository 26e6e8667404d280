//! Tailwind class sets keyed by catalog accents and icons.

use aiss_core::IconKind;
use aiss_core::catalog::Accent;

/// Text color for headings, icons and prices.
pub fn accent_text(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => "text-green-400",
        Accent::Blue => "text-blue-400",
        Accent::Purple => "text-purple-400",
        Accent::Cyan => "text-cyan-400",
        Accent::Pink => "text-pink-400",
    }
}

/// Card background and border.
pub fn accent_card(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => {
            "bg-gradient-to-br from-green-900/30 to-emerald-900/30 border border-green-500/30 rounded-2xl p-8 hover:scale-105 transition-transform"
        }
        Accent::Blue => {
            "bg-gradient-to-br from-blue-900/30 to-indigo-900/30 border border-blue-500/30 rounded-2xl p-8 hover:scale-105 transition-transform"
        }
        Accent::Purple | Accent::Pink => {
            "bg-gradient-to-br from-purple-900/30 to-pink-900/30 border border-purple-500/30 rounded-2xl p-8 hover:scale-105 transition-transform"
        }
        Accent::Cyan => {
            "bg-gradient-to-br from-cyan-900/30 to-blue-900/30 border border-cyan-500/30 rounded-2xl p-8 hover:scale-105 transition-transform"
        }
    }
}

/// Pill-shaped call to action.
pub fn accent_button(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => {
            "px-8 py-4 bg-gradient-to-r from-green-600 to-emerald-600 rounded-full font-bold text-lg shadow-lg hover:shadow-xl transition-all transform hover:scale-105"
        }
        Accent::Blue | Accent::Cyan => {
            "px-8 py-4 bg-gradient-to-r from-cyan-600 to-blue-600 rounded-full font-bold text-lg shadow-lg hover:shadow-xl transition-all transform hover:scale-105"
        }
        Accent::Purple | Accent::Pink => {
            "px-8 py-4 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full font-bold text-lg shadow-lg hover:shadow-xl transition-all transform hover:scale-105"
        }
    }
}

/// Brand colors for social profile buttons.
pub fn social_button(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Facebook => {
            "flex items-center gap-2 px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg transition-all transform hover:scale-105"
        }
        IconKind::Linkedin => {
            "flex items-center gap-2 px-4 py-2 bg-blue-700 hover:bg-blue-800 rounded-lg transition-all transform hover:scale-105"
        }
        IconKind::Twitter => {
            "flex items-center gap-2 px-4 py-2 bg-slate-700 hover:bg-slate-800 rounded-lg transition-all transform hover:scale-105"
        }
        _ => {
            "flex items-center gap-2 px-4 py-2 bg-slate-800 hover:bg-slate-900 rounded-lg transition-all transform hover:scale-105"
        }
    }
}

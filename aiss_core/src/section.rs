//! The closed set of pages reachable from the navigation bar.

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// One content tab of the pitch site.
///
/// Exactly one section is active at any time; [`Section::Home`] is the
/// initial one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero, tagline and the threat simulation demo
    #[default]
    Home,
    /// The security problem being addressed
    Problem,
    /// What the product detects and who gets alerted
    Solution,
    /// Feature cards and use cases
    Features,
    /// Market statistics, regions and competitive advantage
    Market,
    /// Revenue model and projections
    Business,
    /// Founder bio and contact details
    Founder,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Problem,
        Section::Solution,
        Section::Features,
        Section::Market,
        Section::Business,
        Section::Founder,
    ];

    /// Stable lowercase id, used for URL fragments and DOM attributes.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Problem => "problem",
            Section::Solution => "solution",
            Section::Features => "features",
            Section::Market => "market",
            Section::Business => "business",
            Section::Founder => "founder",
        }
    }

    /// Label shown on the navigation button.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Problem => "Problem",
            Section::Solution => "Solution",
            Section::Features => "Features",
            Section::Market => "Market",
            Section::Business => "Business",
            Section::Founder => "Founder",
        }
    }

    /// Whether this section contains the statistics region the scroll
    /// watcher observes.
    pub fn hosts_stats_region(&self) -> bool {
        matches!(self, Section::Market)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Section {
    type Err = NavError;

    /// Accepts a section id, optionally written as a URL fragment (`#market`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

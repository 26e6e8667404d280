//! Read-only marketing content.
//!
//! The catalog is plain data: navigation entries, threat labels, feature
//! cards, statistics, pricing tiers and the founder card. It is parsed from
//! `content/catalog.toml` (embedded at compile time) and never mutated.
//!
//! # Example
//!
//! ```rust
//! use aiss_core::{Catalog, Section};
//!
//! let catalog = Catalog::embedded().unwrap();
//! assert_eq!(catalog.threats.len(), 7);
//! assert_eq!(catalog.nav()[0].section, Section::Home);
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::reveal::RevealState;
use crate::section::Section;

const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.toml");

/// Text shown for a statistic before the reveal.
pub const STAT_PLACEHOLDER: &str = "...";

/// Every icon the site draws. Serialized as kebab-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum IconKind {
    Shield,
    AlertTriangle,
    Zap,
    Activity,
    TrendingUp,
    DollarSign,
    User,
    Users,
    Camera,
    Radio,
    Globe,
    MapPin,
    Target,
    Check,
    ChevronRight,
    Menu,
    X,
    Play,
    Pause,
    Mail,
    Phone,
    Facebook,
    Linkedin,
    Twitter,
    Github,
}

/// Color family of a card, button or heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Accent {
    Green,
    Blue,
    Purple,
    Cyan,
    Pink,
}

/// Brand and footer copy.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct SiteInfo {
    pub brand: String,
    pub full_name: String,
    pub short_name: String,
    pub tagline: String,
    pub pitch: String,
    pub logo_url: String,
    pub footer_line: String,
    pub copyright: String,
}

/// Timing of the threat simulation rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Delay added per row, in milliseconds
    pub stagger_ms: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self { stagger_ms: 200 }
    }
}

/// One navigation button.
#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    /// Section the button activates
    pub section: Section,
    /// Icon drawn before the label
    pub icon: IconKind,
}

impl NavEntry {
    /// Button label.
    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

/// A feature card.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Feature {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

/// A deployment scenario card.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct UseCase {
    pub emoji: String,
    pub title: String,
    pub desc: String,
}

/// A market statistic, hidden behind a placeholder until revealed.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    /// Value to show for the given reveal state.
    pub fn display(&self, reveal: RevealState) -> &str {
        if reveal.is_revealed() {
            &self.value
        } else {
            STAT_PLACEHOLDER
        }
    }
}

/// A country on the expansion map.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Region {
    pub country: String,
    pub market: String,
}

/// A revenue stream.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct PricingTier {
    pub icon: IconKind,
    pub accent: Accent,
    pub name: String,
    pub price: String,
    pub cadence: String,
    pub audiences: Vec<String>,
}

/// A milestone in the financial projections.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Projection {
    pub year: String,
    pub phase: String,
    pub sites: String,
    pub accent: Accent,
}

/// A social profile link.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: String,
    pub url: String,
}

/// A pre-addressed email call to action.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Inquiry {
    pub label: String,
    pub subject: String,
    pub accent: Accent,
}

/// The founder card.
#[derive(Debug, Clone, Deserialize)]
#[allow(missing_docs)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub photo_url: String,
    pub phone: String,
    pub email: String,
    pub vision: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
}

impl Founder {
    /// `tel:` link for the phone number, with the display spacing removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    /// `mailto:` link, optionally with a subject line.
    pub fn mailto(&self, subject: Option<&str>) -> String {
        match subject {
            Some(subject) => format!("mailto:{}?subject={}", self.email, subject.replace(' ', "%20")),
            None => format!("mailto:{}", self.email),
        }
    }
}

/// All static content of the site.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Brand and footer copy
    pub site: SiteInfo,
    /// Threat simulation timing
    #[serde(default)]
    pub demo: DemoSettings,
    nav: Vec<NavEntry>,
    /// Threat labels, in display order
    pub threats: Vec<String>,
    /// "What We Detect" list
    #[serde(default)]
    pub detections: Vec<String>,
    /// "Who Gets Alerted" list
    #[serde(default)]
    pub alert_recipients: Vec<String>,
    /// Feature cards
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Use case cards
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    /// Market statistics
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Expansion regions
    #[serde(default)]
    pub regions: Vec<Region>,
    /// Competitive advantage bullets
    #[serde(default)]
    pub advantages: Vec<String>,
    /// Revenue streams
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
    /// Financial projections
    #[serde(default)]
    pub projections: Vec<Projection>,
    /// Founder card
    pub founder: Founder,
}

impl Catalog {
    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = toml::from_str(source)?;
        catalog.validate()?;
        catalog.nav.sort_by_key(|entry| entry.section);
        tracing::debug!(
            threats = catalog.threats.len(),
            features = catalog.features.len(),
            stats = catalog.stats.len(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for entry in &self.nav {
            if !seen.insert(entry.section) {
                return Err(CatalogError::DuplicateNavEntry(entry.section));
            }
        }
        if let Some(missing) = Section::ALL.into_iter().find(|s| !seen.contains(s)) {
            return Err(CatalogError::MissingNavEntry(missing));
        }
        if self.threats.is_empty() {
            return Err(CatalogError::NoThreats);
        }
        Ok(())
    }

    /// Navigation entries, one per section, in [`Section::ALL`] order.
    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    /// Icon of the navigation entry for `section`.
    pub fn nav_icon(&self, section: Section) -> IconKind {
        self.nav
            .iter()
            .find(|entry| entry.section == section)
            .map(|entry| entry.icon)
            .unwrap_or(IconKind::Shield)
    }
}

//! The view-state controller.
//!
//! [`PitchController`] is the only writer of view state. Every transition is
//! a plain synchronous method; the browser shell wraps one controller in a
//! reactive signal and calls these methods from event handlers.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::demo::{DemoRow, DemoState, staggered_rows};
use crate::error::NavError;
use crate::reveal::{IntersectionSample, RevealLatch, RevealOutcome, RevealState};
use crate::section::Section;
use crate::watcher::{ScrollWatcher, WatchToken};

/// Everything the presentation layer needs to decide what to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// The one visible section
    pub section: Section,
    /// Whether the mobile navigation overlay is open
    pub menu_open: bool,
    /// Threat simulation toggle
    pub demo: DemoState,
    /// Market statistics reveal
    pub stats: RevealState,
}

/// Result of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    /// Section active before the call
    pub previous: Section,
    /// Section active after the call
    pub current: Section,
}

impl SectionChange {
    /// Whether the visible section actually changed.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Owner of the active section, the mobile menu flag, the demo toggle and
/// the statistics reveal.
#[derive(Debug, Default)]
pub struct PitchController {
    section: Section,
    menu_open: bool,
    demo: DemoState,
    stats: RevealLatch,
    watcher: ScrollWatcher,
}

impl PitchController {
    /// Initial state: home, menu closed, demo idle, statistics hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on `section` instead of home.
    pub fn starting_at(section: Section) -> Self {
        Self {
            section,
            ..Self::default()
        }
    }

    /// Show `section`. Always closes the mobile menu. Leaving the market
    /// section ends the statistics observation scope.
    pub fn set_active_section(&mut self, section: Section) -> SectionChange {
        let previous = self.section;
        self.section = section;
        self.menu_open = false;

        if !section.hosts_stats_region() {
            if let Some(token) = self.watcher.release_all() {
                tracing::debug!(?token, "stats observation scope released");
            }
        }

        tracing::debug!(from = %previous, to = %section, "section changed");
        SectionChange {
            previous,
            current: section,
        }
    }

    /// Navigate by section id, e.g. from a URL fragment. Unknown ids are
    /// rejected and leave every piece of state untouched.
    pub fn navigate_to(&mut self, id: &str) -> Result<SectionChange, NavError> {
        let section = id.parse::<Section>().inspect_err(|err| {
            tracing::warn!(%err, "navigation rejected");
        })?;
        Ok(self.set_active_section(section))
    }

    /// Open or close the mobile navigation overlay. Returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "menu toggled");
        self.menu_open
    }

    /// Start or pause the threat simulation. Returns the new state.
    pub fn toggle_demo(&mut self) -> DemoState {
        self.demo = self.demo.toggled();
        tracing::debug!(demo = ?self.demo, "demo toggled");
        self.demo
    }

    /// The currently visible section.
    pub fn active_section(&self) -> Section {
        self.section
    }

    /// Whether the mobile menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Threat simulation state.
    pub fn demo(&self) -> DemoState {
        self.demo
    }

    /// Statistics reveal state.
    pub fn stats(&self) -> RevealState {
        self.stats.state()
    }

    /// Rows of the threat simulation panel; empty while idle.
    pub fn demo_feed(&self, catalog: &Catalog) -> Vec<DemoRow> {
        if self.demo.is_playing() {
            staggered_rows(&catalog.threats, catalog.demo.stagger_ms)
        } else {
            Vec::new()
        }
    }

    /// Begin observing the statistics region. Only possible while the
    /// market section, which contains the region, is visible.
    pub fn attach_stats_region(&mut self) -> Option<WatchToken> {
        if !self.section.hosts_stats_region() {
            return None;
        }
        let token = self.watcher.attach();
        tracing::debug!(?token, "stats observation scope attached");
        Some(token)
    }

    /// End the observation scope identified by `token`, if still live.
    pub fn release_stats_region(&mut self, token: WatchToken) -> bool {
        self.watcher.release(token)
    }

    /// Whether an observation scope is live.
    pub fn is_watching_stats(&self) -> bool {
        self.watcher.is_watching()
    }

    /// Handle an "intersection changed" event from the scope `token`.
    pub fn on_intersection(&mut self, token: WatchToken, sample: IntersectionSample) -> RevealOutcome {
        if !self.watcher.accepts(token) {
            return RevealOutcome::Stale;
        }
        if self.stats.state().is_revealed() {
            return RevealOutcome::AlreadyRevealed;
        }
        if !sample.is_sufficient() {
            return RevealOutcome::BelowThreshold;
        }
        self.stats.reveal();
        tracing::info!(ratio = sample.ratio(), "market statistics revealed");
        RevealOutcome::Revealed
    }

    /// Outbound state for rendering.
    pub fn snapshot(&self) -> ViewState {
        ViewState {
            section: self.section,
            menu_open: self.menu_open,
            demo: self.demo,
            stats: self.stats.state(),
        }
    }
}

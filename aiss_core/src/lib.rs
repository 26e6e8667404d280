//! # aiss-core
//!
//! View state and static content for the AI Security Shield (AISS) pitch site.
//!
//! The site is a single page with tab-style navigation. Everything that is
//! behavior lives here, independent of the browser:
//!
//! - [`section`] - the closed set of pages the navigation switches between
//! - [`controller`] - [`PitchController`], the single owner of view state
//! - [`reveal`] - the one-way latch behind the market statistics reveal
//! - [`watcher`] - observation scopes for the scroll-intersection watcher
//! - [`demo`] - the decorative threat simulation toggle
//! - [`catalog`] - the read-only marketing copy, loaded from TOML
//!
//! ## Example
//!
//! ```rust
//! use aiss_core::{IntersectionSample, PitchController, RevealState, Section};
//!
//! let mut deck = PitchController::new();
//! deck.toggle_menu();
//! deck.set_active_section(Section::Market);
//! assert!(!deck.menu_open());
//!
//! let token = deck.attach_stats_region().expect("market hosts the stats region");
//! deck.on_intersection(token, IntersectionSample::from_ratio(0.45));
//! assert_eq!(deck.stats(), RevealState::Revealed);
//! ```
//!
//! The browser shell lives in the `aiss-landing` crate.

#![warn(missing_docs)]

pub mod catalog;
pub mod controller;
pub mod demo;
pub mod error;
pub mod reveal;
pub mod section;
pub mod watcher;

pub use catalog::{Catalog, IconKind};
pub use controller::{PitchController, SectionChange, ViewState};
pub use demo::{DemoRow, DemoState};
pub use error::{CatalogError, NavError, ObserverError};
pub use reveal::{IntersectionSample, REVEAL_THRESHOLD, RevealLatch, RevealOutcome, RevealState};
pub use section::Section;
pub use watcher::{ScrollWatcher, ViewportObserver, WatchToken, begin_observation};

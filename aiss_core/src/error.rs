//! Error types for navigation, catalog loading and viewport observation.

use thiserror::Error;

use crate::section::Section;

/// Navigation request that does not name a known section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The raw id did not match any [`Section`].
    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

/// Problems found while loading the content catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The TOML document could not be parsed into a catalog.
    #[error("failed to parse content catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A section has no navigation entry, so it could never be reached.
    #[error("no navigation entry for section `{0}`")]
    MissingNavEntry(Section),

    /// A section is listed twice in the navigation.
    #[error("duplicate navigation entry for section `{0}`")]
    DuplicateNavEntry(Section),

    /// The demo and the problem grid both need at least one threat label.
    #[error("content catalog lists no threat labels")]
    NoThreats,
}

/// Reasons a viewport observation could not be started.
///
/// None of these are user-facing: the caller falls back to leaving the
/// statistics hidden.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// The runtime has no intersection observation capability.
    #[error("viewport intersection observation is not supported here")]
    Unsupported,

    /// The watched region is not attached to the document.
    #[error("observed region `{0}` is not in the document")]
    MissingRegion(String),

    /// The platform refused to create or start the observer.
    #[error("viewport observer failed: {0}")]
    Platform(String),
}

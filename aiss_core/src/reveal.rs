//! One-way latch for the market statistics reveal.

use serde::Serialize;

/// Fraction of the statistics region that must be inside the viewport
/// before the numbers are shown.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Whether the market statistics show their values or placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Placeholders are shown
    #[default]
    Hidden,
    /// Values are shown; terminal
    Revealed,
}

impl RevealState {
    /// True once the statistics have been revealed.
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Monotonic hidden -> revealed flag.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    /// Current state of the latch.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Flip the latch. Returns `true` only for the call that actually
    /// moved it from hidden to revealed.
    pub fn reveal(&mut self) -> bool {
        if self.state.is_revealed() {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

/// One "intersection changed" notification for the observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    ratio: f64,
}

impl IntersectionSample {
    /// Sample from a visible-area ratio. Out-of-range values are clamped
    /// to `[0, 1]` and NaN counts as not visible.
    pub fn from_ratio(ratio: f64) -> Self {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        Self { ratio }
    }

    /// Sample from a platform that only reports "sufficiently visible" or not.
    pub fn visible(sufficient: bool) -> Self {
        Self::from_ratio(if sufficient { 1.0 } else { 0.0 })
    }

    /// Visible-area ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether this sample crosses [`REVEAL_THRESHOLD`].
    pub fn is_sufficient(&self) -> bool {
        self.ratio >= REVEAL_THRESHOLD
    }
}

/// What an intersection event did to the reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// This event revealed the statistics.
    Revealed,
    /// Statistics were already revealed; nothing changed.
    AlreadyRevealed,
    /// Region not visible enough; nothing changed.
    BelowThreshold,
    /// Event came from an observation scope that has ended; ignored.
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(latch.reveal());
        assert!(!latch.reveal());
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(IntersectionSample::from_ratio(0.3).is_sufficient());
        assert!(IntersectionSample::from_ratio(0.45).is_sufficient());
        assert!(!IntersectionSample::from_ratio(0.29).is_sufficient());
        assert!(!IntersectionSample::from_ratio(0.0).is_sufficient());
    }

    #[test]
    fn ratios_are_sanitized() {
        assert_eq!(IntersectionSample::from_ratio(f64::NAN).ratio(), 0.0);
        assert_eq!(IntersectionSample::from_ratio(-2.0).ratio(), 0.0);
        assert_eq!(IntersectionSample::from_ratio(7.5).ratio(), 1.0);
    }

    #[test]
    fn boolean_samples() {
        assert!(IntersectionSample::visible(true).is_sufficient());
        assert!(!IntersectionSample::visible(false).is_sufficient());
    }
}

//! The decorative threat simulation on the home section.

use serde::Serialize;

/// Whether the threat simulation panel is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoState {
    /// Panel hidden, button reads "Live Demo"
    #[default]
    Idle,
    /// Panel shown, button reads "Pause Demo"
    Playing,
}

impl DemoState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            DemoState::Idle => DemoState::Playing,
            DemoState::Playing => DemoState::Idle,
        }
    }

    /// True while the simulation panel is shown.
    pub fn is_playing(&self) -> bool {
        matches!(self, DemoState::Playing)
    }

    /// Caption for the toggle button.
    pub fn button_label(&self) -> &'static str {
        match self {
            DemoState::Idle => "Live Demo",
            DemoState::Playing => "Pause Demo",
        }
    }
}

/// One line of the simulation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRow {
    /// Threat label, e.g. "Bandit Attacks"
    pub label: String,
    /// Animation delay for this row
    pub delay_ms: u32,
}

impl DemoRow {
    /// Text shown for the row.
    pub fn caption(&self) -> String {
        format!("{} - Detecting...", self.label)
    }

    /// CSS `animation-delay` value, e.g. `0.4s`.
    pub fn animation_delay(&self) -> String {
        format!("{}s", f64::from(self.delay_ms) / 1000.0)
    }
}

/// Rows for `labels`, each delayed by `index * stagger_ms`.
pub fn staggered_rows(labels: &[String], stagger_ms: u32) -> Vec<DemoRow> {
    labels
        .iter()
        .zip(0u32..)
        .map(|(label, index)| DemoRow {
            label: label.clone(),
            delay_ms: index.saturating_mul(stagger_ms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_is_an_involution() {
        for state in [DemoState::Idle, DemoState::Playing] {
            assert_eq!(state.toggled().toggled(), state);
            assert_ne!(state.toggled(), state);
        }
    }

    #[test]
    fn rows_are_staggered_in_order() {
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let rows = staggered_rows(&labels, 200);
        let delays: Vec<_> = rows.iter().map(|r| r.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400]);
        assert_eq!(rows[1].caption(), "B - Detecting...");
        assert_eq!(rows[2].animation_delay(), "0.4s");
        assert_eq!(rows[0].animation_delay(), "0s");
    }

    #[test]
    fn button_label_follows_state() {
        assert_eq!(DemoState::Idle.button_label(), "Live Demo");
        assert_eq!(DemoState::Playing.button_label(), "Pause Demo");
    }
}

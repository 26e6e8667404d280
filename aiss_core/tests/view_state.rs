//! End-to-end behavior of the view-state controller, driven the way the
//! browser shell drives it.

use std::cell::RefCell;
use std::rc::Rc;

use aiss_core::{
    Catalog, DemoState, IntersectionSample, ObserverError, PitchController, RevealOutcome,
    RevealState, Section, ViewportObserver, begin_observation,
};
use pretty_assertions::assert_eq;

/// Every ordered pair and triple of sections.
fn navigation_sequences() -> Vec<Vec<Section>> {
    let mut sequences = Vec::new();
    for a in Section::ALL {
        for b in Section::ALL {
            sequences.push(vec![a, b]);
            for c in Section::ALL {
                sequences.push(vec![a, b, c]);
            }
        }
    }
    sequences
}

#[test]
fn last_requested_section_wins() {
    for sequence in navigation_sequences() {
        let mut deck = PitchController::new();
        for section in &sequence {
            deck.set_active_section(*section);
            assert_eq!(deck.active_section(), *section);
        }
    }
}

#[test]
fn navigation_always_closes_the_menu() {
    for sequence in navigation_sequences() {
        let mut deck = PitchController::new();
        for section in sequence {
            if !deck.menu_open() {
                deck.toggle_menu();
            }
            deck.set_active_section(section);
            assert!(!deck.menu_open(), "menu left open after navigating to {section}");
        }
    }
}

#[test]
fn toggles_are_involutions() {
    let mut deck = PitchController::new();
    for _ in 0..3 {
        let demo = deck.demo();
        deck.toggle_demo();
        deck.toggle_demo();
        assert_eq!(deck.demo(), demo);

        let menu = deck.menu_open();
        deck.toggle_menu();
        deck.toggle_menu();
        assert_eq!(deck.menu_open(), menu);

        deck.toggle_demo();
    }
}

#[test]
fn navigation_between_menu_toggles_forces_closed() {
    let mut deck = PitchController::new();
    deck.toggle_menu();
    deck.toggle_menu();
    deck.toggle_menu();
    assert!(deck.menu_open());
    deck.set_active_section(Section::Solution);
    deck.toggle_menu();
    assert!(deck.menu_open(), "toggle after forced close reopens");
}

#[test]
fn pitch_walkthrough() {
    let catalog = Catalog::embedded().unwrap();
    let mut deck = PitchController::new();
    let initial = deck.snapshot();
    assert_eq!(initial.section, Section::Home);
    assert!(!initial.menu_open);
    assert_eq!(initial.demo, DemoState::Idle);
    assert_eq!(initial.stats, RevealState::Hidden);

    assert_eq!(deck.toggle_demo(), DemoState::Playing);
    let labels: Vec<_> = deck.demo_feed(&catalog).into_iter().map(|row| row.label).collect();
    assert_eq!(labels, catalog.threats);
    assert_eq!(labels.len(), 7);

    deck.set_active_section(Section::Market);
    let token = deck.attach_stats_region().unwrap();
    assert_eq!(
        deck.on_intersection(token, IntersectionSample::from_ratio(0.45)),
        RevealOutcome::Revealed
    );
    assert_eq!(deck.stats(), RevealState::Revealed);

    deck.set_active_section(Section::Founder);
    assert!(!deck.release_stats_region(token));
    assert_eq!(
        deck.on_intersection(token, IntersectionSample::from_ratio(0.8)),
        RevealOutcome::Stale
    );
    assert_eq!(
        deck.on_intersection(token, IntersectionSample::from_ratio(0.0)),
        RevealOutcome::Stale
    );
    assert_eq!(deck.stats(), RevealState::Revealed);
    assert_eq!(deck.demo(), DemoState::Playing);
}

/// Observer that hands its callback to the test so events can be fired
/// later, including after the guard has been dropped.
#[derive(Default)]
struct ManualViewport {
    callback: Rc<RefCell<Option<Box<dyn FnMut(IntersectionSample)>>>>,
    live: Rc<RefCell<bool>>,
}

struct ManualGuard {
    live: Rc<RefCell<bool>>,
}

impl Drop for ManualGuard {
    fn drop(&mut self) {
        *self.live.borrow_mut() = false;
    }
}

impl ManualViewport {
    fn fire(&self, ratio: f64) {
        if let Some(callback) = self.callback.borrow_mut().as_mut() {
            callback(IntersectionSample::from_ratio(ratio));
        }
    }
}

impl ViewportObserver for ManualViewport {
    type Guard = ManualGuard;

    fn observe(
        &self,
        _threshold: f64,
        on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<ManualGuard, ObserverError> {
        *self.callback.borrow_mut() = Some(on_sample);
        *self.live.borrow_mut() = true;
        Ok(ManualGuard {
            live: self.live.clone(),
        })
    }
}

#[test]
fn observer_callback_drives_the_latch() {
    let deck = Rc::new(RefCell::new(PitchController::starting_at(Section::Market)));
    let viewport = ManualViewport::default();
    let token = deck.borrow_mut().attach_stats_region().unwrap();

    let sink = deck.clone();
    let guard = begin_observation(&viewport, move |sample| {
        sink.borrow_mut().on_intersection(token, sample);
    });
    assert!(guard.is_some());
    assert!(*viewport.live.borrow());

    viewport.fire(0.1);
    assert_eq!(deck.borrow().stats(), RevealState::Hidden);
    viewport.fire(0.6);
    assert_eq!(deck.borrow().stats(), RevealState::Revealed);
    viewport.fire(0.0);
    assert_eq!(deck.borrow().stats(), RevealState::Revealed);

    drop(guard);
    assert!(!*viewport.live.borrow());
}

#[test]
fn stale_event_after_teardown_is_ignored() {
    let deck = Rc::new(RefCell::new(PitchController::starting_at(Section::Market)));
    let viewport = ManualViewport::default();
    let token = deck.borrow_mut().attach_stats_region().unwrap();

    let sink = deck.clone();
    let guard = begin_observation(&viewport, move |sample| {
        sink.borrow_mut().on_intersection(token, sample);
    });

    deck.borrow_mut().set_active_section(Section::Founder);
    drop(guard);
    viewport.fire(0.9);
    assert_eq!(deck.borrow().stats(), RevealState::Hidden);
}

struct NoIntersectionApi;

impl ViewportObserver for NoIntersectionApi {
    type Guard = ();

    fn observe(
        &self,
        _threshold: f64,
        _on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<(), ObserverError> {
        Err(ObserverError::Unsupported)
    }
}

#[test]
fn missing_capability_leaves_stats_hidden() {
    let mut deck = PitchController::starting_at(Section::Market);
    let token = deck.attach_stats_region().unwrap();
    assert!(begin_observation(&NoIntersectionApi, |_| {}).is_none());
    assert_eq!(deck.stats(), RevealState::Hidden);
    deck.set_active_section(Section::Home);
    assert!(!deck.release_stats_region(token));
}

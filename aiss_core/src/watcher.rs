//! Scroll-intersection watcher.
//!
//! Two halves: [`ScrollWatcher`] does the bookkeeping of which observation
//! scope is live, so events from a torn-down scope are recognized as stale;
//! [`ViewportObserver`] is the platform capability that actually reports
//! visibility. The browser implementation lives in the landing crate.

use crate::error::ObserverError;
use crate::reveal::{IntersectionSample, REVEAL_THRESHOLD};

/// Identifies one observation scope of the statistics region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchToken(u64);

/// Tracks the live observation scope, if any.
#[derive(Debug, Default)]
pub struct ScrollWatcher {
    generation: u64,
    live: Option<WatchToken>,
}

impl ScrollWatcher {
    /// Start a new scope. A previous scope, if still live, is superseded.
    pub fn attach(&mut self) -> WatchToken {
        self.generation += 1;
        let token = WatchToken(self.generation);
        self.live = Some(token);
        token
    }

    /// End `token`'s scope. Returns `false` if it was not the live scope.
    pub fn release(&mut self, token: WatchToken) -> bool {
        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    /// End whatever scope is live.
    pub fn release_all(&mut self) -> Option<WatchToken> {
        self.live.take()
    }

    /// Whether an event carrying `token` should be acted on.
    pub fn accepts(&self, token: WatchToken) -> bool {
        self.live == Some(token)
    }

    /// Whether any scope is live.
    pub fn is_watching(&self) -> bool {
        self.live.is_some()
    }
}

/// A runtime capability that reports how much of a region is in view.
///
/// `observe` starts delivering samples to `on_sample` whenever the visible
/// fraction crosses `threshold`. The returned guard owns the observation;
/// dropping it must stop delivery.
pub trait ViewportObserver {
    /// Handle that keeps the observation alive.
    type Guard;

    /// Begin observing.
    fn observe(
        &self,
        threshold: f64,
        on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<Self::Guard, ObserverError>;
}

/// Start observing at [`REVEAL_THRESHOLD`], degrading to `None` when the
/// runtime cannot observe. The failure is logged, never propagated.
pub fn begin_observation<O, F>(observer: &O, on_sample: F) -> Option<O::Guard>
where
    O: ViewportObserver,
    F: FnMut(IntersectionSample) + 'static,
{
    match observer.observe(REVEAL_THRESHOLD, Box::new(on_sample)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            tracing::warn!(%err, "viewport observation unavailable, statistics stay hidden");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn attach_supersedes_previous_scope() {
        let mut watcher = ScrollWatcher::default();
        let first = watcher.attach();
        let second = watcher.attach();
        assert_ne!(first, second);
        assert!(!watcher.accepts(first));
        assert!(watcher.accepts(second));
    }

    #[test]
    fn release_is_idempotent_and_scoped() {
        let mut watcher = ScrollWatcher::default();
        let old = watcher.attach();
        let live = watcher.attach();
        assert!(!watcher.release(old));
        assert!(watcher.is_watching());
        assert!(watcher.release(live));
        assert!(!watcher.release(live));
        assert!(!watcher.is_watching());
        assert!(!watcher.accepts(live));
    }

    #[test]
    fn release_all_returns_live_token() {
        let mut watcher = ScrollWatcher::default();
        assert_eq!(watcher.release_all(), None);
        let token = watcher.attach();
        assert_eq!(watcher.release_all(), Some(token));
        assert!(!watcher.is_watching());
    }

    struct Unsupported;

    impl ViewportObserver for Unsupported {
        type Guard = ();

        fn observe(
            &self,
            _threshold: f64,
            _on_sample: Box<dyn FnMut(IntersectionSample)>,
        ) -> Result<(), ObserverError> {
            Err(ObserverError::Unsupported)
        }
    }

    /// Replays a fixed list of ratios as soon as observation starts.
    struct Scripted(Vec<f64>);

    impl ViewportObserver for Scripted {
        type Guard = f64;

        fn observe(
            &self,
            threshold: f64,
            mut on_sample: Box<dyn FnMut(IntersectionSample)>,
        ) -> Result<f64, ObserverError> {
            for ratio in &self.0 {
                on_sample(IntersectionSample::from_ratio(*ratio));
            }
            Ok(threshold)
        }
    }

    #[test]
    fn missing_capability_degrades_to_none() {
        let seen = Rc::new(RefCell::new(0));
        let counter = seen.clone();
        let guard = begin_observation(&Unsupported, move |_| *counter.borrow_mut() += 1);
        assert!(guard.is_none());
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn observation_uses_reveal_threshold() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let guard = begin_observation(&Scripted(vec![0.1, 0.5]), move |sample| {
            sink.borrow_mut().push(sample.is_sufficient())
        });
        assert_eq!(guard, Some(REVEAL_THRESHOLD));
        assert_eq!(*seen.borrow(), vec![false, true]);
    }
}

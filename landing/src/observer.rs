//! Browser `IntersectionObserver` behind [`ViewportObserver`].
//!
//! The guard owns both the observer and the JS callback; dropping it
//! disconnects the observer, so no callback can fire for a region that has
//! left the page.

use aiss_core::{IntersectionSample, ObserverError, ViewportObserver};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes one element against the browser viewport.
pub struct DomViewport {
    target: Element,
}

impl DomViewport {
    /// Watch `target`.
    pub fn new(target: Element) -> Self {
        Self { target }
    }
}

/// Live DOM observation. Disconnects on drop.
pub struct ObservationGuard {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObservationGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
        tracing::debug!("stats observer disconnected");
    }
}

/// Capability check: older or embedded runtimes lack the constructor.
fn intersection_observer_available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

impl ViewportObserver for DomViewport {
    type Guard = ObservationGuard;

    fn observe(
        &self,
        threshold: f64,
        mut on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<ObservationGuard, ObserverError> {
        if !intersection_observer_available() {
            return Err(ObserverError::Unsupported);
        }
        if !self.target.is_connected() {
            return Err(ObserverError::MissingRegion(self.target.id()));
        }

        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_sample(IntersectionSample::from_ratio(ratio));
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ObserverError::Platform(format!("{err:?}")))?;
        observer.observe(&self.target);
        tracing::debug!(region = %self.target.id(), threshold, "stats observer connected");

        Ok(ObservationGuard {
            observer,
            _callback: callback,
        })
    }
}

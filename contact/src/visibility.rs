//! Scroll-triggered visibility for the contact section.
//!
//! [`use_visibility_trigger`] returns a flag that flips to `true` the first
//! time the anchored element crosses the visibility threshold and never
//! flips back. The flag only gates CSS transition classes.
//!
//! The decision itself is [`VisibilityLatch`], which is browser-free. In the
//! browser the latch is fed by an `IntersectionObserver`; everywhere else
//! (SSR, native tests) the flag simply stays `false`.

use leptos::prelude::*;

use crate::error::{ContactError, Result};

/// Fraction of the section that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// Intersection rectangles are pixel-snapped, so a ratio reported on the
// threshold crossing can land a hair below it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot latch over intersection events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    fired: bool,
}

impl VisibilityLatch {
    /// Latch that fires once `threshold` of the element is visible.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ContactError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            fired: false,
        })
    }

    /// Configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the latch has fired.
    pub fn is_visible(&self) -> bool {
        self.fired
    }

    /// Feed one intersection event.
    ///
    /// Returns `true` only for the first qualifying event; everything after
    /// that is ignored.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fired: false,
        }
    }
}

/// Reactive visibility flag for the element with id `anchor_id`.
///
/// The observer attaches after mount, disconnects itself on the first hit
/// and is released when the owning component is torn down. A missing
/// element or an invalid threshold leaves the flag `false` for good.
pub fn use_visibility_trigger(anchor_id: impl Into<String>, threshold: f64) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let anchor_id = anchor_id.into();

    let latch = match VisibilityLatch::new(threshold) {
        Ok(latch) => latch,
        Err(err) => {
            tracing::warn!(anchor = %anchor_id, "{err}; section will not reveal");
            return visible;
        }
    };

    #[cfg(target_arch = "wasm32")]
    browser::attach(anchor_id, latch, set_visible);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (latch, set_visible);
        tracing::trace!(anchor = %anchor_id, "no viewport outside the browser; reveal disabled");
    }

    visible
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::VisibilityLatch;
    use crate::error::{ContactError, Result};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer plus the JS callback it calls into.
    struct ObserverHandle {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl ObserverHandle {
        fn release(self) {
            self.observer.disconnect();
        }
    }

    pub(super) fn attach(anchor_id: String, latch: VisibilityLatch, set_visible: WriteSignal<bool>) {
        let handle = StoredValue::new_local(None::<ObserverHandle>);

        // The section is only in the DOM once the first render has mounted.
        Effect::new(move || {
            if handle.with_value(Option::is_some) {
                return;
            }
            match observe(&anchor_id, latch, set_visible) {
                Ok(observer) => {
                    tracing::debug!(anchor = %anchor_id, "viewport observer attached");
                    handle.set_value(Some(observer));
                }
                Err(err @ ContactError::ElementNotFound(_)) => {
                    tracing::debug!("{err}; section will not reveal");
                }
                Err(err) => {
                    tracing::warn!("{err}; section will not reveal");
                }
            }
        });

        on_cleanup(move || {
            handle.try_update_value(|slot| {
                if let Some(observer) = slot.take() {
                    observer.release();
                }
            });
        });
    }

    fn observe(
        anchor_id: &str,
        mut latch: VisibilityLatch,
        set_visible: WriteSignal<bool>,
    ) -> Result<ObserverHandle> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ContactError::Observer("no document".into()))?;
        let element = document
            .get_element_by_id(anchor_id)
            .ok_or_else(|| ContactError::ElementNotFound(anchor_id.to_string()))?;

        let threshold = latch.threshold();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        tracing::debug!("contact section revealed");
                        set_visible.set(true);
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| ContactError::Observer(format!("{err:?}")))?;
        observer.observe(&element);

        Ok(ObserverHandle {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        let latch = VisibilityLatch::new(DEFAULT_THRESHOLD).unwrap();
        assert!(!latch.is_visible());
    }

    #[test]
    fn first_qualifying_event_fires_once() {
        let mut latch = VisibilityLatch::default();

        assert!(latch.observe(true, 0.25));
        assert!(latch.is_visible());

        assert!(!latch.observe(true, 0.9));
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn leaving_the_viewport_never_resets() {
        let mut latch = VisibilityLatch::default();
        latch.observe(true, 1.0);
        for _ in 0..3 {
            latch.observe(false, 0.0);
        }
        assert!(latch.is_visible());
    }

    #[test]
    fn events_below_threshold_do_not_fire() {
        let mut latch = VisibilityLatch::default();

        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(false, 0.5));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.1));
    }

    #[test]
    fn ratio_just_under_threshold_is_tolerated() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.0995));
    }

    #[test]
    fn zero_threshold_fires_on_any_intersection() {
        let mut latch = VisibilityLatch::new(0.0).unwrap();
        assert!(latch.observe(true, 0.0));
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                VisibilityLatch::new(threshold),
                Err(ContactError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn hook_stays_hidden_outside_the_browser() {
        let visible = use_visibility_trigger("contact", DEFAULT_THRESHOLD);
        assert!(!visible.get_untracked());
    }

    #[test]
    fn hook_with_invalid_threshold_stays_hidden() {
        let visible = use_visibility_trigger("contact", 2.0);
        assert!(!visible.get_untracked());
    }
}

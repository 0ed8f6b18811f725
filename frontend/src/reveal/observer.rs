use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::policy::RevealPolicy;
use super::tracker::IntersectionSample;

/// Attribute carrying the tracker id on every observed element.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns a browser `IntersectionObserver` and the closure it calls.
///
/// Dropping it disconnects the observer before the closure is freed, so no
/// batch can arrive after teardown.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl RevealObserver {
    pub fn new(
        policy: &RevealPolicy,
        mut on_batch: impl FnMut(Vec<IntersectionSample>) + 'static,
    ) -> Result<Self, JsValue> {
        let policy_for_batch = policy.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let batch: Vec<IntersectionSample> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let id = entry.target().get_attribute(REVEAL_ID_ATTR)?;
                    let visible = policy_for_batch
                        .counts_as_visible(entry.is_intersecting(), entry.intersection_ratio());
                    Some(IntersectionSample::new(id, visible))
                })
                .collect();
            if !batch.is_empty() {
                on_batch(batch);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let thresholds: Array = policy
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);
        options.set_root_margin(&policy.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, id: &str, element: &Element) {
        if let Err(e) = element.set_attribute(REVEAL_ID_ATTR, id) {
            log::warn!("could not tag reveal target {}: {:?}", id, e);
        }
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

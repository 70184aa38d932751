//! Thin RAII wrapper over the browser's `IntersectionObserver`.
//!
//! Callbacks receive [`IntersectionReport`]s keyed by the index of the
//! element in the observed list, so the decision logic in `reveal` and
//! `section` never has to deal with DOM handles.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible to trigger.
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const REVEAL: ObserverConfig = ObserverConfig {
    threshold: 0.1,
    root_margin: "0px",
};

// Trigger line sits 20% below the top edge of the viewport.
pub const SECTION_SPY: ObserverConfig = ObserverConfig {
    threshold: 0.0,
    root_margin: "-20% 0px -80% 0px",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionReport<T> {
    pub target: T,
    pub is_intersecting: bool,
}

/// Live observation of a fixed set of elements. Dropping it unobserves
/// every target and disconnects the observer.
pub struct Subscription {
    observer: IntersectionObserver,
    targets: Vec<Element>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription {
    pub fn observe<F>(targets: Vec<Element>, config: &ObserverConfig, mut on_report: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionReport<usize>>, &Subscriber) + 'static,
    {
        let lookup = targets.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let mut reports = Vec::with_capacity(entries.length() as usize);
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let element = entry.target();
                if let Some(index) = lookup.iter().position(|el| *el == element) {
                    reports.push(IntersectionReport {
                        target: index,
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            }
            on_report(reports, &Subscriber { observer, targets: &lookup });
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.root_margin(config.root_margin);
        init.threshold(&JsValue::from_f64(config.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in &targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for target in &self.targets {
            self.observer.unobserve(target);
        }
        self.observer.disconnect();
    }
}

/// Access to the observed elements from inside a report callback.
pub struct Subscriber<'a> {
    observer: IntersectionObserver,
    targets: &'a [Element],
}

impl Subscriber<'_> {
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.targets.get(index)
    }

    pub fn unobserve(&self, index: usize) {
        if let Some(target) = self.targets.get(index) {
            self.observer.unobserve(target);
        }
    }
}

/// Collects the elements matching `selector` in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

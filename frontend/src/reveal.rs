use js_sys::Array;
use shared::{EnhanceError, RevealConfig, VISIBLE_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, js_error};

const REVEAL_SELECTOR: &str = "[data-reveal]";

/// Fades sections in the first time they scroll into view.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Reveal {
    pub fn mount(document: &Document, config: &RevealConfig) -> Result<Option<Self>, EnhanceError> {
        let elements: Vec<Element> = dom::query_all(document, REVEAL_SELECTOR);
        if elements.is_empty() {
            return Ok(None);
        }

        let threshold = config.threshold;
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if dom::reached_threshold(&entry, threshold) {
                    dom::add_class(&entry.target(), VISIBLE_CLASS);
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

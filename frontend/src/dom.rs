//! Small DOM helpers shared by every enhancement.

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use shared::EnhanceError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserverEntry, NodeList, Window,
};

pub fn js_error(value: JsValue) -> EnhanceError {
    EnhanceError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Anything selectors can be run against.
pub trait Queryable {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue>;
}

impl Queryable for Document {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Queryable for Element {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Queryable for HtmlElement {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn select_first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all<T: JsCast>(root: &impl Queryable, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.select_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(root: &impl Queryable, selector: &str) -> Option<T> {
    root.select_first(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Browsers may report a ratio marginally below the threshold that fired.
const RATIO_TOLERANCE: f64 = 0.01;

pub fn reached_threshold(entry: &IntersectionObserverEntry, threshold: f64) -> bool {
    entry.is_intersecting() && entry.intersection_ratio() + RATIO_TOLERANCE >= threshold
}

/// Horizontal `gap` of a flex/grid container, 0 when unset.
pub fn column_gap(window: &Window, element: &HtmlElement) -> f64 {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("gap").ok())
        .map(|gap| shared::parse_px(&gap))
        .unwrap_or(0.0)
}

/// Touch handlers never call `preventDefault`, so they must not block scrolling.
fn passive_listener(
    target: &EventTarget,
    event_type: &'static str,
    mut handler: impl FnMut() + 'static,
) -> EventListener {
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    };
    EventListener::new_with_options(target, event_type, options, move |_| handler())
}

/// Pause on pointer/touch enter, resume on leave.
pub fn hover_pause_listeners(
    target: &EventTarget,
    pause: impl Fn() + Clone + 'static,
    resume: impl Fn() + Clone + 'static,
) -> Vec<EventListener> {
    vec![
        EventListener::new(target, "mouseenter", {
            let pause = pause.clone();
            move |_| pause()
        }),
        EventListener::new(target, "mouseleave", {
            let resume = resume.clone();
            move |_| resume()
        }),
        passive_listener(target, "touchstart", pause),
        passive_listener(target, "touchend", resume),
    ]
}

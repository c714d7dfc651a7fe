//! Statistic counters that count up once when scrolled into view.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use js_sys::Array;
use shared::{CounterAnimation, CounterConfig, EnhanceError, parse_target};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{self, js_error};
use crate::frame_loop::FrameLoop;

const COUNTER_SELECTOR: &str = "[data-counter]";
const COUNTER_ATTRIBUTE: &str = "data-counter";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct Counters {
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    _running: Rc<RefCell<Vec<FrameLoop>>>,
}

#[derive(Clone)]
struct CounterSlot {
    element: HtmlElement,
    animation: Rc<RefCell<CounterAnimation>>,
}

impl Counters {
    pub fn mount(
        document: &Document,
        config: &CounterConfig,
        reduced_motion: bool,
    ) -> Result<Option<Self>, EnhanceError> {
        let slots: Vec<CounterSlot> = dom::query_all::<HtmlElement>(document, COUNTER_SELECTOR)
            .into_iter()
            .filter_map(|element| {
                let raw = element.get_attribute(COUNTER_ATTRIBUTE).unwrap_or_default();
                match parse_target(&raw) {
                    Ok(target) => Some(CounterSlot {
                        element,
                        animation: Rc::new(RefCell::new(CounterAnimation::new(
                            target,
                            config.duration_ms,
                        ))),
                    }),
                    Err(error) => {
                        zoon::eprintln!("Skipping counter: {error}");
                        None
                    }
                }
            })
            .collect();
        if slots.is_empty() {
            return Ok(None);
        }

        let running = Rc::new(RefCell::new(Vec::new()));
        if reduced_motion {
            for slot in &slots {
                let frame = slot.animation.borrow_mut().finish();
                slot.element.set_text_content(Some(&frame.text));
            }
            return Ok(Some(Self {
                observer: None,
                _running: running,
            }));
        }

        let callback: ObserverCallback = Closure::wrap(Box::new({
            let slots = slots.clone();
            let running = Rc::clone(&running);
            let threshold = config.threshold;
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !dom::reached_threshold(&entry, threshold) {
                        continue;
                    }
                    let target = entry.target();
                    let Some(slot) = slots.iter().find(|slot| *slot.element == target) else {
                        continue;
                    };
                    if !slot.animation.borrow_mut().mark_animated() {
                        continue;
                    }
                    observer.unobserve(&target);
                    running.borrow_mut().push(animate(slot.clone()));
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        for slot in &slots {
            observer.observe(&slot.element);
        }

        zoon::println!("Observing {} counters", slots.len());
        Ok(Some(Self {
            observer: Some((observer, callback)),
            _running: running,
        }))
    }
}

fn animate(slot: CounterSlot) -> FrameLoop {
    FrameLoop::start(move |timestamp| {
        let frame = slot.animation.borrow_mut().frame(timestamp);
        slot.element.set_text_content(Some(&frame.text));
        if frame.done {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

impl Drop for Counters {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
    }
}

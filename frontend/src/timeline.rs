use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use shared::{EnhanceError, TimelineConfig, TimelineScroller};
use web_sys::{Document, HtmlElement};

use crate::dom;

const TIMELINE_SELECTOR: &str = ".chronology-timeline";

/// Chronology strip that drifts sideways on a fixed interval.
pub struct Timeline {
    element: HtmlElement,
    scroller: Rc<RefCell<TimelineScroller>>,
    interval: Option<Interval>,
    interval_ms: u32,
    _listeners: Vec<EventListener>,
}

impl Timeline {
    pub fn mount(
        document: &Document,
        config: &TimelineConfig,
    ) -> Result<Option<Self>, EnhanceError> {
        let Some(element) = dom::query_one::<HtmlElement>(document, TIMELINE_SELECTOR) else {
            return Ok(None);
        };
        let scroller = Rc::new(RefCell::new(TimelineScroller::new(config.step_px)));

        let listeners = dom::hover_pause_listeners(
            &element,
            {
                let scroller = Rc::clone(&scroller);
                move || scroller.borrow_mut().pause()
            },
            {
                let scroller = Rc::clone(&scroller);
                move || scroller.borrow_mut().resume()
            },
        );

        let mut timeline = Self {
            element,
            scroller,
            interval: None,
            interval_ms: config.interval_ms,
            _listeners: listeners,
        };
        timeline.start();
        Ok(Some(timeline))
    }

    /// Start ticking. Calling it again while running does nothing.
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let element = self.element.clone();
        let scroller = Rc::clone(&self.scroller);
        self.interval = Some(Interval::new(self.interval_ms, move || {
            let next = scroller.borrow_mut().tick(
                f64::from(element.scroll_left()),
                f64::from(element.scroll_width()),
                f64::from(element.client_width()),
            );
            if let Some(position) = next {
                element.set_scroll_left(position as i32);
            }
        }));
    }
}

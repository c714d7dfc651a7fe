//! Endless memorial slider with surname search.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_events::EventListener;
use shared::{
    CarouselConfig, CarouselMotion, EnhanceError, append_all_or_none, find_slide, translate_x,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node, Window};

use crate::dom::{self, js_error};
use crate::frame_loop::FrameLoop;

const SLIDER_SELECTOR: &str = ".slider";
const TRACK_SELECTOR: &str = ".slider-track";
const NAME_SELECTOR: &str = ".memorial-name";
const SEARCH_INPUT_ID: &str = "memorial-search";

pub struct Carousel {
    _listeners: Vec<EventListener>,
    _frames: Option<FrameLoop>,
    track: Rc<Track>,
}

struct Track {
    window: Window,
    element: HtmlElement,
    slides: Vec<HtmlElement>,
    clones: Vec<Node>,
    motion: RefCell<CarouselMotion>,
    resume_delay_ms: f64,
}

impl Carousel {
    /// `Ok(None)` when the page has no slider.
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &CarouselConfig,
        reduced_motion: bool,
    ) -> Result<Option<Self>, EnhanceError> {
        let Some(slider) = dom::query_one::<HtmlElement>(document, SLIDER_SELECTOR) else {
            return Ok(None);
        };
        let Some(element) = dom::query_one::<HtmlElement>(document, TRACK_SELECTOR) else {
            return Ok(None);
        };

        let children = element.children();
        let slides: Vec<HtmlElement> = (0..children.length())
            .filter_map(|index| children.item(index))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect();
        // Must stay the last fallible step of the mount.
        let clones = append_clones(&element, &slides)?;

        let track = Rc::new(Track {
            window: window.clone(),
            motion: RefCell::new(CarouselMotion::new(
                slides.len(),
                reduced_motion,
                config.speed_px_per_sec,
            )),
            element,
            slides,
            clones,
            resume_delay_ms: f64::from(config.resume_delay_ms),
        });
        track.update_width();

        let frames = if track.motion.borrow().is_enabled() {
            let _ = track.element.style().set_property("transition", "none");
            let track_for_frames = Rc::clone(&track);
            Some(FrameLoop::start(move |timestamp| {
                track_for_frames.step(timestamp);
                ControlFlow::Continue(())
            }))
        } else {
            None
        };

        let mut listeners = dom::hover_pause_listeners(
            &slider,
            {
                let track = Rc::clone(&track);
                move || track.motion.borrow_mut().pause()
            },
            {
                let track = Rc::clone(&track);
                move || track.motion.borrow_mut().resume()
            },
        );
        for event_type in ["resize", "load"] {
            let track = Rc::clone(&track);
            listeners.push(EventListener::new(window, event_type, move |_| track.update_width()));
        }
        if let Some(input) = document
            .get_element_by_id(SEARCH_INPUT_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        {
            let track = Rc::clone(&track);
            let source = input.clone();
            listeners.push(EventListener::new(&input, "input", move |_| {
                track.search(&source.value())
            }));
        }

        zoon::println!(
            "Carousel mounted with {} slides (motion {})",
            track.slides.len(),
            if track.motion.borrow().is_enabled() { "on" } else { "off" }
        );

        Ok(Some(Self {
            _listeners: listeners,
            _frames: frames,
            track,
        }))
    }
}

/// Append one hidden copy of every slide so the loop has no visible seam.
fn append_clones(track: &HtmlElement, slides: &[HtmlElement]) -> Result<Vec<Node>, EnhanceError> {
    append_all_or_none(
        slides,
        |slide| {
            let clone = slide.clone_node_with_deep(true).map_err(js_error)?;
            if let Some(element) = clone.dyn_ref::<Element>() {
                element.set_attribute("aria-hidden", "true").map_err(js_error)?;
            }
            track.append_child(&clone).map_err(js_error)
        },
        |clone| {
            let _ = track.remove_child(clone);
        },
    )
}

impl Drop for Carousel {
    fn drop(&mut self) {
        for clone in &self.track.clones {
            let _ = self.track.element.remove_child(clone);
        }
        let style = self.track.element.style();
        let _ = style.remove_property("transform");
        let _ = style.remove_property("transition");
    }
}

impl Track {
    fn apply(&self, offset: f64) {
        let _ = self.element.style().set_property("transform", &translate_x(offset));
    }

    fn step(&self, timestamp: f64) {
        let moved = self.motion.borrow_mut().step(timestamp);
        if let Some(offset) = moved {
            self.apply(offset);
        }
    }

    fn update_width(&self) {
        let gap = dom::column_gap(&self.window, &self.element);
        let widths: Vec<f64> = self
            .slides
            .iter()
            .map(|slide| slide.get_bounding_client_rect().width())
            .collect();
        let total_width = CarouselMotion::track_width(&widths, gap);
        let applied = self.motion.borrow_mut().set_total_width(total_width);
        if let Some(offset) = applied {
            self.apply(offset);
        }
    }

    fn search(&self, query: &str) {
        let names: Vec<Option<String>> = self
            .slides
            .iter()
            .map(|slide| {
                dom::query_one::<Element>(slide, NAME_SELECTOR).and_then(|name| name.text_content())
            })
            .collect();
        let Some(index) = find_slide(query, names.iter().map(|name| name.as_deref())) else {
            return;
        };

        self.update_width();
        let slide_left = f64::from(self.slides[index].offset_left());
        let jumped = self
            .motion
            .borrow_mut()
            .jump_and_hold(slide_left, self.resume_delay_ms);
        if let Some(offset) = jumped {
            self.apply(offset);
        }
    }
}

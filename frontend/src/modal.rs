//! Biography dialogs opened from the memorial cards.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use shared::{BODY_MODAL_CLASS, EnhanceError, MODAL_OPEN_CLASS, ModalState};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom;

const TRIGGER_SELECTOR: &str = "[data-model-open]";
const TRIGGER_ATTRIBUTE: &str = "data-model-open";
const MODAL_SELECTOR: &str = ".model-modal";
const CLOSE_BUTTON_SELECTOR: &str = ".model-close";
const CLOSE_TARGET_SELECTOR: &str = "[data-model-close]";

pub struct ModalManager {
    _listeners: Vec<EventListener>,
}

struct Dialogs {
    document: Document,
    state: RefCell<ModalState<HtmlElement, HtmlElement>>,
}

impl ModalManager {
    pub fn mount(document: &Document) -> Result<Option<Self>, EnhanceError> {
        let triggers: Vec<HtmlElement> = dom::query_all(document, TRIGGER_SELECTOR);
        let modals: Vec<HtmlElement> = dom::query_all(document, MODAL_SELECTOR);
        if triggers.is_empty() && modals.is_empty() {
            return Ok(None);
        }

        let dialogs = Rc::new(Dialogs {
            document: document.clone(),
            state: RefCell::new(ModalState::new()),
        });
        let mut listeners = Vec::new();

        for trigger in triggers {
            let Some(modal) = trigger
                .get_attribute(TRIGGER_ATTRIBUTE)
                .filter(|id| !id.is_empty())
                .and_then(|id| document.get_element_by_id(&id))
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let dialogs = Rc::clone(&dialogs);
            let source = trigger.clone();
            listeners.push(EventListener::new(&trigger, "click", move |_| {
                dialogs.open(&modal, &source)
            }));
        }

        for modal in &modals {
            for target in dom::query_all::<HtmlElement>(modal, CLOSE_TARGET_SELECTOR) {
                let dialogs = Rc::clone(&dialogs);
                listeners.push(EventListener::new(&target, "click", move |_| dialogs.close()));
            }
        }

        listeners.push(EventListener::new(document, "keydown", {
            let dialogs = Rc::clone(&dialogs);
            move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|event| event.key() == "Escape");
                if is_escape && dialogs.state.borrow().is_open() {
                    dialogs.close();
                }
            }
        }));

        zoon::println!("Modal manager mounted for {} dialogs", modals.len());
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

impl Dialogs {
    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn open(&self, modal: &HtmlElement, trigger: &HtmlElement) {
        let body = self.body();
        let focused = self
            .document
            .active_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .filter(|element| Some(element) != body.as_ref());

        let transition = self
            .state
            .borrow_mut()
            .open(modal.clone(), focused, trigger.clone());
        if let Some(previous) = transition.close_previous {
            hide(&previous);
        }
        if !transition.changed {
            return;
        }

        dom::add_class(modal, MODAL_OPEN_CLASS);
        let _ = modal.remove_attribute("aria-hidden");
        if let Some(body) = body {
            dom::add_class(&body, BODY_MODAL_CLASS);
        }
        if let Some(close_button) = dom::query_one::<HtmlElement>(modal, CLOSE_BUTTON_SELECTOR) {
            let _ = close_button.focus();
        }
    }

    fn close(&self) {
        let Some(transition) = self.state.borrow_mut().close() else {
            return;
        };
        hide(&transition.modal);
        if let Some(body) = self.body() {
            dom::remove_class(&body, BODY_MODAL_CLASS);
        }
        if let Some(target) = transition.restore_focus.filter(|target| target.is_connected()) {
            let _ = target.focus();
        }
    }
}

fn hide(modal: &HtmlElement) {
    dom::remove_class(modal, MODAL_OPEN_CLASS);
    let _ = modal.set_attribute("aria-hidden", "true");
}

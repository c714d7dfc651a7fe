//! Memorial page enhancements entry point

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

mod carousel;
mod config;
mod counters;
mod dom;
mod frame_loop;
mod modal;
mod page;
mod reveal;
mod timeline;
mod video;

use page::PageController;

thread_local! {
    /// The mounted page; dropping it tears every enhancement down.
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        mount_page();
        return;
    }

    EventListener::once(&document, "DOMContentLoaded", |_| mount_page()).forget();
}

/// Attach every enhancement to the current document. Remounting replaces the
/// previous controller.
#[wasm_bindgen]
pub fn mount_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    PAGE.with(|slot| slot.borrow_mut().take());
    match PageController::mount(&window) {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(error) => zoon::eprintln!("Memorial page enhancements unavailable: {error}"),
    }
}

/// Detach every enhancement, leaving the page as currently rendered.
#[wasm_bindgen]
pub fn unmount_page() {
    PAGE.with(|slot| slot.borrow_mut().take());
}

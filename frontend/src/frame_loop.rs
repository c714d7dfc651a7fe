use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use gloo_render::{AnimationFrame, request_animation_frame};

type FrameSlot = RefCell<Option<AnimationFrame>>;

/// `requestAnimationFrame` loop that re-requests itself from each frame.
///
/// The callback receives the frame timestamp in milliseconds and keeps being
/// called until it returns `ControlFlow::Break`. Dropping the loop drops the
/// pending `AnimationFrame`, which cancels it.
pub struct FrameLoop {
    _frame: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        let frame = Rc::new(RefCell::new(None));
        request_next(Rc::downgrade(&frame), Rc::new(RefCell::new(on_frame)));
        Self { _frame: frame }
    }
}

fn request_next<F>(slot: Weak<FrameSlot>, on_frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    let Some(frame) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |timestamp| {
        let Some(frame) = slot.upgrade() else {
            return;
        };
        frame.borrow_mut().take();
        let flow = (*on_frame.borrow_mut())(timestamp);
        if flow.is_continue() {
            request_next(slot, on_frame);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

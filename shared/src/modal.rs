//! Single-active-modal state machine.
//!
//! Generic over the modal handle `M` and the focus target `F` so the DOM side
//! can plug in elements while tests use plain values.

/// What the caller has to do to the DOM after [`ModalState::open`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenTransition<M> {
    /// A different modal that was open and must now be hidden.
    pub close_previous: Option<M>,
    /// `false` when the requested modal was already the active one.
    pub changed: bool,
}

/// What the caller has to do to the DOM after [`ModalState::close`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloseTransition<M, F> {
    pub modal: M,
    pub restore_focus: Option<F>,
}

#[derive(Debug, Clone)]
pub struct ModalState<M, F> {
    active: Option<M>,
    restore_focus: Option<F>,
}

impl<M, F> Default for ModalState<M, F> {
    fn default() -> Self {
        Self {
            active: None,
            restore_focus: None,
        }
    }
}

impl<M: PartialEq, F> ModalState<M, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open `modal`, remembering `focused` (or `trigger` when nothing had
    /// focus) so focus can return there on close.
    ///
    /// Switching from one open modal to another keeps the focus target
    /// recorded when the first one opened.
    pub fn open(&mut self, modal: M, focused: Option<F>, trigger: F) -> OpenTransition<M> {
        match self.active.take() {
            Some(current) if current == modal => {
                self.active = Some(current);
                OpenTransition {
                    close_previous: None,
                    changed: false,
                }
            }
            Some(previous) => {
                self.active = Some(modal);
                OpenTransition {
                    close_previous: Some(previous),
                    changed: true,
                }
            }
            None => {
                self.restore_focus = Some(focused.unwrap_or(trigger));
                self.active = Some(modal);
                OpenTransition {
                    close_previous: None,
                    changed: true,
                }
            }
        }
    }

    /// Close the active modal. `None` when nothing is open.
    pub fn close(&mut self) -> Option<CloseTransition<M, F>> {
        let modal = self.active.take()?;
        Some(CloseTransition {
            modal,
            restore_focus: self.restore_focus.take(),
        })
    }
}

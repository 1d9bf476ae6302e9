//! ScrollBinding - keeps a card's scroll listener in step with its mode
//!
//! Generic over the listener handle so the attach/detach rules hold without
//! a browser: the card passes a `WindowListener`, tests pass a counter.
//! Dropping the handle is what detaches it.

use super::tilt::TiltMode;

#[derive(Debug)]
pub struct ScrollBinding<L> {
    listener: Option<L>,
}

impl<L> Default for ScrollBinding<L> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<L> ScrollBinding<L> {
    /// Hold a listener exactly while `mode` wants one. `attach` runs only
    /// when a listener is needed and none is held yet.
    pub fn follow<F>(&mut self, mode: TiltMode, attach: F)
    where
        F: FnOnce() -> Option<L>,
    {
        if !mode.wants_scroll_listener() {
            self.listener = None;
        } else if self.listener.is_none() {
            self.listener = attach();
        }
    }

    /// Drop the listener, whatever the mode.
    pub fn release(&mut self) {
        self.listener = None;
    }
}

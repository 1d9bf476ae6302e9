//! Window event listener tied to a Rust value's lifetime
//!
//! Dropping a `WindowListener` detaches it, so a listener can never outlive
//! the component that owns it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    /// Attach `handler` to `event` on `window`. `None` when there is no
    /// window or the browser refuses the listener.
    pub fn attach<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        if let Err(e) = window.add_event_listener_with_callback(event, function) {
            log::warn!("could not attach {event} listener: {e:?}");
            return None;
        }
        log::debug!("attached {event} listener");
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        match window.remove_event_listener_with_callback(self.event, function) {
            Ok(()) => log::debug!("detached {} listener", self.event),
            Err(e) => log::warn!("could not detach {} listener: {e:?}", self.event),
        }
    }
}

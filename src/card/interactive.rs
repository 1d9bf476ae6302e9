//! InteractiveCard - mounts the tilt engine around arbitrary content
//!
//! Structure:
//!   container div (perspective, id for bounds lookup, pointer handlers)
//!     card div (rotation transform)
//!       children
//!
//! Bounds are read from the container, which never rotates, so the tilt
//! does not feed back into its own input.
//!
//! The mode is decided on mount and again on every window resize. The
//! scroll listener exists only while the card is in mobile mode.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use crate::primitives::{ElementBounds, PointerSample, Viewport};
use crate::transform::{CardStyle, ScrollBinding, TiltEngine};
use super::listener::WindowListener;

/// Used when no window is available to measure
const FALLBACK_VIEWPORT: Viewport = Viewport::new(1024.0, 768.0);

static COUNTER: AtomicU32 = AtomicU32::new(0);

#[derive(Default)]
struct CardListeners {
    resize: Option<WindowListener>,
    scroll: ScrollBinding<WindowListener>,
}

impl CardListeners {
    fn detach_all(&mut self) {
        self.scroll.release();
        self.resize = None;
    }
}

/// Recompute the mobile flip from the card's current position.
fn sync_flip(mut engine: Signal<TiltEngine>, id: &str) {
    let Some(viewport) = Viewport::current() else {
        return;
    };
    engine.write().scroll(ElementBounds::of_element(id), viewport);
}

#[component]
pub fn InteractiveCard(children: Element) -> Element {
    let id = use_hook(|| format!("tilt-card-{}", COUNTER.fetch_add(1, Ordering::Relaxed)));
    let mut engine = use_signal(|| {
        TiltEngine::for_viewport(Viewport::current().unwrap_or(FALLBACK_VIEWPORT))
    });
    let listeners = use_hook(|| Rc::new(RefCell::new(CardListeners::default())));

    // Resize decides the mode; installed once
    let resize_slot = listeners.clone();
    use_effect(move || {
        let on_resize = move || {
            let Some(viewport) = Viewport::current() else {
                return;
            };
            let changed = engine.write().resize(viewport);
            if changed {
                log::debug!("tilt card now in {} mode", engine.peek().mode().name());
            }
        };
        resize_slot.borrow_mut().resize = WindowListener::attach("resize", on_resize);
    });

    // Scroll listener follows the mode
    let mode = use_memo(move || engine.read().mode());
    let scroll_slot = listeners.clone();
    let scroll_id = id.clone();
    use_effect(move || {
        let mode = mode();
        if mode.wants_scroll_listener() {
            // Initial pose without waiting for the first scroll
            sync_flip(engine, &scroll_id);
        }
        let id = scroll_id.clone();
        scroll_slot
            .borrow_mut()
            .scroll
            .follow(mode, || WindowListener::attach("scroll", move || sync_flip(engine, &id)));
    });

    let drop_slot = listeners.clone();
    use_drop(move || {
        drop_slot.borrow_mut().detach_all();
    });

    let style = {
        let e = engine.read();
        CardStyle::new(e.rotation(), e.mode(), *e.config())
    };
    let container_style = style.container_style();
    let card_style = style.card_style();
    let move_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            style: "{container_style}",
            onmousemove: move |e: Event<MouseData>| {
                let p = e.client_coordinates();
                let sample = PointerSample::new(p.x as f32, p.y as f32);
                engine.write().pointer_move(sample, ElementBounds::of_element(&move_id));
            },
            onmouseleave: move |_| {
                engine.write().pointer_leave();
            },
            div {
                style: "{card_style}",
                {children}
            }
        }
    }
}

//! Position - viewport geometry read from the host
//!
//! All coordinates are CSS pixels in viewport (client) space.

/// A pointer sample in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the browser viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Current window inner size, if a window exists
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let w = window.inner_width().ok().and_then(|v| v.as_f64())?;
        let h = window.inner_height().ok().and_then(|v| v.as_f64())?;
        Some(Self::new(w as f32, h as f32))
    }
}

/// Bounding box of an element in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Offset of a pointer sample from the element center
    pub fn offset_from_center(&self, p: PointerSample) -> (f32, f32) {
        let (cx, cy) = self.center();
        (p.x - cx, p.y - cy)
    }

    /// Live bounding rect of the element with the given DOM id.
    /// `None` while the element is not mounted.
    pub fn of_element(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let el = document.get_element_by_id(id)?;
        let rect = el.get_bounding_client_rect();
        Some(Self::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

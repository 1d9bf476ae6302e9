//! Animation - CSS transitions for transform changes
//!
//! The tilt card eases back to neutral when the pointer leaves it. The
//! transition lives on the card element itself, so every transform change
//! in desktop mode is interpolated by the browser rather than snapped.

/// A transition on the `transform` property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    /// CSS timing function, e.g. `ease-out`
    pub easing: &'static str,
}

impl Transition {
    pub const SMOOTH_RETURN: Self = Self { duration_ms: 300, easing: "ease-out" };

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// `transition:` declaration for the animated element
    pub fn to_css(&self) -> String {
        if self.is_instant() {
            return String::new();
        }
        format!("transition: transform {}ms {};", self.duration_ms, self.easing)
    }
}

//! TiltConfig - tuning constants for the tilt/flip engine

use crate::primitives::Transition;

use super::tilt::TiltMode;

/// Engine tuning. `Default` gives the production values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Largest tilt on either axis in desktop mode, in degrees
    pub max_tilt: f32,
    /// Rotation reached once the card has scrolled fully past, in degrees
    pub max_flip: f32,
    /// Viewport widths below this are mobile
    pub mobile_breakpoint: f32,
    /// Perspective distance on the container, in px
    pub perspective: f32,
    /// Easing used for the return to neutral on pointer leave
    pub transition: Transition,
}

impl TiltConfig {
    pub const DEFAULT: Self = Self {
        max_tilt: 10.0,
        max_flip: 180.0,
        mobile_breakpoint: 768.0,
        perspective: 1000.0,
        transition: Transition::SMOOTH_RETURN,
    };

    /// Breakpoint is inclusive on the desktop side: 767 is mobile, 768 is not.
    pub fn mode_for(&self, viewport_width: f32) -> TiltMode {
        if viewport_width < self.mobile_breakpoint {
            TiltMode::Mobile
        } else {
            TiltMode::Desktop
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

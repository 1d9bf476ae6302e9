//! CardStyle - declarative style binding for a tilting card
//!
//! The engine only produces a `RotationState`. This turns it, together with
//! the mode and tuning, into inline styles for two nested elements:
//!   container (perspective, measured for bounds, receives pointer events)
//!     card (transform + transition)

use super::config::TiltConfig;
use super::tilt::{RotationState, TiltMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub rotation: RotationState,
    pub mode: TiltMode,
    pub config: TiltConfig,
}

impl CardStyle {
    pub fn new(rotation: RotationState, mode: TiltMode, config: TiltConfig) -> Self {
        Self { rotation, mode, config }
    }

    /// Style for the outer container. Establishes the depth context once.
    pub fn container_style(&self) -> String {
        format!("display: inline-block; perspective: {}px;", self.config.perspective)
    }

    /// Style for the rotated card.
    ///
    /// Desktop eases every change so the pointer-leave reset animates back
    /// to neutral. Mobile tracks scroll directly with no easing.
    pub fn card_style(&self) -> String {
        let mut parts = vec![
            "transform-origin: center center".to_string(),
            "transform-style: preserve-3d".to_string(),
            format!("transform: {}", self.rotation.to_css()),
        ];

        if self.mode == TiltMode::Desktop {
            let transition = self.config.transition.to_css();
            if !transition.is_empty() {
                parts.push(transition.trim_end_matches(';').to_string());
            }
        }

        parts.join("; ") + ";"
    }
}

//! Tilt/flip engine - pointer or scroll position to a 3D rotation
//!
//! Desktop: the pointer offset from the card center tilts the card up to
//! `max_tilt` degrees on each axis. Mobile: the card's position in the
//! viewport turns it around its vertical axis, 0 when its top edge is at
//! the bottom of the viewport and `max_flip` once it reaches the top.
//!
//! Every update is computed from the current sample alone. The last
//! rotation is kept only so the host can render it.

use crate::primitives::bounded::bounded_f32;
use crate::primitives::{Angle, ElementBounds, PointerSample, Viewport};

use super::config::TiltConfig;

// Pointer offset from center as a fraction of the half-extent
bounded_f32!(TiltFactor, -1.0, 1.0);

// How far the card has travelled up the viewport
bounded_f32!(FlipRatio, 0.0, 1.0);

/// Which input drives the rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltMode {
    /// Pointer position tilts the card
    Desktop,
    /// Scroll position flips the card
    Mobile,
}

impl TiltMode {
    pub fn for_width(viewport_width: f32) -> Self {
        TiltConfig::DEFAULT.mode_for(viewport_width)
    }

    /// Only the scroll-driven mode listens to window scroll
    pub fn wants_scroll_listener(&self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

/// Rotation applied to the card, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: Angle,
    pub y: Angle,
}

impl RotationState {
    pub const NEUTRAL: Self = Self { x: Angle::ZERO, y: Angle::ZERO };

    pub fn new(x_degrees: f32, y_degrees: f32) -> Self {
        Self { x: Angle::new(x_degrees), y: Angle::new(y_degrees) }
    }

    /// `transform` value, e.g. `rotateX(4deg) rotateY(-2.5deg)`
    pub fn to_css(&self) -> String {
        format!("{} {}", self.x.rotate_x_css(), self.y.rotate_y_css())
    }
}

fn axis_factor(offset: f32, extent: f32) -> TiltFactor {
    let half = extent / 2.0;
    if !(half > 0.0) {
        return TiltFactor::new(0.0);
    }
    TiltFactor::clamped(offset / half)
}

/// Tilt for a pointer sample over `bounds`.
///
/// The offset is normalized by the half-extent, so the edges of the card map
/// to `±max_tilt`. That is twice `offset / size * max_tilt`, which only
/// reaches half the limit at the edges. Samples outside the card are clamped
/// to the edge value.
pub fn pointer_tilt(config: &TiltConfig, sample: PointerSample, bounds: ElementBounds) -> RotationState {
    let (offset_x, offset_y) = bounds.offset_from_center(sample);
    let fx = axis_factor(offset_x, bounds.width);
    let fy = axis_factor(offset_y, bounds.height);
    // Pointer above center lifts the top edge toward the viewer
    RotationState::new(-fy.value() * config.max_tilt, fx.value() * config.max_tilt)
}

/// Fraction of the viewport the card's top edge has travelled through.
pub fn flip_ratio(bounds_top: f32, viewport_height: f32) -> FlipRatio {
    if !(viewport_height > 0.0) {
        return FlipRatio::new(0.0);
    }
    FlipRatio::clamped((viewport_height - bounds_top) / viewport_height)
}

/// Flip for the card's current vertical position.
pub fn scroll_flip(config: &TiltConfig, bounds_top: f32, viewport_height: f32) -> RotationState {
    let ratio = flip_ratio(bounds_top, viewport_height);
    RotationState { x: Angle::ZERO, y: Angle::new(ratio.value() * config.max_flip) }
}

/// Owns the rotation for one card and routes events by mode.
///
/// Events that do not belong to the current mode, or that arrive without
/// geometry, leave the rotation untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltEngine {
    config: TiltConfig,
    mode: TiltMode,
    rotation: RotationState,
}

impl TiltEngine {
    pub fn new(config: TiltConfig, mode: TiltMode) -> Self {
        Self { config, mode, rotation: RotationState::NEUTRAL }
    }

    /// Engine with default tuning, mode picked from the viewport width
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(TiltConfig::default(), TiltMode::for_width(viewport.width))
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn mode(&self) -> TiltMode {
        self.mode
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Switch mode. A real change drops any pose left over from the old
    /// mode. Returns whether the mode changed.
    pub fn set_mode(&mut self, mode: TiltMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.rotation = RotationState::NEUTRAL;
        true
    }

    /// Re-derive the mode from a new viewport width.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let mode = self.config.mode_for(viewport.width);
        self.set_mode(mode)
    }

    pub fn pointer_move(&mut self, sample: PointerSample, bounds: Option<ElementBounds>) -> RotationState {
        if self.mode == TiltMode::Desktop {
            if let Some(bounds) = bounds {
                self.rotation = pointer_tilt(&self.config, sample, bounds);
            }
        }
        self.rotation
    }

    pub fn pointer_leave(&mut self) -> RotationState {
        if self.mode == TiltMode::Desktop {
            self.rotation = RotationState::NEUTRAL;
        }
        self.rotation
    }

    pub fn scroll(&mut self, bounds: Option<ElementBounds>, viewport: Viewport) -> RotationState {
        if self.mode == TiltMode::Mobile {
            if let Some(bounds) = bounds {
                self.rotation = scroll_flip(&self.config, bounds.top, viewport.height);
            }
        }
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const CARD: ElementBounds = ElementBounds::new(0.0, 0.0, 200.0, 200.0);

    fn desktop() -> TiltEngine {
        TiltEngine::new(TiltConfig::DEFAULT, TiltMode::Desktop)
    }

    fn mobile() -> TiltEngine {
        TiltEngine::new(TiltConfig::DEFAULT, TiltMode::Mobile)
    }

    #[test]
    fn mode_from_width() {
        assert_eq!(TiltMode::for_width(767.0), TiltMode::Mobile);
        assert_eq!(TiltMode::for_width(768.0), TiltMode::Desktop);
        assert_eq!(TiltMode::for_width(0.0), TiltMode::Mobile);
    }

    #[test]
    fn center_is_neutral() {
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(100.0, 100.0), CARD);
        assert_eq!(r, RotationState::NEUTRAL);
        assert_eq!(r.x.degrees(), 0.0);
        assert_eq!(r.y.degrees(), 0.0);
    }

    #[test]
    fn top_left_corner_is_full_tilt() {
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(0.0, 0.0), CARD);
        assert_eq!(r.x.degrees(), 10.0);
        assert_eq!(r.y.degrees(), -10.0);
    }

    #[test]
    fn bottom_right_corner_is_opposite_tilt() {
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(200.0, 200.0), CARD);
        assert_eq!(r.x.degrees(), -10.0);
        assert_eq!(r.y.degrees(), 10.0);
    }

    #[test]
    fn edge_midpoint_reaches_full_tilt() {
        // offset / size * 10 would give 5 here
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(200.0, 100.0), CARD);
        assert_eq!(r.y.degrees(), 10.0);
        assert_eq!(r.x.degrees(), 0.0);
    }

    #[test]
    fn only_mobile_listens_to_scroll() {
        assert!(TiltMode::Mobile.wants_scroll_listener());
        assert!(!TiltMode::Desktop.wants_scroll_listener());
    }

    #[test]
    fn tilt_is_relative_to_element_position() {
        let card = ElementBounds::new(300.0, 500.0, 320.0, 180.0);
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(460.0, 590.0), card);
        assert_eq!(r, RotationState::NEUTRAL);

        // Quarter of the way from center to the right edge
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(500.0, 590.0), card);
        assert_eq!(r.y.degrees(), 2.5);
        assert_eq!(r.x.degrees(), 0.0);
    }

    #[test]
    fn samples_inside_bounds_respect_limits_and_signs() {
        let mut rng = SmallRng::seed_from_u64(42);
        let card = ElementBounds::new(40.0, 80.0, 384.0, 240.0);
        let (cx, cy) = card.center();
        for _ in 0..500 {
            let x = rng.random_range(card.left..=card.left + card.width);
            let y = rng.random_range(card.top..=card.top + card.height);
            let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(x, y), card);
            let (rx, ry) = (r.x.degrees(), r.y.degrees());
            assert!(rx.abs() <= 10.0, "rotateX {rx} out of range");
            assert!(ry.abs() <= 10.0, "rotateY {ry} out of range");

            let (dx, dy) = (x - cx, y - cy);
            if dy != 0.0 {
                assert_eq!(rx.signum(), -dy.signum());
            }
            if dx != 0.0 {
                assert_eq!(ry.signum(), dx.signum());
            }
        }
    }

    #[test]
    fn samples_outside_bounds_are_clamped() {
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(-5000.0, 9000.0), CARD);
        assert_eq!(r.x.degrees(), -10.0);
        assert_eq!(r.y.degrees(), -10.0);
    }

    #[test]
    fn zero_sized_bounds_do_not_tilt() {
        let empty = ElementBounds::new(10.0, 10.0, 0.0, 0.0);
        let r = pointer_tilt(&TiltConfig::DEFAULT, PointerSample::new(50.0, 50.0), empty);
        assert_eq!(r, RotationState::NEUTRAL);
    }

    #[test]
    fn custom_max_tilt_scales_output() {
        let config = TiltConfig { max_tilt: 20.0, ..TiltConfig::DEFAULT };
        let r = pointer_tilt(&config, PointerSample::new(0.0, 0.0), CARD);
        assert_eq!(r.x.degrees(), 20.0);
        assert_eq!(r.y.degrees(), -20.0);
    }

    #[test]
    fn pointer_move_is_idempotent() {
        let mut engine = desktop();
        let sample = PointerSample::new(37.0, 151.0);
        let first = engine.pointer_move(sample, Some(CARD));
        let second = engine.pointer_move(sample, Some(CARD));
        assert_eq!(first, second);
        assert_ne!(first, RotationState::NEUTRAL);
    }

    #[test]
    fn pointer_move_does_not_accumulate() {
        let mut engine = desktop();
        engine.pointer_move(PointerSample::new(0.0, 0.0), Some(CARD));
        let r = engine.pointer_move(PointerSample::new(100.0, 100.0), Some(CARD));
        assert_eq!(r, RotationState::NEUTRAL);
    }

    #[test]
    fn leave_always_returns_to_neutral() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut engine = desktop();
        for _ in 0..50 {
            let x = rng.random_range(0.0..=200.0);
            let y = rng.random_range(0.0..=200.0);
            engine.pointer_move(PointerSample::new(x, y), Some(CARD));
            assert_eq!(engine.pointer_leave(), RotationState::NEUTRAL);
        }
    }

    #[test]
    fn unmounted_element_is_a_no_op() {
        let mut engine = desktop();
        let before = engine.pointer_move(PointerSample::new(0.0, 0.0), Some(CARD));
        let after = engine.pointer_move(PointerSample::new(200.0, 200.0), None);
        assert_eq!(before, after);

        let mut engine = mobile();
        let before = engine.scroll(Some(ElementBounds::new(0.0, 400.0, 300.0, 200.0)), Viewport::new(390.0, 800.0));
        let after = engine.scroll(None, Viewport::new(390.0, 800.0));
        assert_eq!(before, after);
    }

    #[test]
    fn pointer_events_ignored_in_mobile_mode() {
        let mut engine = mobile();
        let vp = Viewport::new(390.0, 800.0);
        let flipped = engine.scroll(Some(ElementBounds::new(0.0, 200.0, 300.0, 200.0)), vp);
        assert_eq!(engine.pointer_move(PointerSample::new(0.0, 0.0), Some(CARD)), flipped);
        assert_eq!(engine.pointer_leave(), flipped);
    }

    #[test]
    fn scroll_ignored_in_desktop_mode() {
        let mut engine = desktop();
        let r = engine.scroll(Some(ElementBounds::new(0.0, 0.0, 300.0, 200.0)), Viewport::new(1280.0, 800.0));
        assert_eq!(r, RotationState::NEUTRAL);
    }

    #[test]
    fn flip_follows_ratio_exactly() {
        let vh = 800.0;
        for step in 0..=16 {
            let top = vh - (step as f32) * 50.0;
            let ratio = (vh - top) / vh;
            let r = scroll_flip(&TiltConfig::DEFAULT, top, vh);
            assert_eq!(r.x, Angle::ZERO);
            assert_eq!(r.y.degrees(), ratio * 180.0);
        }
    }

    #[test]
    fn flip_endpoints() {
        let r = scroll_flip(&TiltConfig::DEFAULT, 800.0, 800.0);
        assert_eq!(r.y.degrees(), 0.0);
        let r = scroll_flip(&TiltConfig::DEFAULT, 0.0, 800.0);
        assert_eq!(r.y.degrees(), 180.0);
        let r = scroll_flip(&TiltConfig::DEFAULT, 400.0, 800.0);
        assert_eq!(r.y.degrees(), 90.0);
    }

    #[test]
    fn flip_ratio_is_clamped() {
        assert_eq!(flip_ratio(2400.0, 800.0).value(), FlipRatio::MIN);
        assert_eq!(flip_ratio(800.0, 800.0).value(), FlipRatio::MIN);
        assert_eq!(flip_ratio(-1500.0, 800.0).value(), FlipRatio::MAX);
        assert_eq!(scroll_flip(&TiltConfig::DEFAULT, -1500.0, 800.0).y.degrees(), 180.0);
        assert_eq!(scroll_flip(&TiltConfig::DEFAULT, 5000.0, 800.0).y.degrees(), 0.0);
    }

    #[test]
    fn degenerate_viewport_does_not_flip() {
        assert_eq!(flip_ratio(100.0, 0.0).value(), FlipRatio::MIN);
        assert_eq!(scroll_flip(&TiltConfig::DEFAULT, -100.0, 0.0), RotationState::NEUTRAL);
    }

    #[test]
    fn scroll_has_no_memory() {
        let mut engine = mobile();
        let vp = Viewport::new(390.0, 800.0);
        engine.scroll(Some(ElementBounds::new(0.0, 0.0, 300.0, 200.0)), vp);
        let r = engine.scroll(Some(ElementBounds::new(0.0, 600.0, 300.0, 200.0)), vp);
        assert_eq!(r.y.degrees(), 45.0);
    }

    #[test]
    fn mode_change_resets_rotation() {
        let mut engine = desktop();
        engine.pointer_move(PointerSample::new(0.0, 0.0), Some(CARD));
        assert!(engine.resize(Viewport::new(767.0, 900.0)));
        assert_eq!(engine.mode(), TiltMode::Mobile);
        assert_eq!(engine.rotation(), RotationState::NEUTRAL);
    }

    #[test]
    fn same_mode_keeps_rotation() {
        let mut engine = desktop();
        let r = engine.pointer_move(PointerSample::new(0.0, 0.0), Some(CARD));
        assert!(!engine.resize(Viewport::new(1440.0, 900.0)));
        assert_eq!(engine.rotation(), r);
    }

    #[test]
    fn for_viewport_picks_mode() {
        assert_eq!(TiltEngine::for_viewport(Viewport::new(375.0, 812.0)).mode(), TiltMode::Mobile);
        assert_eq!(TiltEngine::for_viewport(Viewport::new(768.0, 1024.0)).mode(), TiltMode::Desktop);
    }

    #[test]
    fn rotation_css() {
        assert_eq!(RotationState::new(10.0, -10.0).to_css(), "rotateX(10deg) rotateY(-10deg)");
        assert_eq!(RotationState::NEUTRAL.to_css(), "rotateX(0deg) rotateY(0deg)");
    }
}

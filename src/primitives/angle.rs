//! Angle - rotation about a single axis with CSS transform output

/// Angle in degrees, normalized to [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f32) -> Self {
        Self(Self::normalize(degrees))
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    fn normalize(degrees: f32) -> f32 {
        let mut d = degrees % 360.0;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        // -0.0 would print as "-0deg"
        if d == 0.0 { 0.0 } else { d }
    }

    /// `rotateX(..deg)` - tilts the top edge toward or away from the viewer
    pub fn rotate_x_css(&self) -> String {
        format!("rotateX({}deg)", self.0)
    }

    /// `rotateY(..deg)` - turns the element around its vertical axis
    pub fn rotate_y_css(&self) -> String {
        format!("rotateY({}deg)", self.0)
    }
}

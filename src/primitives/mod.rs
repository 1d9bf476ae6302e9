//! Transform primitives - values the tilt engine computes and renders
//!
//! Each primitive:
//! - is a plain `Copy` value with no DOM handle
//! - renders itself as a CSS fragment where it has a visual form

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod animation;
pub mod position;

pub use angle::Angle;
pub use animation::Transition;
pub use position::{ElementBounds, PointerSample, Viewport};

//! Transform - the tilt/flip engine and its style binding
//!
//! `tilt` maps pointer or scroll input to a `RotationState`. `style`
//! renders that state as CSS, and `binding` decides when a scroll listener
//! is held. None of them touches the DOM; the card component in
//! `crate::card` wires them to real events.

pub mod binding;
pub mod config;
pub mod style;
pub mod tilt;

pub use binding::ScrollBinding;
pub use style::CardStyle;
pub use tilt::{TiltEngine, TiltMode};

//! Card components - the tilting wrapper and the card face it holds

mod interactive;
mod listener;
mod preview;

pub use interactive::InteractiveCard;
pub use preview::CardPreview;

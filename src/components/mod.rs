//! UI components for the birthday greeting.

mod card_controls;
mod confetti;
mod countdown_display;
mod gift_box;
pub mod images;

pub use card_controls::CardControlsBar;
pub use confetti::ConfettiOverlay;
pub use countdown_display::CountdownDisplay;
pub use gift_box::{AnimatedGiftBox, StaticGiftBox};
pub use images::{AssetImage, PhotoFrame};

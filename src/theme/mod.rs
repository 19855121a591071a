//! Visual theme: palette and global stylesheet.

mod colors;
mod styles;

pub use colors::page_background;
pub use styles::GLOBAL_STYLES;

//! Image components
//!
//! Asset images that degrade to a text placeholder when the file is missing.

mod asset_image;
mod photo_frame;

pub use asset_image::AssetImage;
pub use photo_frame::PhotoFrame;

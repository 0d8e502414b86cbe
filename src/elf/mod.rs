// Fri Oct 16 2026 - Alex

pub mod dynamic;
pub mod error;
pub mod image;

pub use dynamic::{DynamicSegment, DynamicSymbol};
pub use error::ElfError;
pub use image::ElfImage;

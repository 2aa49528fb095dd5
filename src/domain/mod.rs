pub mod bounding_box;
pub mod input_source;
pub mod source_image;
pub mod thumbnail;
pub mod thumbnailer;

// --- public re-exports ---
pub use bounding_box::{BoundingBox, DEFAULT_THUMBNAIL_SIZE};
pub use thumbnailer::{ThumbnailConfig, ThumbnailSummary, Thumbnailer};

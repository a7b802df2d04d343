//! Background loading of pages and images.

pub mod page_loader;
pub mod image_loader;

// Re-export commonly used types
pub use page_loader::{PageLoader, PageResult};
pub use image_loader::{ImageLoader, LoadedImage, DEFAULT_WORKERS};

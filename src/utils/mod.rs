//! Utility modules for the GIF browser.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_bytes, format_memory_mb, get_current_memory_mb};

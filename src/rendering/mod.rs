//! Rendering subsystem for drawing grid cells
//!
//! - Cell rendering (loading skeleton, error placeholder, title overlay)
//! - Text utilities (text measurement and truncation)

pub mod cell_renderer;
pub mod text_utils;

//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the GIF browser:
//! - Header panel (home link, search box, animation toggle)
//! - Feed panel (page header, grid, paging controls)
//! - Masonry grid (virtualized cell placement)
//! - Image cell (skeleton, image, error placeholder)
//! - Not-found page
//! - Status bar (feed and cache statistics)
//! - Toast (copy acknowledgment)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod feed_panel;
pub mod masonry_grid;
pub mod image_cell;
pub mod not_found;
pub mod status_bar;
pub mod toast;
pub mod panel_manager;

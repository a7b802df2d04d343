//! Application-level modules for the GIF browser.
//!
//! This module contains the main application coordinator and centralized state management.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, SourceMode};
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::{SettingsCoordinator, UiPreferences};

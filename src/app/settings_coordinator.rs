//! UI preference persistence.
//!
//! Preferences are stored in eframe's persistent storage as JSON strings,
//! one key per setting, so an unreadable value only resets that setting.

use gifwall::Route;
use serde::{Deserialize, Serialize};

const ANIMATIONS_PAUSED_KEY: &str = "animations_paused";
const LAST_ROUTE_KEY: &str = "last_route";

/// Preferences restored at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiPreferences {
    pub animations_paused: bool,
    /// Path of the route open at shutdown
    pub last_route: Option<String>,
}

impl UiPreferences {
    /// Route to open when none was given on the command line.
    pub fn start_route(&self) -> Route {
        self.last_route
            .as_deref()
            .map(Route::parse)
            .unwrap_or(Route::Trending)
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> UiPreferences {
        UiPreferences {
            animations_paused: Self::load_setting_or(storage, ANIMATIONS_PAUSED_KEY, false),
            last_route: Self::try_load_setting(storage, LAST_ROUTE_KEY),
        }
    }

    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &UiPreferences) {
        Self::save_setting(storage, ANIMATIONS_PAUSED_KEY, &preferences.animations_paused);
        if let Some(route) = &preferences.last_route {
            Self::save_setting(storage, LAST_ROUTE_KEY, route);
        }
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("Failed to serialize setting {}: {}", key, e),
        }
    }

    /// Loads a setting, falling back to `default` when absent or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Ignoring invalid setting {}: {}", key, e);
                None
            }
        }
    }
}

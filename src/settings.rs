//! Game settings and preferences
//!
//! Read from LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual hints ===
    /// Dashed ring showing the click zone when the ball nears the ground
    pub show_hit_zone: bool,
    /// Arrow above the ball showing horizontal drift
    pub show_direction_arrow: bool,

    // === Host integration ===
    /// Post completion messages to the embedding page
    pub notify_host: bool,

    // === Physics ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hit_zone: true,
            show_direction_arrow: true,
            notify_host: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "football_juggling_settings";

    /// Parse settings JSON, falling back to defaults on any problem
    ///
    /// Missing fields take their default. A tuning table that fails
    /// validation is replaced by the default tuning.
    pub fn from_json(json: &str) -> Self {
        let mut settings: Settings = match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                return Self::default();
            }
        };

        if let Err(e) = settings.tuning.validate() {
            log::warn!("Ignoring invalid tuning: {}", e);
            settings.tuning = Tuning::default();
        }

        settings
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

// Client settings persisted in localStorage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SETTINGS_KEY: &str = "fc_settings";
pub const MIN_POLL_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub room_id: String,
    pub current_user_id: String,
    pub counterpart_id: String,
    pub poll_interval_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            room_id: "default".to_string(),
            current_user_id: String::new(),
            counterpart_id: String::new(),
            poll_interval_ms: 5000,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut s: Settings = serde_json::from_str(raw)?;
        s.poll_interval_ms = s.poll_interval_ms.max(MIN_POLL_INTERVAL_MS);
        Ok(s)
    }

    /// Reads settings from localStorage, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{e}; using default settings");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"room_id": "r-42"}"#).unwrap();
        assert_eq!(s.room_id, "r-42");
        assert_eq!(s.api_base_url, "/api");
        assert_eq!(s.poll_interval_ms, 5000);
    }

    #[test]
    fn test_poll_interval_has_floor() {
        let s = Settings::from_json(r#"{"poll_interval_ms": 10}"#).unwrap();
        assert_eq!(s.poll_interval_ms, MIN_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(Settings::from_json("{nope"), Err(ConfigError::Json(_))));
    }
}

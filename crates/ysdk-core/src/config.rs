//! SDK configuration

use crate::error::Result;
use crate::types::PlayerOptions;
use serde::{Deserialize, Serialize};

/// Where the SDK script is served from
pub const DEFAULT_SCRIPT_URL: &str = "https://yandex.ru/games/sdk/v2";

/// Configuration for loading the SDK and fetching the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// URL of the SDK `<script>`
    pub script_url: String,
    /// Request personal data scopes in `getPlayer`
    pub player_scopes: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.into(),
            player_scopes: false,
        }
    }
}

impl SdkConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions::new(self.player_scopes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_config_defaults() {
        let config = SdkConfig::default();
        assert_eq!(config.script_url, "https://yandex.ru/games/sdk/v2");
        assert!(!config.player_scopes);
        assert_eq!(config.player_options(), PlayerOptions::new(false));
    }

    #[test]
    fn test_partial_json() {
        let config = SdkConfig::from_json(r#"{"player_scopes": true}"#).unwrap();
        assert_eq!(config.script_url, DEFAULT_SCRIPT_URL);
        assert!(config.player_scopes);
    }

    #[test]
    fn test_invalid_json() {
        match SdkConfig::from_json("{") {
            Err(Error::SerializationError(_)) => {}
            other => panic!("Expected SerializationError, got {:?}", other),
        }
    }
}

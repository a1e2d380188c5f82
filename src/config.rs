//=========================================================================
// Scene Order Configuration
//=========================================================================
//
// Tunables for the scene ordering engine, loadable from TOML.
//
//   max_events_per_tick = 100
//   default_priority = 0
//
// Missing keys fall back to the defaults below.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::ConfigError;

//=== SceneOrderConfig ====================================================

/// Engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOrderConfig {
    /// Upper bound on loader events dispatched by one `update()` call.
    pub max_events_per_tick: usize,

    /// Priority forwarded to the loader when a load request names none.
    pub default_priority: Option<i32>,
}

impl SceneOrderConfig {
    pub const DEFAULT_MAX_EVENTS_PER_TICK: usize = 100;

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_events_per_tick == 0 {
            return Err(ConfigError::Invalid(
                "max_events_per_tick must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SceneOrderConfig {
    fn default() -> Self {
        Self {
            max_events_per_tick: Self::DEFAULT_MAX_EVENTS_PER_TICK,
            default_priority: None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

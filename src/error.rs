//=========================================================================
// Errors
//=========================================================================
//
// Error taxonomy for the scene ordering engine.
//
// Only `MissingCollaborator`, `InvalidBaseScene` and `Config` abort
// construction. Everything else is recovered where it happens: the
// engine logs it and skips the operation.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::SceneAddress;

//=== SceneError ==========================================================

/// Failures raised by scene commands, queries and engine construction.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Empty or malformed address passed to a command.
    #[error("Scene address is invalid")]
    InvalidAddress,

    /// `set_scene_order` on a scene that is neither loading nor loaded.
    #[error("Scene '{0}' is not loaded or loading")]
    NotLoadedOrLoading(SceneAddress),

    /// Name lookup for a scene that has not finished loading.
    #[error("Scene '{0}' is not loaded")]
    NotLoaded(SceneAddress),

    /// The host could not resolve the winning candidate to a handle.
    #[error("Active scene '{address}' is invalid (host has no scene named '{name}')")]
    UnresolvedHandle { address: SceneAddress, name: String },

    /// A required collaborator was not wired before `build()`.
    #[error("{0} is invalid")]
    MissingCollaborator(&'static str),

    /// The host did not provide a usable base scene.
    #[error("Base scene is invalid")]
    InvalidBaseScene,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_scene_order::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine and configuration
pub use crate::config::SceneOrderConfig;
pub use crate::engine::SceneOrderingEngineBuilder;
pub use crate::error::{ConfigError, SceneError};

// Core types
pub use crate::core::{
    LoaderEvent, MessageBus, ResourceLoader, SceneAddress, SceneHost, SceneOrderingEngine,
    TickControl, UserData,
};

// Notifications
pub use crate::core::scene::{
    ActiveSceneChanged, LoadSceneFailure, LoadSceneSuccess, UnloadSceneFailure,
    UnloadSceneSuccess,
};

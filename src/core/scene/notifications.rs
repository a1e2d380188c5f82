//=========================================================================
// Scene Notifications
//=========================================================================
//
// Messages the engine publishes on its MessageBus after bookkeeping.
// Load/unload notifications are the loader's events passed through
// unchanged; `ActiveSceneChanged` is raised by the selection pass.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::{SceneAddress, UserData};

//=========================================================================

/// The host's active scene was switched.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSceneChanged<H> {
    pub previous: H,
    pub current: H,
}

/// A scene finished loading and has been registered.
#[derive(Debug, Clone)]
pub struct LoadSceneSuccess {
    pub address: SceneAddress,
    pub scene_name: String,
    pub duration: Duration,
    pub user_data: Option<UserData>,
}

#[derive(Debug, Clone)]
pub struct LoadSceneFailure {
    pub address: SceneAddress,
    pub error_message: String,
    pub user_data: Option<UserData>,
}

#[derive(Debug, Clone)]
pub struct UnloadSceneSuccess {
    pub address: SceneAddress,
    pub user_data: Option<UserData>,
}

#[derive(Debug, Clone)]
pub struct UnloadSceneFailure {
    pub address: SceneAddress,
    pub user_data: Option<UserData>,
}

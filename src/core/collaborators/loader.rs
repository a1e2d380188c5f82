//=========================================================================
// Resource Loader Interface
//=========================================================================
//
// Contract between the scene ordering engine and the asynchronous
// resource loader that actually fetches scenes.
//
// Requests go out through `ResourceLoader`; completions come back as
// `LoaderEvent`s on the channel handed out by `subscribe()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::Receiver;

//=== Internal Dependencies ===============================================

use crate::core::{SceneAddress, UserData};

//=== LoaderEvent =========================================================

/// Completion events raised by the loader.
///
/// For any single address the loader delivers these in the order the
/// matching requests were issued.
#[derive(Debug, Clone)]
pub enum LoaderEvent {
    /// Scene finished loading; `display_name` is the host-side scene name.
    LoadSuccess {
        address: SceneAddress,
        display_name: String,
        duration: Duration,
        user_data: Option<UserData>,
    },

    /// Scene failed to load.
    LoadFailure {
        address: SceneAddress,
        message: String,
        user_data: Option<UserData>,
    },

    /// Scene finished unloading.
    UnloadSuccess {
        address: SceneAddress,
        user_data: Option<UserData>,
    },

    /// Scene failed to unload.
    UnloadFailure {
        address: SceneAddress,
        user_data: Option<UserData>,
    },
}

impl LoaderEvent {
    /// Address the event refers to.
    pub fn address(&self) -> &SceneAddress {
        match self {
            Self::LoadSuccess { address, .. }
            | Self::LoadFailure { address, .. }
            | Self::UnloadSuccess { address, .. }
            | Self::UnloadFailure { address, .. } => address,
        }
    }
}

//=== ResourceLoader ======================================================

/// Asynchronous scene loader capability.
///
/// Request methods must return immediately; completion is reported later
/// through the subscription channel. Membership queries are the single
/// source of truth for a scene's phase.
pub trait ResourceLoader {
    /// Starts loading a scene.
    fn load_scene(
        &mut self,
        address: &SceneAddress,
        priority: Option<i32>,
        user_data: Option<UserData>,
    );

    /// Starts unloading a scene.
    fn unload_scene(&mut self, address: &SceneAddress, user_data: Option<UserData>);

    /// Returns true if the loader knows a scene asset at this address.
    fn has_scene(&self, address: &SceneAddress) -> bool;

    fn scene_is_loaded(&self, address: &SceneAddress) -> bool;
    fn scene_is_loading(&self, address: &SceneAddress) -> bool;
    fn scene_is_unloading(&self, address: &SceneAddress) -> bool;

    fn loaded_scene_addresses(&self) -> Vec<SceneAddress>;
    fn loading_scene_addresses(&self) -> Vec<SceneAddress>;
    fn unloading_scene_addresses(&self) -> Vec<SceneAddress>;

    /// Hands out the completion event stream.
    ///
    /// Called once, when the engine is built.
    fn subscribe(&mut self) -> Receiver<LoaderEvent>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accessor_covers_all_variants() {
        let address = SceneAddress::new("Main", "Menu");
        let events = [
            LoaderEvent::LoadSuccess {
                address: address.clone(),
                display_name: "Menu".into(),
                duration: Duration::from_millis(5),
                user_data: None,
            },
            LoaderEvent::LoadFailure {
                address: address.clone(),
                message: "missing bundle".into(),
                user_data: None,
            },
            LoaderEvent::UnloadSuccess {
                address: address.clone(),
                user_data: None,
            },
            LoaderEvent::UnloadFailure {
                address: address.clone(),
                user_data: None,
            },
        ];

        for event in &events {
            assert_eq!(event.address(), &address);
        }
    }
}

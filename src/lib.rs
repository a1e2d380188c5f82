//=========================================================================
// Aetheric Scene Order - Library Root
//
// Decides which of several concurrently loaded scenes is the active one.
//
// Responsibilities:
// - Forward scene load/unload requests to an asynchronous resource loader
// - Track scene names and caller-assigned order as loads complete
// - Keep the host's active scene on the highest-ordered loaded scene,
//   falling back to the host's base scene
// - Re-publish loader completions as notifications
//
// Typical usage:
// ```ignore
// use aetheric_scene_order::prelude::*;
//
// let mut scenes = SceneOrderingEngineBuilder::new()
//     .with_loader(loader)
//     .with_host(host)
//     .build()?;
//
// scenes.load_scene(&SceneAddress::new("Main", "Menu"), None, None);
// while scenes.update() == TickControl::Continue {
//     for changed in scenes.notifications().read::<ActiveSceneChanged<_>>() { /* ... */ }
//     scenes.clear_notifications();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine, its collaborator traits and supporting types.
// Most callers only need the prelude.
//
pub mod config;
pub mod core;
pub mod error;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the builder that wires collaborators together.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use config::SceneOrderConfig;
pub use crate::core::SceneOrderingEngine;
pub use engine::SceneOrderingEngineBuilder;
pub use error::{ConfigError, SceneError};

//=========================================================================
// Core Systems
//
// Everything the scene ordering engine is made of, below the builder.
//
// Responsibilities:
// - Scene identity (`SceneAddress`) and caller payloads (`UserData`)
// - Capability traits for the loader and host (`collaborators`)
// - Draining loader completion events at tick boundaries (`loader_bridge`)
// - Publishing notifications (`message_bus`)
// - Ordering bookkeeping and active scene selection (`scene`)
//
// Notes:
// All of this runs on a single logical thread. The only cross-thread
// edge is the loader's event channel, drained without blocking.
//
//=========================================================================

//=== Module Declarations =================================================

mod address;
mod user_data;

pub mod collaborators;
pub mod loader_bridge;
pub mod message_bus;
pub mod scene;

//=== Public API ==========================================================

pub use address::SceneAddress;
pub use collaborators::{LoaderEvent, ResourceLoader, SceneHost};
pub use loader_bridge::TickControl;
pub use message_bus::MessageBus;
pub use scene::SceneOrderingEngine;
pub use user_data::UserData;

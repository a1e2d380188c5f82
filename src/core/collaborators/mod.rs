//=========================================================================
// Collaborators
//=========================================================================
//
// Narrow capability interfaces the engine depends on. Production
// implementations live with the host; the engine only sees the traits,
// so backends can be swapped without touching ordering logic.
//
// Components:
// - `loader`: ResourceLoader + LoaderEvent (asynchronous scene I/O)
// - `host`: SceneHost (activation and camera lookup)
//
//=========================================================================

//=== Module Declarations =================================================

mod host;
mod loader;

//=== Public API ==========================================================

pub use host::SceneHost;
pub use loader::{LoaderEvent, ResourceLoader};

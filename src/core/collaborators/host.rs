//=========================================================================
// Scene Host Interface
//=========================================================================
//
// Contract with the host engine's scene graph: resolving loaded scenes
// to handles, switching the active scene and locating the main camera.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;

//=== SceneHost ===========================================================

/// Host-side scene activation capability.
pub trait SceneHost {
    /// Host scene handle. Compared by value to detect activation changes.
    type Handle: Clone + PartialEq + Debug + Send + 'static;

    /// Main camera reference returned by `query_main_camera`.
    type Camera;

    /// The always-present fallback scene, if the host has one.
    fn base_handle(&self) -> Option<Self::Handle>;

    /// Looks up a loaded scene by its display name.
    fn resolve_handle(&self, display_name: &str) -> Option<Self::Handle>;

    fn active_handle(&self) -> Self::Handle;

    fn set_active_handle(&mut self, handle: Self::Handle);

    /// Current main camera of the active scene, if any.
    fn query_main_camera(&self) -> Option<Self::Camera>;
}

//=========================================================================
// Scene System
//=========================================================================
//
// Decides which of the currently loaded scenes is the active one.
//
// Architecture:
//   SceneOrderingEngine
//     ├─ scene_names: HashMap<SceneAddress, String>
//     ├─ scene_order: OrderTable (insertion-ordered)
//     └─ select_candidate() → SceneHost::set_active_handle()
//
// Flow:
//   loader event → bookkeeping → notification → select_candidate()
//
//=========================================================================

//=== Module Declarations =================================================

mod notifications;
mod order_table;
mod ordering_engine;
mod selection;

//=== Public API ==========================================================

pub use notifications::{
    ActiveSceneChanged, LoadSceneFailure, LoadSceneSuccess, UnloadSceneFailure,
    UnloadSceneSuccess,
};
pub use order_table::OrderTable;
pub use ordering_engine::SceneOrderingEngine;
pub use selection::select_candidate;

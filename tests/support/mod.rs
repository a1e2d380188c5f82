//=========================================================================
// Test Support
//=========================================================================
//
// In-memory loader and host used by the integration tests.
//
// FakeLoader tracks loading/loaded/unloading sets the way a real loader
// would and only emits events when a test completes a request.
//
//=========================================================================

#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use aetheric_scene_order::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Logging =============================================================

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//=== FakeLoader ==========================================================

pub struct FakeLoader {
    known: HashSet<SceneAddress>,
    loaded: BTreeSet<SceneAddress>,
    loading: BTreeSet<SceneAddress>,
    unloading: BTreeSet<SceneAddress>,
    sender: Option<Sender<LoaderEvent>>,
    receiver: Receiver<LoaderEvent>,
    pub load_requests: Vec<(SceneAddress, Option<i32>)>,
    pub unload_requests: Vec<SceneAddress>,
    pub last_user_data: Option<UserData>,
    pub subscribe_calls: usize,
}

impl FakeLoader {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            known: HashSet::new(),
            loaded: BTreeSet::new(),
            loading: BTreeSet::new(),
            unloading: BTreeSet::new(),
            sender: Some(sender),
            receiver,
            load_requests: Vec::new(),
            unload_requests: Vec::new(),
            last_user_data: None,
            subscribe_calls: 0,
        }
    }

    /// Registers an asset so `has_scene` reports it.
    pub fn with_known(mut self, address: &SceneAddress) -> Self {
        self.known.insert(address.clone());
        self
    }

    /// Completes an in-flight load.
    pub fn finish_load(&mut self, address: &SceneAddress, name: &str) {
        self.loading.remove(address);
        self.loaded.insert(address.clone());
        self.emit(LoaderEvent::LoadSuccess {
            address: address.clone(),
            display_name: name.to_string(),
            duration: Duration::from_millis(16),
            user_data: self.last_user_data.clone(),
        });
    }

    pub fn fail_load(&mut self, address: &SceneAddress, message: &str) {
        self.loading.remove(address);
        self.emit(LoaderEvent::LoadFailure {
            address: address.clone(),
            message: message.to_string(),
            user_data: self.last_user_data.clone(),
        });
    }

    pub fn finish_unload(&mut self, address: &SceneAddress) {
        self.unloading.remove(address);
        self.emit(LoaderEvent::UnloadSuccess {
            address: address.clone(),
            user_data: self.last_user_data.clone(),
        });
    }

    /// Unload failed: the scene stays loaded.
    pub fn fail_unload(&mut self, address: &SceneAddress) {
        self.unloading.remove(address);
        self.loaded.insert(address.clone());
        self.emit(LoaderEvent::UnloadFailure {
            address: address.clone(),
            user_data: self.last_user_data.clone(),
        });
    }

    /// Unloads a loaded scene on the loader's own initiative.
    pub fn evict(&mut self, address: &SceneAddress) {
        self.loaded.remove(address);
        self.emit(LoaderEvent::UnloadSuccess {
            address: address.clone(),
            user_data: None,
        });
    }

    /// Emits an arbitrary event without touching membership.
    pub fn emit(&self, event: LoaderEvent) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(event);
        }
    }

    /// Drops the event sender, as a loader does on shutdown.
    pub fn disconnect(&mut self) {
        self.sender = None;
    }
}

impl ResourceLoader for FakeLoader {
    fn load_scene(
        &mut self,
        address: &SceneAddress,
        priority: Option<i32>,
        user_data: Option<UserData>,
    ) {
        self.load_requests.push((address.clone(), priority));
        self.last_user_data = user_data;
        if self.loaded.contains(address) || self.loading.contains(address) {
            return;
        }
        self.loading.insert(address.clone());
    }

    fn unload_scene(&mut self, address: &SceneAddress, user_data: Option<UserData>) {
        self.unload_requests.push(address.clone());
        self.last_user_data = user_data;
        if self.loaded.remove(address) {
            self.unloading.insert(address.clone());
        }
    }

    fn has_scene(&self, address: &SceneAddress) -> bool {
        self.known.contains(address)
    }

    fn scene_is_loaded(&self, address: &SceneAddress) -> bool {
        self.loaded.contains(address)
    }

    fn scene_is_loading(&self, address: &SceneAddress) -> bool {
        self.loading.contains(address)
    }

    fn scene_is_unloading(&self, address: &SceneAddress) -> bool {
        self.unloading.contains(address)
    }

    fn loaded_scene_addresses(&self) -> Vec<SceneAddress> {
        self.loaded.iter().cloned().collect()
    }

    fn loading_scene_addresses(&self) -> Vec<SceneAddress> {
        self.loading.iter().cloned().collect()
    }

    fn unloading_scene_addresses(&self) -> Vec<SceneAddress> {
        self.unloading.iter().cloned().collect()
    }

    fn subscribe(&mut self) -> Receiver<LoaderEvent> {
        self.subscribe_calls += 1;
        self.receiver.clone()
    }
}

//=== FakeHost ============================================================

pub const BASE: &str = "GameFramework";

pub struct FakeHost {
    pub active: String,
    pub base: Option<String>,
    pub unresolvable: HashSet<String>,
    pub activations: Vec<String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            active: BASE.to_string(),
            base: Some(BASE.to_string()),
            unresolvable: HashSet::new(),
            activations: Vec::new(),
        }
    }
}

impl SceneHost for FakeHost {
    type Handle = String;
    type Camera = String;

    fn base_handle(&self) -> Option<String> {
        self.base.clone()
    }

    fn resolve_handle(&self, display_name: &str) -> Option<String> {
        if self.unresolvable.contains(display_name) {
            None
        } else {
            Some(display_name.to_string())
        }
    }

    fn active_handle(&self) -> String {
        self.active.clone()
    }

    fn set_active_handle(&mut self, handle: String) {
        self.activations.push(handle.clone());
        self.active = handle;
    }

    fn query_main_camera(&self) -> Option<String> {
        Some(format!("{}/MainCamera", self.active))
    }
}

//=== Engine Helpers ======================================================

pub type TestEngine = SceneOrderingEngine<FakeLoader, FakeHost>;

pub fn engine() -> TestEngine {
    init_logger();
    SceneOrderingEngineBuilder::new()
        .with_loader(FakeLoader::new())
        .with_host(FakeHost::new())
        .build()
        .expect("engine builds with both collaborators")
}

pub fn addr(asset: &str) -> SceneAddress {
    SceneAddress::new("Main", asset)
}

/// Requests a load and completes it in one step.
pub fn load_and_finish(engine: &mut TestEngine, address: &SceneAddress, name: &str) {
    engine.load_scene(address, None, None);
    engine.loader_mut().finish_load(address, name);
    engine.update();
}

pub fn active_changes(engine: &TestEngine) -> Vec<(String, String)> {
    engine
        .notifications()
        .read::<ActiveSceneChanged<String>>()
        .iter()
        .map(|n| (n.previous.clone(), n.current.clone()))
        .collect()
}

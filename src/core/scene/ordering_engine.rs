//=========================================================================
// Scene Ordering Engine
//=========================================================================
//
// Tracks which scenes are loaded, their caller-assigned order, and keeps
// the host's active scene pointed at the best loaded candidate.
//
// Architecture:
//   SceneOrderingEngine
//     ├─ scene_names: HashMap<SceneAddress, String>   (loaded scenes)
//     ├─ scene_order: OrderTable                      (loading + loaded)
//     ├─ loader: L  ──load/unload──▶  LoaderEvent channel ──▶ update()
//     ├─ host: H    ◀──activation/camera──
//     └─ notifications: MessageBus
//
// Flow:
//   update() → collect_tick() → handle_loader_event() → refresh_scene_order()
//
// Everything runs on the caller's thread. Commands return as soon as the
// loader has been asked; completions arrive through `update()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::notifications::{
    ActiveSceneChanged, LoadSceneFailure, LoadSceneSuccess, UnloadSceneFailure,
    UnloadSceneSuccess,
};
use super::{select_candidate, OrderTable};
use crate::config::SceneOrderConfig;
use crate::core::loader_bridge::{LoaderEventCollector, TickControl};
use crate::core::message_bus::MessageBus;
use crate::core::{LoaderEvent, ResourceLoader, SceneAddress, SceneHost, UserData};
use crate::error::SceneError;

//=== SceneOrderingEngine =================================================

/// Owns scene ordering state and drives host activation.
///
/// Build with [`crate::SceneOrderingEngineBuilder`]; both collaborators
/// are required.
///
/// # Failure handling
///
/// Commands never return errors. Invalid addresses, ordering a scene that
/// is not loading or loaded, and unresolvable candidates are logged and
/// skipped. The `try_*` variants return the reason instead of logging it.
/// Loader failures surface only as notifications.
pub struct SceneOrderingEngine<L: ResourceLoader, H: SceneHost> {
    loader: L,
    host: H,
    events: LoaderEventCollector,
    scene_names: HashMap<SceneAddress, String>,
    scene_order: OrderTable,
    base_handle: H::Handle,
    main_camera: Option<H::Camera>,
    notifications: MessageBus,
    config: SceneOrderConfig,
}

impl<L: ResourceLoader, H: SceneHost> SceneOrderingEngine<L, H> {
    //--- Construction -----------------------------------------------------

    /// Subscribes to the loader and captures the host's base scene.
    pub(crate) fn new(
        mut loader: L,
        host: H,
        config: SceneOrderConfig,
    ) -> Result<Self, SceneError> {
        config.validate()?;

        let base_handle = host.base_handle().ok_or(SceneError::InvalidBaseScene)?;
        let receiver = loader.subscribe();

        info!(
            target: "scene",
            "Scene ordering engine ready (base scene: {:?}, events/tick: {})",
            base_handle,
            config.max_events_per_tick
        );

        Ok(Self {
            loader,
            host,
            events: LoaderEventCollector::new(receiver, config.max_events_per_tick),
            scene_names: HashMap::new(),
            scene_order: OrderTable::new(),
            base_handle,
            main_camera: None,
            notifications: MessageBus::new(),
            config,
        })
    }

    //--- Update Loop ------------------------------------------------------

    /// Dispatches loader events that arrived since the last call.
    ///
    /// Returns [`TickControl::Exit`] once the loader has dropped its end
    /// of the event channel; events drained before that are still
    /// handled.
    pub fn update(&mut self) -> TickControl {
        let control = self.events.collect_tick();

        for event in self.events.take_events() {
            self.handle_loader_event(event);
        }

        if control == TickControl::Exit {
            warn!(target: "scene::loader", "Loader event channel disconnected");
        }

        control
    }

    /// Applies one loader completion event.
    ///
    /// Safe to call with duplicate or stale events: a load success only
    /// records a scene the loader still reports as loaded, map updates are
    /// idempotent, and the selection pass only switches the host when the
    /// target differs.
    pub fn handle_loader_event(&mut self, event: LoaderEvent) {
        trace!(target: "scene::loader", "Loader event: {:?}", event);

        match event {
            LoaderEvent::LoadSuccess { address, display_name, duration, user_data } => {
                self.on_load_success(address, display_name, duration, user_data)
            }
            LoaderEvent::LoadFailure { address, message, user_data } => {
                self.on_load_failure(address, message, user_data)
            }
            LoaderEvent::UnloadSuccess { address, user_data } => {
                self.on_unload_success(address, user_data)
            }
            LoaderEvent::UnloadFailure { address, user_data } => {
                self.on_unload_failure(address, user_data)
            }
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Asks the loader to load a scene.
    ///
    /// `priority` falls back to the configured default priority. Name and
    /// order are recorded when the load completes; an order set while the
    /// load is in flight is kept.
    pub fn load_scene(
        &mut self,
        address: &SceneAddress,
        priority: Option<i32>,
        user_data: Option<UserData>,
    ) {
        if let Err(err) = self.try_load_scene(address, priority, user_data) {
            error!(target: "scene", "{}", err);
        }
    }

    pub fn try_load_scene(
        &mut self,
        address: &SceneAddress,
        priority: Option<i32>,
        user_data: Option<UserData>,
    ) -> Result<(), SceneError> {
        Self::check_address(address)?;

        let priority = priority.or(self.config.default_priority);
        debug!(target: "scene", "Loading scene '{}' (priority: {:?})", address, priority);
        self.loader.load_scene(address, priority, user_data);

        Ok(())
    }

    /// Asks the loader to unload a scene and drops its order immediately.
    ///
    /// The order entry is not restored if the unload later fails.
    pub fn unload_scene(&mut self, address: &SceneAddress, user_data: Option<UserData>) {
        if let Err(err) = self.try_unload_scene(address, user_data) {
            error!(target: "scene", "{}", err);
        }
    }

    pub fn try_unload_scene(
        &mut self,
        address: &SceneAddress,
        user_data: Option<UserData>,
    ) -> Result<(), SceneError> {
        Self::check_address(address)?;

        debug!(target: "scene", "Unloading scene '{}'", address);
        self.loader.unload_scene(address, user_data);
        self.scene_order.remove(address);

        Ok(())
    }

    /// Sets the order of a loading or loaded scene.
    ///
    /// For a loaded scene the active scene is recomputed before returning.
    pub fn set_scene_order(&mut self, address: &SceneAddress, order: i32) {
        if let Err(err) = self.try_set_scene_order(address, order) {
            error!(target: "scene::order", "{}", err);
        }
    }

    pub fn try_set_scene_order(
        &mut self,
        address: &SceneAddress,
        order: i32,
    ) -> Result<(), SceneError> {
        Self::check_address(address)?;

        if self.loader.scene_is_loading(address) {
            debug!(target: "scene::order", "Scene '{}' order set to {} (loading)", address, order);
            self.scene_order.set(address, order);
            return Ok(());
        }

        if self.loader.scene_is_loaded(address) {
            debug!(target: "scene::order", "Scene '{}' order set to {}", address, order);
            self.scene_order.set(address, order);
            self.refresh_scene_order();
            return Ok(());
        }

        Err(SceneError::NotLoadedOrLoading(address.clone()))
    }

    /// Re-reads the main camera from the host.
    pub fn refresh_main_camera(&mut self) {
        self.main_camera = self.host.query_main_camera();
    }

    //--- Queries ----------------------------------------------------------

    /// Host-side name of a loaded scene.
    pub fn scene_name(&self, address: &SceneAddress) -> Result<&str, SceneError> {
        self.scene_names
            .get(address)
            .map(String::as_str)
            .ok_or_else(|| SceneError::NotLoaded(address.clone()))
    }

    /// Current order of a loading or loaded scene.
    pub fn scene_order(&self, address: &SceneAddress) -> Option<i32> {
        self.scene_order.get(address)
    }

    pub fn has_scene(&self, address: &SceneAddress) -> bool {
        if let Err(err) = Self::check_address(address) {
            error!(target: "scene", "{}", err);
            return false;
        }
        self.loader.has_scene(address)
    }

    pub fn scene_is_loaded(&self, address: &SceneAddress) -> bool {
        self.loader.scene_is_loaded(address)
    }

    pub fn scene_is_loading(&self, address: &SceneAddress) -> bool {
        self.loader.scene_is_loading(address)
    }

    pub fn scene_is_unloading(&self, address: &SceneAddress) -> bool {
        self.loader.scene_is_unloading(address)
    }

    pub fn loaded_scene_addresses(&self) -> Vec<SceneAddress> {
        self.loader.loaded_scene_addresses()
    }

    pub fn loading_scene_addresses(&self) -> Vec<SceneAddress> {
        self.loader.loading_scene_addresses()
    }

    pub fn unloading_scene_addresses(&self) -> Vec<SceneAddress> {
        self.loader.unloading_scene_addresses()
    }

    /// Camera captured by the last refresh.
    pub fn main_camera(&self) -> Option<&H::Camera> {
        self.main_camera.as_ref()
    }

    pub fn active_handle(&self) -> H::Handle {
        self.host.active_handle()
    }

    pub fn base_handle(&self) -> &H::Handle {
        &self.base_handle
    }

    //--- Notifications ----------------------------------------------------

    /// Notifications published since the last clear.
    pub fn notifications(&self) -> &MessageBus {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut MessageBus {
        &mut self.notifications
    }

    /// Drops all published notifications. Call at the tick boundary.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear_all();
    }

    //--- Collaborator Access ----------------------------------------------

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SceneOrderConfig {
        &self.config
    }

    //--- Event Handlers ---------------------------------------------------

    fn on_load_success(
        &mut self,
        address: SceneAddress,
        display_name: String,
        duration: std::time::Duration,
        user_data: Option<UserData>,
    ) {
        if !address.is_valid() {
            warn!(target: "scene::loader", "Ignoring load success for invalid address");
            return;
        }

        debug!(
            target: "scene::loader",
            "Scene '{}' loaded as '{}' in {:?}",
            address,
            display_name,
            duration
        );

        // A queued or duplicate success can arrive after an unload was
        // requested or finished. Only a scene the loader still reports as
        // loaded gets a name and an order.
        let still_loaded = self.loader.scene_is_loaded(&address);
        if still_loaded {
            self.scene_names.insert(address.clone(), display_name.clone());
            self.scene_order.insert_if_absent(&address, 0);
        } else {
            debug!(
                target: "scene::loader",
                "Scene '{}' is no longer loaded, skipping bookkeeping",
                address
            );
        }

        self.notifications.push(LoadSceneSuccess {
            address,
            scene_name: display_name,
            duration,
            user_data,
        });

        if still_loaded {
            self.refresh_scene_order();
        }
    }

    fn on_load_failure(
        &mut self,
        address: SceneAddress,
        message: String,
        user_data: Option<UserData>,
    ) {
        warn!(
            target: "scene::loader",
            "Load scene failure, scene '{}', error message '{}'",
            address,
            message
        );

        // Departs from leaving the maps untouched on failure: an order set
        // while loading must not outlive the failed load, or it would break
        // order membership and win selection without a name to resolve.
        let still_tracked =
            self.loader.scene_is_loading(&address) || self.loader.scene_is_loaded(&address);
        let dropped_order = !still_tracked && self.scene_order.remove(&address).is_some();

        self.notifications.push(LoadSceneFailure {
            address,
            error_message: message,
            user_data,
        });

        if dropped_order {
            self.refresh_scene_order();
        }
    }

    fn on_unload_success(&mut self, address: SceneAddress, user_data: Option<UserData>) {
        debug!(target: "scene::loader", "Scene '{}' unloaded", address);

        self.scene_names.remove(&address);
        self.notifications.push(UnloadSceneSuccess {
            address: address.clone(),
            user_data,
        });
        self.scene_order.remove(&address);

        self.refresh_scene_order();
    }

    fn on_unload_failure(&mut self, address: SceneAddress, user_data: Option<UserData>) {
        warn!(target: "scene::loader", "Unload scene failure, scene '{}'", address);

        self.notifications.push(UnloadSceneFailure { address, user_data });
    }

    //--- Active Scene Selection -------------------------------------------

    /// Points the host at the best loaded candidate, or the base scene.
    fn refresh_scene_order(&mut self) {
        let loader = &self.loader;
        let candidate = select_candidate(&self.scene_order, |a| loader.scene_is_loading(a));

        let Some(address) = candidate else {
            let base = self.base_handle.clone();
            self.set_active_scene(base);
            return;
        };

        match self.resolve_candidate(address) {
            Ok(handle) => self.set_active_scene(handle),
            Err(err) => error!(target: "scene::order", "{}", err),
        }
    }

    fn resolve_candidate(&self, address: &SceneAddress) -> Result<H::Handle, SceneError> {
        let name = self.scene_name(address)?;
        self.host
            .resolve_handle(name)
            .ok_or_else(|| SceneError::UnresolvedHandle {
                address: address.clone(),
                name: name.to_string(),
            })
    }

    fn set_active_scene(&mut self, handle: H::Handle) {
        let previous = self.host.active_handle();

        if previous != handle {
            debug!(
                target: "scene::order",
                "Active scene changed: {:?} -> {:?}",
                previous,
                handle
            );
            self.host.set_active_handle(handle.clone());
            self.notifications.push(ActiveSceneChanged {
                previous,
                current: handle,
            });
        }

        self.refresh_main_camera();
    }

    //--- Internal Helpers -------------------------------------------------

    fn check_address(address: &SceneAddress) -> Result<(), SceneError> {
        if address.is_valid() {
            Ok(())
        } else {
            Err(SceneError::InvalidAddress)
        }
    }
}

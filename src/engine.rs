//=========================================================================
// Scene Ordering Engine Builder
//
// Wires the loader and host into a `SceneOrderingEngine`.
//
// Architecture:
// ```text
//     SceneOrderingEngineBuilder ──build()──> SceneOrderingEngine ──update()──> [tick]
//         │                                       │
//         ├─ with_loader()                        ├─ load/unload/set order
//         ├─ with_host()                          └─ notifications()
//         ├─ with_config()
//         ├─ with_max_events_per_tick()
//         └─ with_default_priority()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::SceneOrderConfig;
use crate::core::{ResourceLoader, SceneHost, SceneOrderingEngine};
use crate::error::SceneError;

//=== SceneOrderingEngineBuilder ==========================================

/// Builder for a [`SceneOrderingEngine`].
///
/// # Default Values
///
/// - **Events per tick**: 100
/// - **Default priority**: none (loader decides)
///
/// # Examples
///
/// ```ignore
/// let mut engine = SceneOrderingEngineBuilder::new()
///     .with_loader(loader)
///     .with_host(host)
///     .with_max_events_per_tick(32)
///     .build()?;
///
/// engine.load_scene(&SceneAddress::new("Main", "Menu"), None, None);
/// loop {
///     engine.update();
///     // read engine.notifications() ...
///     engine.clear_notifications();
/// }
/// ```
pub struct SceneOrderingEngineBuilder<L: ResourceLoader, H: SceneHost> {
    loader: Option<L>,
    host: Option<H>,
    config: SceneOrderConfig,
}

impl<L: ResourceLoader, H: SceneHost> SceneOrderingEngineBuilder<L, H> {
    /// Creates a builder with default configuration and no collaborators.
    pub fn new() -> Self {
        Self {
            loader: None,
            host: None,
            config: SceneOrderConfig::default(),
        }
    }

    pub fn with_loader(mut self, loader: L) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn with_host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    /// Replaces the whole configuration (e.g. one loaded from TOML).
    ///
    /// Validated by [`build`](Self::build).
    pub fn with_config(mut self, config: SceneOrderConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how many loader events one `update()` may dispatch.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_tick(mut self, max: usize) -> Self {
        assert!(max > 0, "Events per tick must be positive");
        self.config.max_events_per_tick = max;
        self
    }

    /// Sets the priority used for loads that do not specify one.
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.config.default_priority = Some(priority);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Fails if the loader or host is missing, if the host has no base
    /// scene, or if the configuration is invalid. The engine cannot run
    /// in any of these cases.
    pub fn build(self) -> Result<SceneOrderingEngine<L, H>, SceneError> {
        let result = self.try_build();
        if let Err(err) = &result {
            error!(target: "scene", "Scene ordering engine failed to start: {}", err);
        }
        result
    }

    fn try_build(self) -> Result<SceneOrderingEngine<L, H>, SceneError> {
        let loader = self.loader.ok_or(SceneError::MissingCollaborator("Resource loader"))?;
        let host = self.host.ok_or(SceneError::MissingCollaborator("Scene host"))?;

        info!(
            target: "scene",
            "Building scene ordering engine (events/tick: {}, default priority: {:?})",
            self.config.max_events_per_tick,
            self.config.default_priority
        );

        SceneOrderingEngine::new(loader, host, self.config)
    }
}

impl<L: ResourceLoader, H: SceneHost> Default for SceneOrderingEngineBuilder<L, H> {
    fn default() -> Self {
        Self::new()
    }
}

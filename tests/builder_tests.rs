mod support;

use aetheric_scene_order::prelude::*;
use support::{addr, init_logger, FakeHost, FakeLoader, BASE};

type Builder = SceneOrderingEngineBuilder<FakeLoader, FakeHost>;

#[test]
fn build_requires_loader() {
    init_logger();
    let result = Builder::new().with_host(FakeHost::new()).build();
    assert!(matches!(
        result,
        Err(SceneError::MissingCollaborator("Resource loader"))
    ));
}

#[test]
fn build_requires_host() {
    init_logger();
    let result = Builder::new().with_loader(FakeLoader::new()).build();
    assert!(matches!(result, Err(SceneError::MissingCollaborator("Scene host"))));
}

#[test]
fn build_requires_base_scene() {
    init_logger();
    let mut host = FakeHost::new();
    host.base = None;

    let result = Builder::new()
        .with_loader(FakeLoader::new())
        .with_host(host)
        .build();
    assert!(matches!(result, Err(SceneError::InvalidBaseScene)));
}

#[test]
fn build_rejects_invalid_config() {
    init_logger();
    let config = SceneOrderConfig {
        max_events_per_tick: 0,
        default_priority: None,
    };

    let result = Builder::new()
        .with_loader(FakeLoader::new())
        .with_host(FakeHost::new())
        .with_config(config)
        .build();
    assert!(matches!(
        result,
        Err(SceneError::Config(ConfigError::Invalid(_)))
    ));
}

#[test]
fn build_subscribes_once_and_captures_base() {
    let engine = support::engine();

    assert_eq!(engine.loader().subscribe_calls, 1);
    assert_eq!(engine.base_handle(), BASE);
    assert_eq!(engine.active_handle(), BASE);
    assert!(engine.notifications().total_count() == 0);
}

#[test]
fn builder_defaults() {
    let engine = support::engine();
    assert_eq!(engine.config(), &SceneOrderConfig::default());
}

#[test]
fn builder_fluent_api_chaining() {
    init_logger();
    let engine = Builder::new()
        .with_loader(FakeLoader::new())
        .with_host(FakeHost::new())
        .with_max_events_per_tick(4)
        .with_default_priority(2)
        .build()
        .unwrap();

    assert_eq!(engine.config().max_events_per_tick, 4);
    assert_eq!(engine.config().default_priority, Some(2));
}

#[test]
fn builder_accepts_config_from_toml() {
    init_logger();
    let config = SceneOrderConfig::from_toml_str("max_events_per_tick = 1").unwrap();
    let mut engine = Builder::new()
        .with_loader(FakeLoader::new())
        .with_host(FakeHost::new())
        .with_config(config)
        .build()
        .unwrap();

    let (x, y) = (addr("X"), addr("Y"));
    engine.load_scene(&x, None, None);
    engine.load_scene(&y, None, None);
    engine.loader_mut().finish_load(&x, "X");
    engine.loader_mut().finish_load(&y, "Y");

    engine.update();
    assert!(engine.scene_name(&x).is_ok());
    assert!(engine.scene_name(&y).is_err(), "Second event waits for the next tick");

    engine.update();
    assert_eq!(engine.scene_name(&y).unwrap(), "Y");
}

#[test]
#[should_panic(expected = "Events per tick must be positive")]
fn builder_with_zero_events_per_tick_panics() {
    Builder::new().with_max_events_per_tick(0);
}

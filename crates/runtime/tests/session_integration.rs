use range_core::{BulletType, ReloadError, TypeCounts, WeaponEvent};
use runtime::{Event, RunnerConfig, SessionEvent, SessionRunner, Topic};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// End-to-End Firing Session Scenario
///
/// 1. Runner starts over the standard armory with a pinned seed
/// 2. A bulk session generates a batch and fires it to exhaustion
/// 3. Verify statistics, conservation, and the published event stream
#[tokio::test]
async fn complete_session_scenario() {
    init_tracing();

    let config = RunnerConfig {
        seed: Some(0xCAFE),
        ..RunnerConfig::default()
    };
    let mut runner = SessionRunner::new(config.clone());

    let mut weapon_events = runner.subscribe(Topic::Weapon);
    let mut session_events = runner.subscribe(Topic::Session);

    let stats = runner.run_session().expect("session should run to exhaustion");

    // Conservation: every generated round was fired, none duplicated.
    let range = config.range_config.batch_min..=config.range_config.batch_max;
    assert!(range.contains(&stats.fired_count));
    assert_eq!(stats.counts.total(), stats.fired_count);

    // Weapon containers end the session empty.
    assert_eq!(runner.weapon_state().magazine_rounds(), 0);
    assert_eq!(runner.weapon_state().chamber_rounds(), 0);

    // The event stream agrees with the statistics.
    let mut fired = 0u32;
    let mut counts = TypeCounts::new();
    while let Ok(event) = weapon_events.try_recv() {
        if let Event::Weapon(WeaponEvent::Fired { kind }) = event {
            fired += 1;
            counts.record(kind);
        }
    }
    assert_eq!(fired, stats.fired_count);
    assert_eq!(counts, stats.counts);

    // Session topic: Started with the pinned seed, then Completed.
    let started = session_events.recv().await.expect("started event");
    assert_eq!(started, Event::Session(SessionEvent::Started { seed: 0xCAFE }));
    let completed = session_events.recv().await.expect("completed event");
    assert_eq!(completed, Event::Session(SessionEvent::Completed { stats }));
}

#[tokio::test]
async fn pinned_seed_replays_identically() {
    init_tracing();

    let run = || {
        let config = RunnerConfig {
            seed: Some(42),
            ..RunnerConfig::default()
        };
        SessionRunner::new(config)
            .run_session()
            .expect("session should run to exhaustion")
    };

    assert_eq!(run(), run());
}

#[tokio::test]
async fn interactive_reload_then_volley_drains_the_tracer_box() {
    init_tracing();

    let mut runner = SessionRunner::new(RunnerConfig::default());
    let mut weapon_events = runner.subscribe(Topic::Weapon);

    // The standard armory keeps five tracer rounds in box 2.
    let report = runner.reload(2).expect("reload from tracer box");
    assert_eq!(report.kind, BulletType::Tracer);
    assert_eq!(report.loaded, 5);
    assert_eq!(runner.ammo_boxes().get(2).unwrap().remaining(), 0);

    let volley = runner.empty_magazine().expect("volley");
    assert_eq!(volley.fired, 5);
    assert_eq!(volley.counts.get(BulletType::Tracer), 5);
    assert_eq!(runner.weapon_state().magazine_rounds(), 0);

    // A second reload from the now-empty box is denied but recoverable.
    let err = runner.reload(2).unwrap_err();
    assert_eq!(
        err,
        runtime::RuntimeError::Reload(ReloadError::EmptyBox { index: 2 })
    );

    let mut fired = 0;
    let mut exhausted = 0;
    while let Ok(event) = weapon_events.try_recv() {
        match event {
            Event::Weapon(WeaponEvent::Fired { .. }) => fired += 1,
            Event::Weapon(WeaponEvent::BoxExhausted { index, kind }) => {
                assert_eq!(index, 2);
                assert_eq!(kind, BulletType::Tracer);
                exhausted += 1;
            }
            _ => {}
        }
    }
    assert_eq!(fired, 5);
    assert_eq!(exhausted, 1);
}

#[tokio::test]
async fn demonstrate_publishes_one_flight_per_type() {
    init_tracing();

    let runner = SessionRunner::new(RunnerConfig::default());
    let mut weapon_events = runner.subscribe(Topic::Weapon);

    runner.demonstrate();

    let mut kinds = Vec::new();
    while let Ok(Event::Weapon(WeaponEvent::Fired { kind })) = weapon_events.try_recv()
    {
        kinds.push(kind);
    }
    assert_eq!(kinds, BulletType::ALL.to_vec());
}

use std::time::Duration;

use game_core::{
    CardinalDirection, Enemy, EnemyId, Grid, Hero, HeroCommand, Position, Tick, TickEvent, World,
};
use runtime::{Event, GameStateEvent, LifecycleEvent, Runtime, RuntimeConfig, Topic};

fn corridor() -> World {
    World::from_rows(&[
        "######", //
        "#@...#", //
        "######",
    ])
    .unwrap()
}

async fn next_tick(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> (Vec<TickEvent>, World) {
    match rx.recv().await.expect("tick event") {
        Event::GameState(GameStateEvent::TickResolved { report, snapshot }) => {
            (report.events, *snapshot)
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn submitted_input_applies_on_the_next_tick() {
    let runtime = Runtime::builder()
        .world(corridor())
        .seed(1)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::GameState);

    handle
        .submit(HeroCommand::Move(CardinalDirection::East))
        .await
        .unwrap();

    let (events, snapshot) = next_tick(&mut rx).await;
    assert_eq!(
        events,
        vec![TickEvent::HeroMoved {
            from: Position::new(1, 1),
            to: Position::new(2, 1),
        }]
    );
    assert_eq!(snapshot.hero().position(), Position::new(2, 1));

    let world = handle.query_state().await.unwrap();
    assert_eq!(world.hero().position(), Position::new(2, 1));
    assert_eq!(world.tick(), Tick(1));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn extra_inputs_between_ticks_are_dropped() {
    let runtime = Runtime::builder()
        .world(corridor())
        .seed(1)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::GameState);

    for _ in 0..3 {
        handle
            .submit(HeroCommand::Move(CardinalDirection::East))
            .await
            .unwrap();
    }

    let (first, _) = next_tick(&mut rx).await;
    assert_eq!(first.len(), 1);
    let (second, snapshot) = next_tick(&mut rx).await;
    assert!(second.is_empty());
    assert_eq!(snapshot.hero().position(), Position::new(2, 1));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn dead_hero_ends_the_session() {
    let grid = Grid::from_rows(&["@e."]).unwrap();
    let hero = Hero::new(Position::new(0, 0)).with_health(5);
    let enemies = vec![Enemy::new(EnemyId(0), Position::new(1, 0))];
    let world = World::from_parts(grid, hero, enemies).unwrap();

    let runtime = Runtime::builder()
        .world(world)
        .seed(3)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut lifecycle = handle.subscribe(Topic::Lifecycle);

    match lifecycle.recv().await.unwrap() {
        Event::Lifecycle(LifecycleEvent::GameOver { tick }) => assert_eq!(tick, Tick(10)),
        other => panic!("unexpected event: {other:?}"),
    }

    tokio::time::advance(Duration::from_secs(5)).await;
    let world = handle.query_state().await.unwrap();
    assert_eq!(world.tick(), Tick(10));
    assert!(world.is_game_over());

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn same_seed_generates_the_same_dungeon() {
    let config = RuntimeConfig::default().with_seed(2024);

    let first = Runtime::builder()
        .config(config.clone())
        .build()
        .await
        .unwrap();
    let second = Runtime::builder().config(config).build().await.unwrap();
    assert_eq!(first.seed(), 2024);

    let a = first.handle().query_state().await.unwrap();
    let b = second.handle().query_state().await.unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.enemies().len(), 10);

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn tiny_maps_fail_to_build() {
    let mut config = RuntimeConfig::default().with_seed(5);
    config.game_config = config.game_config.with_dimensions(4, 4);

    let err = Runtime::builder()
        .config(config)
        .build()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, runtime::RuntimeError::Generation(_)));
}

#[tokio::test]
async fn tick_events_serialize() {
    let runtime = Runtime::builder()
        .world(corridor())
        .config(RuntimeConfig {
            tick_interval: Duration::from_millis(1),
            ..RuntimeConfig::default()
        })
        .build()
        .await
        .unwrap();
    let mut rx = runtime.handle().subscribe(Topic::GameState);

    let event = rx.recv().await.unwrap();
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("TickResolved"));

    runtime.shutdown().await.unwrap();
}

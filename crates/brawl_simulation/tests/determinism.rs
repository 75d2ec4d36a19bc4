//! Тесты детерминизма
//!
//! Одинаковый seed + одинаковый input → идентичный MatchSnapshot

mod common;

use bevy::prelude::*;
use brawl_simulation::*;
use common::*;

/// Scripted матч: игрок идёт вправо, прыгает каждые 40 тиков и бьёт
fn run_match(seed: u64, ticks: u64) -> MatchSnapshot {
    let config = MatchConfig {
        seed: Some(seed),
        ..default()
    };
    let mut app = create_match_app(config).expect("default config is valid");

    let mut players = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>();
    let player = players.iter(app.world()).next().expect("one player");

    for tick in 0..ticks {
        set_intent(
            &mut app,
            player,
            PlayerIntent {
                move_right: tick % 3 != 0,
                jump: tick % 40 == 0,
                primary_attack: true,
                secondary_attack: tick % 2 == 0,
                ..default()
            },
        );
        advance_tick(&mut app);
    }

    match_snapshot(app.world_mut())
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: u64 = 600;

    let snapshot1 = run_match(SEED, TICK_COUNT);
    let snapshot2 = run_match(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_snapshot_tracks_ticks() {
    let snapshot = run_match(1, 25);

    assert_eq!(snapshot.tick, 25);
    assert_eq!(snapshot.combatants.len(), 2);
}

#[test]
fn test_initial_snapshot_shape() {
    let (mut app, _player, _opponent) = match_app(0.0);
    let snapshot = match_snapshot(app.world_mut());

    assert_eq!(snapshot.tick, 0);
    assert_eq!(snapshot.outcome, OutcomeSnapshot::Ongoing);

    let player = snapshot
        .combatants
        .iter()
        .find(|c| c.kind == ActorKind::Player)
        .unwrap();
    assert_eq!((player.x, player.y), (50.0, 500.0));
    assert_eq!(player.color, [0, 0, 255]);
    assert_eq!(player.stamina, Some(100.0));
    assert!(player.alive);

    let opponent = snapshot
        .combatants
        .iter()
        .find(|c| c.kind == ActorKind::Opponent)
        .unwrap();
    assert_eq!((opponent.x, opponent.y), (700.0, 500.0));
    assert_eq!(opponent.color, [255, 0, 0]);
    assert_eq!(opponent.stamina, None);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let snapshot = run_match(3, 10);

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: MatchSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, snapshot);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tick"], 10);
    assert_eq!(value["outcome"], "Ongoing");
    assert_eq!(value["combatants"].as_array().map(Vec::len), Some(2));
}

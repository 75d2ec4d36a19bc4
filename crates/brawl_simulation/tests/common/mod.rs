//! Общие helpers для integration тестов

#![allow(dead_code)]

use bevy::ecs::event::{EventCursor, Events};
use bevy::prelude::*;
use brawl_simulation::*;

/// Матч по умолчанию с фиксированным seed и заданным шансом замереть
pub fn match_app(stand_still_probability: f64) -> (App, Entity, Entity) {
    let mut config = MatchConfig {
        seed: Some(7),
        ..default()
    };
    config.opponent.stand_still_probability = stand_still_probability;

    let mut app = create_match_app(config).expect("default config is valid");
    let mut actors = app
        .world_mut()
        .query_filtered::<(Entity, Has<Player>), With<Actor>>();
    let mut player = Entity::PLACEHOLDER;
    let mut opponent = Entity::PLACEHOLDER;
    for (entity, is_player) in actors.iter(app.world()) {
        if is_player {
            player = entity;
        } else {
            opponent = entity;
        }
    }

    (app, player, opponent)
}

pub fn place(app: &mut App, entity: Entity, x: f32) {
    app.world_mut()
        .get_mut::<ArenaBody>(entity)
        .expect("entity has ArenaBody")
        .position
        .x = x;
}

pub fn set_intent(app: &mut App, player: Entity, intent: PlayerIntent) {
    *app.world_mut()
        .get_mut::<PlayerIntent>(player)
        .expect("player has PlayerIntent") = intent;
}

pub fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        advance_tick(app);
    }
}

pub fn health(app: &App, entity: Entity) -> u32 {
    app.world().get::<Health>(entity).expect("entity has Health").current
}

pub fn body(app: &App, entity: Entity) -> ArenaBody {
    *app.world().get::<ArenaBody>(entity).expect("entity has ArenaBody")
}

/// Накопитель событий типа E по тикам
///
/// Буферы событий живут два тика, поэтому читаем через постоянный cursor
/// после каждого `advance_tick`.
pub struct EventLog<E: Event> {
    cursor: EventCursor<E>,
    pub events: Vec<E>,
}

impl<E: Event + Clone> EventLog<E> {
    pub fn new() -> Self {
        Self {
            cursor: EventCursor::default(),
            events: Vec::new(),
        }
    }

    pub fn collect(&mut self, app: &App) {
        let events = app.world().resource::<Events<E>>();
        self.events.extend(self.cursor.read(events).cloned());
    }
}

/// Прогнать `ticks` тиков, собирая события типа E
pub fn run_ticks_logged<E: Event + Clone>(app: &mut App, ticks: usize, log: &mut EventLog<E>) {
    for _ in 0..ticks {
        advance_tick(app);
        log.collect(app);
    }
}

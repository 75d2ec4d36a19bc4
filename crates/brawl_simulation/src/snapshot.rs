//! Read-only snapshot для presentation
//!
//! Host читает только этот снимок (или те же компоненты напрямую),
//! никакой логики симуляции на стороне host нет.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::MatchOutcome;
use crate::components::{Actor, ArenaBody, FillColor, Health, KinematicController, Player, Stamina};
use crate::SimulationClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Opponent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    /// Entity index (стабилен в пределах матча)
    pub id: u32,
    pub kind: ActorKind,
    /// false — выбыл из коллекции бойцов
    pub alive: bool,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [u8; 3],
    pub health: u32,
    pub max_health: u32,
    /// Только у игрока
    pub stamina: Option<f32>,
    pub airborne: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeSnapshot {
    Ongoing,
    Won { winner: u32 },
    Draw,
}

impl From<MatchOutcome> for OutcomeSnapshot {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Ongoing => OutcomeSnapshot::Ongoing,
            MatchOutcome::Won { winner } => OutcomeSnapshot::Won {
                winner: winner.index(),
            },
            MatchOutcome::Draw => OutcomeSnapshot::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub outcome: OutcomeSnapshot,
    /// Отсортированы по id (детерминированный порядок)
    pub combatants: Vec<CombatantSnapshot>,
}

/// Снимок текущего состояния матча
pub fn match_snapshot(world: &mut World) -> MatchSnapshot {
    let tick = world.get_resource::<SimulationClock>().map(|c| c.tick).unwrap_or(0);
    let outcome = world
        .get_resource::<MatchOutcome>()
        .copied()
        .unwrap_or_default()
        .into();

    let mut query = world.query::<(
        Entity,
        &ArenaBody,
        &Health,
        &FillColor,
        Has<Actor>,
        Has<Player>,
        Option<&Stamina>,
        Option<&KinematicController>,
    )>();

    let mut combatants: Vec<CombatantSnapshot> = query
        .iter(world)
        .map(|(entity, body, health, color, alive, is_player, stamina, controller)| CombatantSnapshot {
            id: entity.index(),
            kind: if is_player { ActorKind::Player } else { ActorKind::Opponent },
            alive,
            x: body.position.x,
            y: body.position.y,
            width: body.size.x,
            height: body.size.y,
            color: color.0,
            health: health.current,
            max_health: health.max,
            stamina: stamina.map(|s| s.current),
            airborne: controller.is_some_and(|c| c.airborne),
        })
        .collect();

    combatants.sort_by_key(|c| c.id);

    MatchSnapshot {
        tick,
        outcome,
        combatants,
    }
}

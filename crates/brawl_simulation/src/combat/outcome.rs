//! Match outcome: сигнал конца матча
//!
//! Матч не останавливается — host решает, что делать с сигналом.
//! Outcome фиксируется один раз, когда смерть оставила ≤ 1 бойца.

use bevy::prelude::*;

use crate::combat::EntityDied;
use crate::components::Actor;
use crate::SimulationClock;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchOutcome {
    #[default]
    Ongoing,
    Won {
        winner: Entity,
    },
    /// Оба бойца выбыли
    Draw,
}

impl MatchOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchOutcome::Ongoing)
    }
}

/// Событие: матч завершён
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MatchEnded {
    pub outcome: MatchOutcome,
    pub tick: u64,
}

/// Система: detect match end (последняя фаза тика)
pub fn detect_match_end(
    mut deaths: EventReader<EntityDied>,
    remaining: Query<Entity, With<Actor>>,
    clock: Res<SimulationClock>,
    mut outcome: ResMut<MatchOutcome>,
    mut ended: EventWriter<MatchEnded>,
) {
    if deaths.read().count() == 0 || outcome.is_over() {
        return;
    }

    let alive: Vec<Entity> = remaining.iter().collect();
    let result = match alive.as_slice() {
        [] => MatchOutcome::Draw,
        [winner] => MatchOutcome::Won { winner: *winner },
        _ => return,
    };

    *outcome = result;
    ended.write(MatchEnded {
        outcome: result,
        tick: clock.tick,
    });

    crate::logger::log_info(&format!("Match ended at tick {}: {:?}", clock.tick, result));
}

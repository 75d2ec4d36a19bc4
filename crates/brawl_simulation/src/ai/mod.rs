//! AI decision-making module
//!
//! Stochastic decision policy противника (attack / retreat / hold / idle).

use bevy::prelude::*;

pub mod simple_fsm;

// Re-export основных типов
pub use simple_fsm::{ai_decision, decide, AIConfig, AIState};

use crate::{CombatTick, TickSet};

/// AI Plugin
///
/// Регистрирует ai_decision в фазе Decision (после всех фаз игрока).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(CombatTick, ai_decision.in_set(TickSet::Decision));
    }
}

//! Combat system module
//!
//! ECS ответственность:
//! - Game state: Health, Stamina, Attacker (cooldowns)
//! - Combat rules: contact damage, явные атаки, смерть
//! - Events: DamageDealt, EntityDied, AttackExecuted, MatchEnded

use bevy::ecs::event::Events;
use bevy::prelude::*;

pub mod attacker;
pub mod damage;
pub mod outcome;
pub mod stamina;


// Re-export основных типов
pub use attacker::{tick_attack_cooldowns, AttackKind, AttackSlot, Attacker};
pub use damage::{
    apply_contact_damage, execute_player_attacks, AttackExecuted, DamageDealt, DamageSource,
    DamageWriter, Dead, EntityDied, Hit,
};
pub use outcome::{detect_match_end, MatchEnded, MatchOutcome};
pub use stamina::regenerate_stamina;

use crate::{CombatTick, TickSet};

/// Combat Plugin
///
/// Регистрирует combat системы в CombatTick.
///
/// Порядок выполнения (через TickSet):
/// 1. tick_attack_cooldowns — Cooldowns
/// 2. regenerate_stamina — хвост PlayerMovement (после movement систем)
/// 3. apply_contact_damage — Contact
/// 4. execute_player_attacks — PlayerAttacks
/// 5. detect_match_end — Outcome
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<AttackExecuted>()
            .add_event::<MatchEnded>()
            .init_resource::<MatchOutcome>();

        app.add_systems(
            CombatTick,
            (
                tick_attack_cooldowns.in_set(TickSet::Cooldowns),
                regenerate_stamina
                    .in_set(TickSet::PlayerMovement)
                    .after(crate::physics::apply_horizontal_movement),
                apply_contact_damage.in_set(TickSet::Contact),
                execute_player_attacks.in_set(TickSet::PlayerAttacks),
                detect_match_end.in_set(TickSet::Outcome),
            ),
        );
    }
}

/// Swap double-buffer combat событий
///
/// В `app.update()` это делает event_update_system (First). Ручной тик
/// (`advance_tick`) вызывает эту функцию сам: событие живёт два тика, дальше удаляется.
pub fn update_combat_events(world: &mut World) {
    world.resource_mut::<Events<DamageDealt>>().update();
    world.resource_mut::<Events<EntityDied>>().update();
    world.resource_mut::<Events<AttackExecuted>>().update();
    world.resource_mut::<Events<MatchEnded>>().update();
}

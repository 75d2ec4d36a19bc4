//! Stamina management система
//!
//! - Прыжок стоит JUMP_STAMINA_COST (списывается в physics::apply_jump_intent)
//! - Ходьба stamina не тратит, но масштабирует скорость и блокирует regen
//! - Регенерация: +regen_per_tick в каждом тике без movement intent

use bevy::prelude::*;

use crate::components::{Actor, PlayerIntent, Stamina};

/// Система: regenerate stamina в покое
///
/// Не зависит от прыжка: в воздухе без ходьбы stamina тоже восстанавливается.
pub fn regenerate_stamina(mut query: Query<(&PlayerIntent, &mut Stamina), With<Actor>>) {
    for (intent, mut stamina) in query.iter_mut() {
        if !intent.is_moving() {
            stamina.regenerate();
        }
    }
}

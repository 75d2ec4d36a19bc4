//! Attacker component — атаки бойца и их cooldown таймеры
//!
//! Каждый тип атаки имеет независимый таймер (в тиках):
//! - атака разрешена только при timer == 0
//! - выполнение атаки ставит timer = cooldown
//! - каждый тик ненулевой timer уменьшается на 1 (не ниже 0)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{AttackConfig, PUNCH_COOLDOWN, PUNCH_DAMAGE};

/// Тип атаки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AttackKind {
    /// Быстрая/слабая (punch; единственная атака противника)
    Light,
    /// Медленная/сильная (kick)
    Heavy,
}

/// Один слот атаки: урон + cooldown
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AttackSlot {
    pub damage: u32,
    /// Cooldown между атаками (тики)
    pub cooldown: u32,
    /// Текущий таймер (уменьшается до 0)
    pub timer: u32,
}

impl AttackSlot {
    pub fn new(damage: u32, cooldown: u32) -> Self {
        Self {
            damage,
            cooldown,
            timer: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.timer == 0
    }

    /// Начать атаку (сбросить cooldown)
    pub fn trigger(&mut self) {
        self.timer = self.cooldown;
    }

    pub fn tick(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }
}

impl From<AttackConfig> for AttackSlot {
    fn from(config: AttackConfig) -> Self {
        Self::new(config.damage, config.cooldown)
    }
}

/// Attacker — набор атак бойца
///
/// Игрок: light + heavy. Противник: только light (heavy = None).
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    pub light: AttackSlot,
    pub heavy: Option<AttackSlot>,
}

impl Default for Attacker {
    fn default() -> Self {
        Self::single(AttackSlot::new(PUNCH_DAMAGE, PUNCH_COOLDOWN))
    }
}

impl Attacker {
    pub fn single(light: AttackSlot) -> Self {
        Self { light, heavy: None }
    }

    pub fn dual(light: AttackSlot, heavy: AttackSlot) -> Self {
        Self {
            light,
            heavy: Some(heavy),
        }
    }

    pub fn slot(&self, kind: AttackKind) -> Option<&AttackSlot> {
        match kind {
            AttackKind::Light => Some(&self.light),
            AttackKind::Heavy => self.heavy.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, kind: AttackKind) -> Option<&mut AttackSlot> {
        match kind {
            AttackKind::Light => Some(&mut self.light),
            AttackKind::Heavy => self.heavy.as_mut(),
        }
    }

    pub fn tick(&mut self) {
        self.light.tick();
        if let Some(heavy) = self.heavy.as_mut() {
            heavy.tick();
        }
    }
}

/// System: обновление attack cooldown таймеров (первая фаза тика)
pub fn tick_attack_cooldowns(mut query: Query<&mut Attacker, With<crate::components::Actor>>) {
    for mut attacker in query.iter_mut() {
        attacker.tick();
    }
}

//! Базовые компоненты бойцов: Actor, Health, Stamina, FillColor

use bevy::prelude::*;

use crate::combat::Attacker;
use crate::components::{ArenaBody, MovementSpeed};
use crate::config::{MAX_HEALTH, MAX_STAMINA, STAMINA_REGEN_PER_TICK};

/// Актор (игрок или противник) — член коллекции бойцов
///
/// Автоматически добавляет Health, ArenaBody, MovementSpeed, Attacker, FillColor
/// через Required Components.
///
/// Все collision/targeting запросы фильтруют по `With<Actor>`.
/// При смерти компонент снимается (entity остаётся с маркером `Dead`),
/// поэтому убитый боец выпадает из всех последующих проверок.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Health, ArenaBody, MovementSpeed, Attacker, FillColor)]
pub struct Actor;

/// Здоровье бойца
///
/// Инвариант: 0 ≤ current ≤ max. Урон насыщающий, ниже 0 не уходит.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Выносливость игрока
///
/// Инвариант: 0.0 ≤ current ≤ max
/// Тратится на прыжок, масштабирует скорость ходьбы, восстанавливается в покое.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    /// Прирост за тик в покое
    pub regen_per_tick: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(MAX_STAMINA)
    }
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            regen_per_tick: STAMINA_REGEN_PER_TICK,
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Списать cost (с полом в 0)
    pub fn spend(&mut self, cost: f32) {
        self.current = (self.current - cost).max(0.0);
    }

    pub fn regenerate(&mut self) {
        self.current = (self.current + self.regen_per_tick).min(self.max);
    }

    /// Множитель скорости: 1.0 на полной stamina, 0.0 на пустой
    pub fn speed_factor(&self) -> f32 {
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Цвет заливки бокса (RGB) — только для presentation
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct FillColor(pub [u8; 3]);

impl Default for FillColor {
    fn default() -> Self {
        Self([255, 255, 255])
    }
}

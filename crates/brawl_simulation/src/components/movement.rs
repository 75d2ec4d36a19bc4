//! Movement компоненты: бокс на арене, скорость, прыжок, intent игрока

use bevy::prelude::*;

use crate::config::{FIGHTER_HEIGHT, FIGHTER_WIDTH, GRAVITY, JUMP_POWER, JUMP_STAMINA_COST, PLAYER_SPEED};

/// Бокс бойца на арене (screen coordinates)
///
/// - `position`: левый верхний угол, Y растёт вниз
/// - `size`: ширина/высота — одновременно для рендера и коллизий
///
/// На земле `position.y == ArenaConfig::ground_line(size.y)`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ArenaBody {
    pub position: Vec2,
    pub size: Vec2,
}

impl Default for ArenaBody {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(FIGHTER_WIDTH, FIGHTER_HEIGHT),
        }
    }
}

impl ArenaBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Горизонтальная дистанция между центрами
    pub fn horizontal_distance(&self, other: &ArenaBody) -> f32 {
        (self.center_x() - other.center_x()).abs()
    }

    /// AABB overlap (строгий: касание краёв — не пересечение)
    pub fn overlaps(&self, other: &ArenaBody) -> bool {
        self.position.x < other.right()
            && other.position.x < self.right()
            && self.position.y < other.bottom()
            && other.position.y < self.bottom()
    }
}

/// Базовая скорость по горизонтали (пикселей за тик)
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: PLAYER_SPEED }
    }
}

/// Kinematic контроллер прыжка (только игрок)
///
/// Дискретная баллистика: каждый тик в воздухе `y -= vertical_velocity`,
/// затем `vertical_velocity -= gravity`. Grounded — состояние покоя.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct KinematicController {
    pub jump_power: f32,
    pub gravity: f32,
    /// Стоимость прыжка в stamina
    pub jump_cost: f32,
    pub airborne: bool,
    pub vertical_velocity: f32,
}

impl Default for KinematicController {
    fn default() -> Self {
        Self {
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            jump_cost: JUMP_STAMINA_COST,
            airborne: false,
            vertical_velocity: 0.0,
        }
    }
}

impl KinematicController {
    pub fn is_grounded(&self) -> bool {
        !self.airborne
    }
}

/// Входные данные игрока на текущий тик
///
/// Host заполняет каждый frame (удержание клавиш, не edge-trigger).
/// Для headless тестов — mock input через этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PlayerIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Лёгкая атака (punch)
    pub primary_attack: bool,
    /// Тяжёлая атака (kick)
    pub secondary_attack: bool,
}

impl PlayerIntent {
    pub fn is_moving(&self) -> bool {
        self.move_left || self.move_right
    }
}

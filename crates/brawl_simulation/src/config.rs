//! Конфигурация матча: арена, игрок, противник
//!
//! Все значения — фиксированные константы, подставляются при создании матча
//! (runtime загрузки нет). Единицы: пиксели и тики (60 Hz).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Арена
pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;
pub const TICK_RATE: f64 = 60.0;
/// Высота полосы земли (только для отрисовки)
pub const GROUND_STRIP_HEIGHT: f32 = 50.0;

// Бойцы
pub const FIGHTER_WIDTH: f32 = 50.0;
pub const FIGHTER_HEIGHT: f32 = 100.0;
pub const MAX_HEALTH: u32 = 100;

// Игрок
pub const PLAYER_SPEED: f32 = 5.0;
pub const JUMP_POWER: f32 = 30.0;
pub const GRAVITY: f32 = 2.0;
pub const JUMP_STAMINA_COST: f32 = 10.0;
pub const MAX_STAMINA: f32 = 100.0;
pub const STAMINA_REGEN_PER_TICK: f32 = 0.5;
pub const PUNCH_DAMAGE: u32 = 10;
pub const PUNCH_COOLDOWN: u32 = 30;
pub const KICK_DAMAGE: u32 = 15;
pub const KICK_COOLDOWN: u32 = 60;
pub const PLAYER_SPAWN_X: f32 = 50.0;
pub const PLAYER_COLOR: [u8; 3] = [0, 0, 255];

// Противник
pub const OPPONENT_SPEED: f32 = 1.0;
pub const OPPONENT_ATTACK_DAMAGE: u32 = 10;
pub const OPPONENT_ATTACK_COOLDOWN: u32 = 60;
pub const ATTACK_RANGE: f32 = 60.0;
pub const RETREAT_DISTANCE: f32 = 150.0;
pub const STAND_STILL_PROBABILITY: f64 = 0.02;
pub const OPPONENT_SPAWN_X: f32 = ARENA_WIDTH - 100.0;
pub const OPPONENT_COLOR: [u8; 3] = [255, 0, 0];

/// Ошибки конфигурации (ловятся до старта матча)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("arena size must be positive, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("tick rate must be positive, got {0}")]
    InvalidTickRate(f64),
    #[error("{who}: box {width}x{height} does not fit the arena")]
    InvalidBox {
        who: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{who}: spawn x={x} is outside [0, {max}]")]
    SpawnOutOfArena { who: &'static str, x: f32, max: f32 },
    #[error("gravity must be positive, got {0}")]
    InvalidGravity(f32),
    #[error("{who}: {field} must be positive")]
    NonPositive {
        who: &'static str,
        field: &'static str,
    },
    #[error("stand still probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("retreat distance {retreat} is below attack range {range}")]
    RetreatInsideAttackRange { retreat: f32, range: f32 },
}

/// Геометрия арены и частота тиков
///
/// Resource: читается physics (ground line) и AI (границы отступления).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub tick_rate: f64,
    pub ground_strip_height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,
            ground_strip_height: GROUND_STRIP_HEIGHT,
        }
    }
}

impl ArenaConfig {
    /// Y верхнего края бокса, стоящего на земле
    pub fn ground_line(&self, box_height: f32) -> f32 {
        self.height - box_height
    }

    /// Максимальный X (левый край), при котором бокс ещё внутри арены
    pub fn max_x(&self, box_width: f32) -> f32 {
        (self.width - box_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackConfig {
    pub damage: u32,
    /// Cooldown в тиках
    pub cooldown: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub spawn_x: f32,
    pub width: f32,
    pub height: f32,
    pub max_health: u32,
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub jump_cost: f32,
    pub max_stamina: f32,
    pub stamina_regen: f32,
    pub light: AttackConfig,
    pub heavy: AttackConfig,
    pub color: [u8; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_x: PLAYER_SPAWN_X,
            width: FIGHTER_WIDTH,
            height: FIGHTER_HEIGHT,
            max_health: MAX_HEALTH,
            speed: PLAYER_SPEED,
            jump_power: JUMP_POWER,
            gravity: GRAVITY,
            jump_cost: JUMP_STAMINA_COST,
            max_stamina: MAX_STAMINA,
            stamina_regen: STAMINA_REGEN_PER_TICK,
            light: AttackConfig {
                damage: PUNCH_DAMAGE,
                cooldown: PUNCH_COOLDOWN,
            },
            heavy: AttackConfig {
                damage: KICK_DAMAGE,
                cooldown: KICK_COOLDOWN,
            },
            color: PLAYER_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentConfig {
    pub spawn_x: f32,
    pub width: f32,
    pub height: f32,
    pub max_health: u32,
    pub speed: f32,
    pub attack: AttackConfig,
    pub attack_range: f32,
    pub retreat_distance: f32,
    pub stand_still_probability: f64,
    pub color: [u8; 3],
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            spawn_x: OPPONENT_SPAWN_X,
            width: FIGHTER_WIDTH,
            height: FIGHTER_HEIGHT,
            max_health: MAX_HEALTH,
            speed: OPPONENT_SPEED,
            attack: AttackConfig {
                damage: OPPONENT_ATTACK_DAMAGE,
                cooldown: OPPONENT_ATTACK_COOLDOWN,
            },
            attack_range: ATTACK_RANGE,
            retreat_distance: RETREAT_DISTANCE,
            stand_still_probability: STAND_STILL_PROBABILITY,
            color: OPPONENT_COLOR,
        }
    }
}

/// Полная конфигурация матча
///
/// `seed: None` → RNG из entropy (как в оригинальной игре, без seeding контракта).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub seed: Option<u64>,
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub opponent: OpponentConfig,
}

impl MatchConfig {
    /// Проверяет инварианты, которые симуляция не перепроверяет каждый тик
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if arena.width <= 0.0 || arena.height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width: arena.width,
                height: arena.height,
            });
        }
        if arena.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(arena.tick_rate));
        }

        let player = &self.player;
        check_box(arena, "player", player.width, player.height, player.spawn_x)?;
        check_positive("player", "max_health", player.max_health as f32)?;
        check_positive("player", "max_stamina", player.max_stamina)?;
        if player.gravity <= 0.0 {
            return Err(ConfigError::InvalidGravity(player.gravity));
        }

        let opponent = &self.opponent;
        check_box(arena, "opponent", opponent.width, opponent.height, opponent.spawn_x)?;
        check_positive("opponent", "max_health", opponent.max_health as f32)?;
        if !(0.0..=1.0).contains(&opponent.stand_still_probability) {
            return Err(ConfigError::InvalidProbability(opponent.stand_still_probability));
        }
        if opponent.retreat_distance < opponent.attack_range {
            return Err(ConfigError::RetreatInsideAttackRange {
                retreat: opponent.retreat_distance,
                range: opponent.attack_range,
            });
        }

        Ok(())
    }
}

fn check_box(
    arena: &ArenaConfig,
    who: &'static str,
    width: f32,
    height: f32,
    spawn_x: f32,
) -> Result<(), ConfigError> {
    if width <= 0.0 || height <= 0.0 || width > arena.width || height > arena.height {
        return Err(ConfigError::InvalidBox { who, width, height });
    }
    let max = arena.max_x(width);
    if !(0.0..=max).contains(&spawn_x) {
        return Err(ConfigError::SpawnOutOfArena { who, x: spawn_x, max });
    }
    Ok(())
}

fn check_positive(who: &'static str, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { who, field });
    }
    Ok(())
}

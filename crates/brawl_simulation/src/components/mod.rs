//! ECS Components для бойцов
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Health, Stamina, FillColor)
//! - movement: позиция/бокс на арене, скорость, прыжок, intent игрока
//! - player: player control marker (Player)
//! - ai: decision policy противника (AIState, AIConfig)

pub mod actor;
pub mod ai;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use movement::*;
pub use player::*;

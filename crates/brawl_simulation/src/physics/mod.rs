//! Physics simulation module
//!
//! Kinematic движение игрока: прыжок (дискретная баллистика) и ходьба.
//! Коллизии — простой AABB (ArenaBody::overlaps), без physics engine.

pub mod movement;

// Re-export основных систем
pub use movement::{
    apply_horizontal_movement, apply_jump_intent, apply_vertical_motion, KinematicControllerPlugin,
};

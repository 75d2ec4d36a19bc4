//! Player control marker component
//!
//! Отмечает бойца, которым управляет игрок через PlayerIntent (в отличие от AI).

use bevy::prelude::*;

use crate::components::{KinematicController, PlayerIntent, Stamina};

/// Marker component для player-controlled бойца
///
/// Акторы БЕЗ этого компонента управляются decision policy (AI).
/// Акторы С этим компонентом читают PlayerIntent.
///
/// # Архитектурная заметка
/// - AI systems используют `Without<Player>` filter
/// - Input/physics systems используют `With<Player>` filter
///
/// Required: Stamina, KinematicController (прыжок), PlayerIntent.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Stamina, KinematicController, PlayerIntent)]
pub struct Player;

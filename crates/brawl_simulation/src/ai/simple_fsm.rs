//! Simple decision policy противника
//!
//! Решение принимается заново каждый тик (плана между тиками нет):
//! 1. roll ∈ [0, 1) из SimulationRng
//! 2. roll < stand_still_probability → Hold (ни движения, ни атаки)
//! 3. distance < attack_range и cooldown готов → Attack
//! 4. distance < retreat_distance → Retreat
//! 5. иначе → Idle
//!
//! Три концентрические зоны (attack / retreat / neutral) + шанс замереть.

use bevy::prelude::*;

use crate::combat::{AttackKind, Attacker, DamageSource, DamageWriter, Hit};
use crate::components::{Actor, ArenaBody, Health, MovementSpeed, Player};
use crate::config::{ArenaConfig, ATTACK_RANGE, RETREAT_DISTANCE, STAND_STILL_PROBABILITY};
use crate::SimulationRng;

/// Решение противника на текущем тике
///
/// Хранится только для presentation/debug — на следующем тике перезаписывается.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum AIState {
    /// Дистанция больше обоих порогов (или ещё не было тика)
    #[default]
    Idle,
    /// Выпал шанс замереть
    Hold,
    /// Шаг к игроку + удар
    Attack,
    /// Шаг от игрока (с учётом границ арены)
    Retreat,
}

/// Параметры decision policy
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(AIState)]
pub struct AIConfig {
    /// Дистанция между центрами, с которой противник бьёт (px)
    pub attack_range: f32,
    /// Дистанция, ближе которой противник отступает (px)
    pub retreat_distance: f32,
    /// Вероятность простоять тик
    pub stand_still_probability: f64,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            attack_range: ATTACK_RANGE,
            retreat_distance: RETREAT_DISTANCE,
            stand_still_probability: STAND_STILL_PROBABILITY,
        }
    }
}

/// Чистая функция решения (без ECS, удобно тестировать)
pub fn decide(roll: f64, config: &AIConfig, distance: f32, attack_ready: bool) -> AIState {
    if roll < config.stand_still_probability {
        AIState::Hold
    } else if distance < config.attack_range && attack_ready {
        AIState::Attack
    } else if distance < config.retreat_distance {
        AIState::Retreat
    } else {
        AIState::Idle
    }
}

/// Направление от `from` к `to` по X: -1, 0 или 1
fn direction_towards(from: &ArenaBody, to: &ArenaBody) -> f32 {
    let delta = to.center_x() - from.center_x();
    if delta < 0.0 {
        -1.0
    } else if delta > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Система: decision policy противника
///
/// Выполняется после всех фаз игрока, видит его обновлённую позицию.
/// Атака противника НЕ требует overlap после шага — урон безусловный.
/// Позиция противника всегда в [0, arena_width − box_width].
pub fn ai_decision(
    mut opponents: Query<
        (Entity, &mut ArenaBody, &mut Attacker, &MovementSpeed, &AIConfig, &mut AIState),
        (With<Actor>, Without<Player>),
    >,
    mut players: Query<(Entity, &ArenaBody, &mut Health), (With<Actor>, With<Player>)>,
    arena: Res<ArenaConfig>,
    mut rng: ResMut<SimulationRng>,
    mut damage: DamageWriter,
) {
    for (entity, mut body, mut attacker, speed, config, mut state) in opponents.iter_mut() {
        // Игрок выбыл → целиться не в кого
        let Ok((player, player_body, mut player_health)) = players.single_mut() else {
            *state = AIState::Idle;
            continue;
        };

        let roll = rng.roll();
        let distance = body.horizontal_distance(player_body);
        let decision = decide(roll, config, distance, attacker.light.is_ready());
        // Оба шага противника не выходят за арену (игрок может)
        let max_x = arena.max_x(body.size.x);

        match decision {
            AIState::Hold | AIState::Idle => {}
            AIState::Attack => {
                let toward = direction_towards(&body, player_body);
                body.position.x = (body.position.x + toward * speed.speed).clamp(0.0, max_x);

                damage.apply(
                    Hit {
                        attacker: entity,
                        target: player,
                        damage: attacker.light.damage,
                        source: DamageSource::Attack(AttackKind::Light),
                    },
                    &mut player_health,
                );
                attacker.light.trigger();
            }
            AIState::Retreat => {
                let away = -direction_towards(&body, player_body);
                let target_x = (body.position.x + away * speed.speed).clamp(0.0, max_x);
                body.position.x = target_x;
            }
        }

        *state = decision;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.attack_range, 60.0);
        assert_eq!(config.retreat_distance, 150.0);
        assert_eq!(config.stand_still_probability, 0.02);
    }

    #[test]
    fn test_hold_wins_over_everything() {
        let config = AIConfig::default();
        assert_eq!(decide(0.01, &config, 10.0, true), AIState::Hold);
        assert_eq!(decide(0.01, &config, 1000.0, true), AIState::Hold);
    }

    #[test]
    fn test_attack_zone() {
        let config = AIConfig::default();
        assert_eq!(decide(0.5, &config, 40.0, true), AIState::Attack);
        // Граница строгая
        assert_eq!(decide(0.5, &config, 60.0, true), AIState::Retreat);
    }

    #[test]
    fn test_attack_on_cooldown_falls_back_to_retreat() {
        let config = AIConfig::default();
        assert_eq!(decide(0.5, &config, 40.0, false), AIState::Retreat);
    }

    #[test]
    fn test_neutral_zone() {
        let config = AIConfig::default();
        assert_eq!(decide(0.5, &config, 149.9, true), AIState::Retreat);
        assert_eq!(decide(0.5, &config, 150.0, true), AIState::Idle);
        assert_eq!(decide(0.99, &config, 600.0, false), AIState::Idle);
    }

    #[test]
    fn test_direction_towards() {
        let left = ArenaBody::new(Vec2::new(50.0, 500.0), Vec2::new(50.0, 100.0));
        let right = ArenaBody::new(Vec2::new(90.0, 500.0), Vec2::new(50.0, 100.0));
        assert_eq!(direction_towards(&right, &left), -1.0);
        assert_eq!(direction_towards(&left, &right), 1.0);
        assert_eq!(direction_towards(&left, &left), 0.0);
    }
}

//! Kinematic контроллер игрока
//!
//! Порядок внутри тика (PlayerMovement):
//! 1. apply_jump_intent — старт прыжка (если на земле и stamina > 0)
//! 2. apply_vertical_motion — шаг баллистики + приземление
//! 3. apply_horizontal_movement — шаг по X (скорость масштабируется stamina)
//!
//! Оси независимы: в воздухе ходьба не ограничена.
//! По X игрок арену не ограничивает (ограничение только у противника).

use bevy::prelude::*;

use crate::components::{
    Actor, ArenaBody, KinematicController, MovementSpeed, Player, PlayerIntent, Stamina,
};
use crate::config::ArenaConfig;
use crate::{CombatTick, TickSet};

/// Система: старт прыжка от PlayerIntent
///
/// Прыжок в воздухе игнорируется (ни velocity, ни stamina не меняются).
pub fn apply_jump_intent(
    mut query: Query<(&PlayerIntent, &mut KinematicController, &mut Stamina), (With<Player>, With<Actor>)>,
) {
    for (intent, mut controller, mut stamina) in query.iter_mut() {
        if !intent.jump || controller.airborne || stamina.is_depleted() {
            continue;
        }

        controller.airborne = true;
        controller.vertical_velocity = controller.jump_power;
        let cost = controller.jump_cost;
        stamina.spend(cost);
    }
}

/// Система: шаг баллистики в воздухе
///
/// `y -= v; v -= gravity`; приземление когда бокс дошёл до ground line.
pub fn apply_vertical_motion(
    mut query: Query<(&mut KinematicController, &mut ArenaBody), (With<Player>, With<Actor>)>,
    arena: Res<ArenaConfig>,
) {
    for (mut controller, mut body) in query.iter_mut() {
        if !controller.airborne {
            continue;
        }

        body.position.y -= controller.vertical_velocity;
        controller.vertical_velocity -= controller.gravity;

        let ground = arena.ground_line(body.size.y);
        if body.position.y >= ground {
            controller.airborne = false;
            controller.vertical_velocity = 0.0;
            body.position.y = ground;
        }
    }
}

/// Система: горизонтальное движение игрока
///
/// Шаг = min(speed, speed * stamina%). Left + Right одновременно гасят друг друга.
pub fn apply_horizontal_movement(
    mut query: Query<(&PlayerIntent, &MovementSpeed, &Stamina, &mut ArenaBody), (With<Player>, With<Actor>)>,
) {
    for (intent, speed, stamina, mut body) in query.iter_mut() {
        let step = speed.speed.min(speed.speed * stamina.speed_factor());

        if intent.move_left {
            body.position.x -= step;
        }
        if intent.move_right {
            body.position.x += step;
        }
    }
}

/// Plugin для kinematic контроллера
pub struct KinematicControllerPlugin;

impl Plugin for KinematicControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            CombatTick,
            (apply_jump_intent, apply_vertical_motion, apply_horizontal_movement)
                .chain() // Последовательное выполнение
                .in_set(TickSet::PlayerMovement),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn run_once<M>(world: &mut World, system: impl IntoSystem<(), (), M>) {
        let _ = world.run_system_once(system);
    }

    fn spawn_player(world: &mut World, intent: PlayerIntent) -> Entity {
        world
            .spawn((
                Actor,
                Player,
                intent,
                ArenaBody::new(Vec2::new(50.0, 500.0), Vec2::new(50.0, 100.0)),
            ))
            .id()
    }

    #[test]
    fn test_jump_requires_stamina() {
        let mut world = World::new();
        let player = spawn_player(&mut world, PlayerIntent { jump: true, ..default() });
        world.get_mut::<Stamina>(player).unwrap().current = 0.0;

        run_once(&mut world, apply_jump_intent);

        assert!(!world.get::<KinematicController>(player).unwrap().airborne);
    }

    #[test]
    fn test_jump_spends_stamina() {
        let mut world = World::new();
        let player = spawn_player(&mut world, PlayerIntent { jump: true, ..default() });

        run_once(&mut world, apply_jump_intent);

        let controller = world.get::<KinematicController>(player).unwrap();
        assert!(controller.airborne);
        assert_eq!(controller.vertical_velocity, 30.0);
        assert_eq!(world.get::<Stamina>(player).unwrap().current, 90.0);
    }

    #[test]
    fn test_movement_scaled_by_stamina() {
        let mut world = World::new();
        let player = spawn_player(&mut world, PlayerIntent { move_right: true, ..default() });
        world.get_mut::<Stamina>(player).unwrap().current = 40.0;

        run_once(&mut world, apply_horizontal_movement);

        // 5 * 0.4 = 2
        assert_eq!(world.get::<ArenaBody>(player).unwrap().position.x, 52.0);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut world = World::new();
        let player = spawn_player(
            &mut world,
            PlayerIntent {
                move_left: true,
                move_right: true,
                ..default()
            },
        );

        run_once(&mut world, apply_horizontal_movement);

        assert_eq!(world.get::<ArenaBody>(player).unwrap().position.x, 50.0);
    }

    #[test]
    fn test_landing_snaps_to_ground() {
        let mut world = World::new();
        world.insert_resource(ArenaConfig::default());
        let player = spawn_player(&mut world, PlayerIntent::default());
        {
            let mut controller = world.get_mut::<KinematicController>(player).unwrap();
            controller.airborne = true;
            controller.vertical_velocity = -7.0;
        }
        world.get_mut::<ArenaBody>(player).unwrap().position.y = 495.0;

        run_once(&mut world, apply_vertical_motion);

        let controller = world.get::<KinematicController>(player).unwrap();
        assert!(!controller.airborne);
        assert_eq!(controller.vertical_velocity, 0.0);
        assert_eq!(world.get::<ArenaBody>(player).unwrap().position.y, 500.0);
    }
}

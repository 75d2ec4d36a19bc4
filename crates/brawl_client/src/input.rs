use bevy::input::InputSystem;
use bevy::prelude::*;
use brawl_simulation::{Actor, Player, PlayerIntent};

/// Keyboard/mouse → PlayerIntent
///
/// A/D — ходьба, Space — прыжок, ЛКМ — punch, ПКМ — kick.
/// Intent отражает удержание клавиш; симуляция читает его в FixedUpdate.
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, read_player_input.after(InputSystem));
    }
}

fn read_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut players: Query<&mut PlayerIntent, (With<Player>, With<Actor>)>,
) {
    for mut intent in players.iter_mut() {
        *intent = PlayerIntent {
            move_left: keys.pressed(KeyCode::KeyA),
            move_right: keys.pressed(KeyCode::KeyD),
            jump: keys.pressed(KeyCode::Space),
            primary_attack: mouse.pressed(MouseButton::Left),
            secondary_attack: mouse.pressed(MouseButton::Right),
        };
    }
}

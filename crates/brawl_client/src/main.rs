use bevy::prelude::*;
use brawl_simulation::{spawn_combatants, ArenaConfig, MatchConfig, SimulationPlugin, SimulationRng};

mod input;
mod rendering;

use input::PlayerInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    let config = MatchConfig::default();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Street Brawl".to_string(),
                resolution: (config.arena.width, config.arena.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Simulation (headless ECS logic), тикает в FixedUpdate
        .insert_resource(config.arena)
        .insert_resource(SimulationRng::from_entropy())
        .add_plugins(SimulationPlugin)
        // Keyboard/mouse → PlayerIntent
        .add_plugins(PlayerInputPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        .insert_resource(StartingMatch(config))
        .add_systems(Startup, (setup_scene, spawn_match))
        .run();
}

/// Конфиг матча, который spawn_match разворачивает на старте
#[derive(Resource)]
struct StartingMatch(MatchConfig);

/// Camera + ground strip
fn setup_scene(mut commands: Commands, arena: Res<ArenaConfig>) {
    commands.spawn(Camera2d);

    // Ground strip (белая полоса внизу арены)
    let strip = Vec2::new(arena.width, arena.ground_strip_height);
    commands.spawn((
        Sprite::from_color(Color::WHITE, strip),
        Transform::from_translation(rendering::screen_to_world(
            &arena,
            Vec2::new(0.0, arena.height - strip.y),
            strip,
            -1.0,
        )),
    ));
}

/// Spawn обоих бойцов (simulation entities + visual marker)
fn spawn_match(world: &mut World) {
    let Some(StartingMatch(config)) = world.remove_resource::<StartingMatch>() else {
        return;
    };

    if let Err(err) = config.validate() {
        brawl_simulation::log_error(&format!("Invalid match config: {}", err));
        return;
    }

    let (player, opponent) = spawn_combatants(world, &config);

    // These will be synced to visual entities by RenderingSyncPlugin
    for entity in [player, opponent] {
        world.entity_mut(entity).insert(rendering::NeedsVisual);
    }
}

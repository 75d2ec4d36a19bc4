//! Headless симуляция BRAWL
//!
//! Запускает матч без рендера: игрок идёт на противника и бьёт,
//! пока один из бойцов не выбудет (или не кончится лимит тиков).

use brawl_simulation::{
    advance_tick, create_match_app, log_info, match_snapshot, MatchConfig, MatchOutcome, Player,
    PlayerIntent,
};
use bevy::prelude::*;

const MAX_TICKS: u64 = 3600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MatchConfig {
        seed: Some(42),
        ..default()
    };
    println!("Starting BRAWL headless simulation (seed: {:?})", config.seed);

    let mut app = create_match_app(config)?;

    // Scripted input: держим "вправо" + обе атаки
    let mut players = app.world_mut().query_filtered::<&mut PlayerIntent, With<Player>>();
    for mut intent in players.iter_mut(app.world_mut()) {
        *intent = PlayerIntent {
            move_right: true,
            primary_attack: true,
            secondary_attack: true,
            ..default()
        };
    }

    for tick in 1..=MAX_TICKS {
        advance_tick(&mut app);

        if tick % 100 == 0 {
            let snapshot = match_snapshot(app.world_mut());
            for combatant in &snapshot.combatants {
                log_info(&format!(
                    "Tick {}: {:?} x={:.1} hp={}/{}",
                    tick, combatant.kind, combatant.x, combatant.health, combatant.max_health
                ));
            }
        }

        if app.world().resource::<MatchOutcome>().is_over() {
            break;
        }
    }

    let snapshot = match_snapshot(app.world_mut());
    println!("Simulation complete at tick {}: {:?}", snapshot.tick, snapshot.outcome);

    Ok(())
}

//! Property-based тесты инвариантов симуляции
//!
//! Для произвольной последовательности input на каждом тике:
//! - 0 ≤ stamina ≤ max
//! - health ≤ max
//! - игрок никогда не проваливается ниже ground line
//! - противник всегда внутри арены

mod common;

use brawl_simulation::*;
use common::*;
use proptest::prelude::*;

fn intent_strategy() -> impl Strategy<Value = PlayerIntent> {
    any::<[bool; 5]>().prop_map(|[move_left, move_right, jump, primary_attack, secondary_attack]| {
        PlayerIntent {
            move_left,
            move_right,
            jump,
            primary_attack,
            secondary_attack,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_invariants_hold_for_any_input(
        intents in prop::collection::vec(intent_strategy(), 1..120),
        opponent_x in 0.0f32..750.0f32,
        probability in 0.0f64..=1.0f64,
    ) {
        let (mut app, player, opponent) = match_app(probability);
        place(&mut app, opponent, opponent_x);

        for intent in intents {
            set_intent(&mut app, player, intent);
            advance_tick(&mut app);

            let stamina = *app.world().get::<Stamina>(player).unwrap();
            prop_assert!(stamina.current >= 0.0 && stamina.current <= stamina.max);

            for entity in [player, opponent] {
                let health = *app.world().get::<Health>(entity).unwrap();
                prop_assert!(health.current <= health.max);
            }

            prop_assert!(body(&app, player).position.y <= 500.0);

            let current_x = body(&app, opponent).position.x;
            prop_assert!((0.0..=750.0).contains(&current_x));
        }
    }

    /// Timer после тика всегда в [0, cooldown]
    #[test]
    fn prop_cooldown_timer_bounded(presses in prop::collection::vec(any::<bool>(), 1..90)) {
        let (mut app, player, _opponent) = match_app(0.0);

        for primary_attack in presses {
            set_intent(&mut app, player, PlayerIntent { primary_attack, ..Default::default() });
            advance_tick(&mut app);

            let attacker = app.world().get::<Attacker>(player).unwrap();
            prop_assert!(attacker.light.timer <= attacker.light.cooldown);
        }
    }
}

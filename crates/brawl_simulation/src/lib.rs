//! BRAWL Simulation Core
//!
//! ECS-симуляция дуэли на Bevy 0.16: игрок против противника на 1-D арене.
//!
//! Архитектура:
//! - World = simulation context (бойцы как entities, константы арены как resources)
//! - Один прогон schedule `CombatTick` = ровно один тик симуляции
//! - Host (client/headless) только пишет PlayerIntent и читает состояние

use bevy::ecs::schedule::{ExecutorKind, ScheduleLabel};
use bevy::prelude::*;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod physics;
pub mod snapshot;

// Re-export базовых типов для удобства
pub use ai::{AIConfig, AIPlugin, AIState};
pub use combat::{
    AttackExecuted, AttackKind, AttackSlot, Attacker, CombatPlugin, DamageDealt, DamageSource, Dead,
    EntityDied, MatchEnded, MatchOutcome,
};
pub use components::*;
pub use config::{ArenaConfig, AttackConfig, ConfigError, MatchConfig, OpponentConfig, PlayerConfig};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter,
};
pub use physics::KinematicControllerPlugin;
pub use snapshot::{match_snapshot, ActorKind, CombatantSnapshot, MatchSnapshot, OutcomeSnapshot};

/// Schedule одного тика симуляции
///
/// Host с реальным временем гоняет его из FixedUpdate (см. SimulationPlugin),
/// тесты и headless — напрямую через `advance_tick`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombatTick;

/// Фазы тика (выполняются строго по порядку)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Счётчик тиков
    Clock,
    /// Уменьшение attack таймеров
    Cooldowns,
    /// Прыжок, баллистика, ходьба, regen stamina
    PlayerMovement,
    /// Contact damage игрока
    Contact,
    /// Явные атаки игрока
    PlayerAttacks,
    /// Decision policy противника
    Decision,
    /// Конец матча
    Outcome,
}

/// Монотонный счётчик тиков
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    pub tick: u64,
}

fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.tick += 1;
}

/// RNG resource для decision policy
///
/// Единственный генератор симуляции. Подменяется в тестах
/// (`from_rng` принимает любой `RngCore`, например `StepRng`).
#[derive(Resource)]
pub struct SimulationRng {
    rng: Box<dyn RngCore + Send + Sync>,
    pub seed: Option<u64>,
}

impl SimulationRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::from_entropy()),
            seed: None,
        }
    }

    pub fn from_rng<R: RngCore + Send + Sync + 'static>(rng: R) -> Self {
        Self {
            rng: Box::new(rng),
            seed: None,
        }
    }

    /// Равномерное значение в [0, 1)
    pub fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaConfig>()
            .init_resource::<SimulationClock>();

        // Host мог подложить свой RNG (seeded) до plugin
        if !app.world().contains_resource::<SimulationRng>() {
            app.insert_resource(SimulationRng::from_entropy());
        }

        let tick_rate = app.world().resource::<ArenaConfig>().tick_rate;

        app
            // Fixed timestep = tick rate арены (60Hz)
            .insert_resource(Time::<Fixed>::from_hz(tick_rate))
            // Тик выполняется целиком и синхронно, один поток
            .edit_schedule(CombatTick, |schedule| {
                schedule.set_executor_kind(ExecutorKind::SingleThreaded);
            })
            .configure_sets(
                CombatTick,
                (
                    TickSet::Clock,
                    TickSet::Cooldowns,
                    TickSet::PlayerMovement,
                    TickSet::Contact,
                    TickSet::PlayerAttacks,
                    TickSet::Decision,
                    TickSet::Outcome,
                )
                    .chain(),
            )
            .add_systems(CombatTick, advance_clock.in_set(TickSet::Clock))
            .add_systems(FixedUpdate, run_combat_tick)
            // Подсистемы
            .add_plugins((KinematicControllerPlugin, CombatPlugin, AIPlugin));
    }
}

/// Exclusive system: один CombatTick на каждый FixedUpdate
pub fn run_combat_tick(world: &mut World) {
    world.run_schedule(CombatTick);
}

/// Прогнать ровно один тик (headless/тесты)
///
/// Без `app.update()`, поэтому буферы событий обновляются здесь же.
pub fn advance_tick(app: &mut App) {
    let world = app.world_mut();
    world.run_schedule(CombatTick);
    combat::update_combat_events(world);
}

/// Создаёт minimal Bevy App для headless симуляции (без бойцов)
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SimulationRng::seeded(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Создаёт headless матч по конфигу: валидация + оба бойца на стартовых позициях
pub fn create_match_app(config: MatchConfig) -> Result<App, ConfigError> {
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SimulationRng::seeded(seed),
        None => SimulationRng::from_entropy(),
    };

    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(rng)
        .insert_resource(config.arena)
        .add_plugins(SimulationPlugin);

    spawn_combatants(app.world_mut(), &config);

    Ok(app)
}

/// Spawn игрока (левый край) и противника (правый край), оба на земле
///
/// Возвращает (player, opponent).
pub fn spawn_combatants(world: &mut World, config: &MatchConfig) -> (Entity, Entity) {
    let arena = &config.arena;
    let p = &config.player;
    let o = &config.opponent;

    let player = world
        .spawn((
            Actor,
            Player,
            Health::new(p.max_health),
            ArenaBody::new(
                Vec2::new(p.spawn_x, arena.ground_line(p.height)),
                Vec2::new(p.width, p.height),
            ),
            MovementSpeed { speed: p.speed },
            Attacker::dual(p.light.into(), p.heavy.into()),
            FillColor(p.color),
            Stamina {
                current: p.max_stamina,
                max: p.max_stamina,
                regen_per_tick: p.stamina_regen,
            },
            KinematicController {
                jump_power: p.jump_power,
                gravity: p.gravity,
                jump_cost: p.jump_cost,
                ..default()
            },
        ))
        .id();

    let opponent = world
        .spawn((
            Actor,
            Health::new(o.max_health),
            ArenaBody::new(
                Vec2::new(o.spawn_x, arena.ground_line(o.height)),
                Vec2::new(o.width, o.height),
            ),
            MovementSpeed { speed: o.speed },
            Attacker::single(o.attack.into()),
            FillColor(o.color),
            AIConfig {
                attack_range: o.attack_range,
                retreat_distance: o.retreat_distance,
                stand_still_probability: o.stand_still_probability,
            },
        ))
        .id();

    log(&format!("Spawned player {:?} and opponent {:?}", player, opponent));

    (player, opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SimulationRng::seeded(7);
        let mut b = SimulationRng::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_roll_in_unit_interval() {
        let mut rng = SimulationRng::seeded(99);
        for _ in 0..1000 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r), "roll = {}", r);
        }
    }

    #[test]
    fn test_injected_rng() {
        let mut low = SimulationRng::from_rng(StepRng::new(0, 0));
        assert_eq!(low.roll(), 0.0);

        let mut high = SimulationRng::from_rng(StepRng::new(u64::MAX, 0));
        assert!(high.roll() > 0.99);
    }

    #[test]
    fn test_clock_advances_once_per_tick() {
        let mut app = create_headless_app(1);
        for _ in 0..5 {
            advance_tick(&mut app);
        }
        assert_eq!(app.world().resource::<SimulationClock>().tick, 5);
    }

    #[test]
    fn test_event_buffers_stay_bounded() {
        let mut app = create_match_app(MatchConfig {
            seed: Some(3),
            ..default()
        })
        .unwrap();
        let mut players = app.world_mut().query_filtered::<&mut PlayerIntent, With<Player>>();
        for mut intent in players.iter_mut(app.world_mut()) {
            intent.primary_attack = true;
            intent.secondary_attack = true;
        }

        for _ in 0..3000 {
            advance_tick(&mut app);
        }

        // Максимум 2 атаки за тик, буфер хранит два последних тика
        assert!(app.world().resource::<Events<AttackExecuted>>().len() <= 4);
        assert!(app.world().resource::<Events<DamageDealt>>().len() <= 4);
    }
}

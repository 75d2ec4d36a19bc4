//! Combat resolver: коллизии бойцов и применение урона
//!
//! - Contact damage: пока игрок на земле и его бокс пересекается с противником,
//!   каждый тик наносится урон light атаки (без cooldown, стакается)
//! - Явные атаки игрока: проверка overlap в момент выполнения,
//!   без overlap урона нет, но cooldown всё равно расходуется
//! - Смерть: на летальном ударе снимается `Actor`, добавляется `Dead`

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::{AttackKind, Attacker};
use crate::components::{Actor, ArenaBody, Health, KinematicController, Player, PlayerIntent};

/// Источник урона
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Автоматический contact hit (игрок на земле в overlap)
    Contact,
    /// Явная атака
    Attack(AttackKind),
}

/// Событие: урон нанесен
///
/// Используется для HUD, звуков, эффектов и в тестах.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub source: DamageSource,
    pub target_died: bool,
}

/// Событие: entity умер (health <= 0)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: атака выполнена (cooldown запущен), `landed` — был ли урон
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackExecuted {
    pub attacker: Entity,
    pub kind: AttackKind,
    pub landed: bool,
}

/// Компонент-маркер: entity мертв (Health == 0)
///
/// Entity не деспавнится — HUD продолжает читать его Health.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

/// Один удар
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub source: DamageSource,
}

/// Единственный путь уменьшения Health
///
/// Пишет DamageDealt / EntityDied и снимает `Actor` с убитого.
#[derive(SystemParam)]
pub struct DamageWriter<'w, 's> {
    commands: Commands<'w, 's>,
    dealt: EventWriter<'w, DamageDealt>,
    died: EventWriter<'w, EntityDied>,
}

impl DamageWriter<'_, '_> {
    /// Применить удар. `None` — цель уже мертва, удар проигнорирован.
    pub fn apply(&mut self, hit: Hit, health: &mut Health) -> Option<u32> {
        if !health.is_alive() {
            return None;
        }

        health.take_damage(hit.damage);
        let target_died = !health.is_alive();

        self.dealt.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            damage: hit.damage,
            source: hit.source,
            target_died,
        });

        if target_died {
            self.died.write(EntityDied {
                entity: hit.target,
                killer: Some(hit.attacker),
            });
            // Выпадает из коллекции бойцов (применится на sync point до следующей фазы)
            self.commands.entity(hit.target).remove::<Actor>().insert(Dead);

            crate::logger::log_info(&format!(
                "Entity {:?} killed by {:?} ({:?})",
                hit.target, hit.attacker, hit.source
            ));
        }

        Some(hit.damage)
    }
}

/// Система: contact damage игрока по противникам
///
/// Выполняется после движения игрока, до явных атак того же тика.
pub fn apply_contact_damage(
    players: Query<(Entity, &ArenaBody, &KinematicController, &Attacker), (With<Player>, With<Actor>)>,
    mut opponents: Query<(Entity, &ArenaBody, &mut Health), (With<Actor>, Without<Player>)>,
    mut damage: DamageWriter,
) {
    for (player, body, controller, attacker) in players.iter() {
        if !controller.is_grounded() {
            continue;
        }

        for (target, target_body, mut health) in opponents.iter_mut() {
            if !body.overlaps(target_body) {
                continue;
            }

            damage.apply(
                Hit {
                    attacker: player,
                    target,
                    damage: attacker.light.damage,
                    source: DamageSource::Contact,
                },
                &mut health,
            );
        }
    }
}

/// Система: явные атаки игрока (primary → Light, secondary → Heavy)
pub fn execute_player_attacks(
    mut players: Query<(Entity, &ArenaBody, &PlayerIntent, &mut Attacker), (With<Player>, With<Actor>)>,
    mut opponents: Query<(Entity, &ArenaBody, &mut Health), (With<Actor>, Without<Player>)>,
    mut damage: DamageWriter,
    mut executed: EventWriter<AttackExecuted>,
) {
    for (player, body, intent, mut attacker) in players.iter_mut() {
        for kind in requested_attacks(intent) {
            // Cooldown или нет такого слота → intent молча игнорируется
            let Some(slot) = attacker.slot_mut(kind) else {
                continue;
            };
            if !slot.is_ready() {
                continue;
            }
            slot.trigger();
            let amount = slot.damage;

            let mut landed = false;
            for (target, target_body, mut health) in opponents.iter_mut() {
                if !body.overlaps(target_body) {
                    continue;
                }
                let hit = Hit {
                    attacker: player,
                    target,
                    damage: amount,
                    source: DamageSource::Attack(kind),
                };
                landed |= damage.apply(hit, &mut health).is_some();
            }

            executed.write(AttackExecuted {
                attacker: player,
                kind,
                landed,
            });
        }
    }
}

fn requested_attacks(intent: &PlayerIntent) -> impl Iterator<Item = AttackKind> {
    [
        (intent.primary_attack, AttackKind::Light),
        (intent.secondary_attack, AttackKind::Heavy),
    ]
    .into_iter()
    .filter_map(|(requested, kind)| requested.then_some(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_attacks_order() {
        let intent = PlayerIntent {
            primary_attack: true,
            secondary_attack: true,
            ..default()
        };
        let kinds: Vec<_> = requested_attacks(&intent).collect();
        assert_eq!(kinds, vec![AttackKind::Light, AttackKind::Heavy]);
    }

    #[test]
    fn test_no_attacks_without_intent() {
        assert_eq!(requested_attacks(&PlayerIntent::default()).count(), 0);
    }

    #[test]
    fn test_damage_dealt_event() {
        let event = DamageDealt {
            attacker: Entity::PLACEHOLDER,
            target: Entity::PLACEHOLDER,
            damage: 15,
            source: DamageSource::Attack(AttackKind::Heavy),
            target_died: false,
        };

        assert_eq!(event.damage, 15);
        assert_eq!(event.source, DamageSource::Attack(AttackKind::Heavy));
    }
}

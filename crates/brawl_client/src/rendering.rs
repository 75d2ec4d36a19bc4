use bevy::prelude::*;
use brawl_simulation::{ArenaBody, ArenaConfig, Dead, FillColor, Health, Player, Stamina};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (
            spawn_visuals_for_new_entities,
            sync_transforms,
            update_hud_bars,
            despawn_dead_entities,
        ).chain());
    }
}

/// Marker: simulation entity needs visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Link: visual entity → simulation entity
#[derive(Component)]
pub struct VisualOf(pub Entity);

/// Link: simulation entity → visual entity
#[derive(Component)]
pub struct HasVisual(pub Entity);

/// Что показывает полоска HUD
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarKind {
    Health,
    Stamina,
}

/// HUD полоска (фиксированная позиция на экране, ширина = значение * 2)
#[derive(Component)]
pub struct HudBar {
    pub owner: Entity,
    pub kind: BarKind,
    /// Левый верхний угол (screen coordinates)
    pub origin: Vec2,
}

const BAR_HEIGHT: f32 = 20.0;
const BAR_SCALE: f32 = 2.0;

/// Screen coordinates (top-left origin, Y вниз) → Bevy world (центр, Y вверх)
///
/// `top_left` + `size` описывают прямоугольник; возвращается его центр.
pub fn screen_to_world(arena: &ArenaConfig, top_left: Vec2, size: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        top_left.x + size.x / 2.0 - arena.width / 2.0,
        arena.height / 2.0 - (top_left.y + size.y / 2.0),
        z,
    )
}

fn fill_color(color: &FillColor) -> Color {
    let [r, g, b] = color.0;
    Color::srgb_u8(r, g, b)
}

/// Spawn visual representation (цветной бокс) + HUD для новых бойцов
fn spawn_visuals_for_new_entities(
    mut commands: Commands,
    query: Query<(Entity, &ArenaBody, &FillColor, Has<Player>), With<NeedsVisual>>,
    arena: Res<ArenaConfig>,
) {
    for (sim_entity, body, color, is_player) in query.iter() {
        let visual_entity = commands.spawn((
            Sprite::from_color(fill_color(color), body.size),
            Transform::from_translation(screen_to_world(&arena, body.position, body.size, 0.0)),
            VisualOf(sim_entity),
        )).id();

        // Игрок: health + stamina слева, противник: health справа
        let bars = if is_player {
            vec![
                (BarKind::Health, Vec2::new(10.0, 10.0), Color::srgb_u8(255, 0, 0)),
                (BarKind::Stamina, Vec2::new(10.0, 40.0), Color::srgb_u8(0, 255, 0)),
            ]
        } else {
            vec![(BarKind::Health, Vec2::new(arena.width - 210.0, 10.0), Color::srgb_u8(255, 0, 0))]
        };

        for (kind, origin, bar_color) in bars {
            commands.spawn((
                Sprite::from_color(bar_color, Vec2::new(0.0, BAR_HEIGHT)),
                Transform::from_translation(screen_to_world(&arena, origin, Vec2::ZERO, 1.0)),
                HudBar {
                    owner: sim_entity,
                    kind,
                    origin,
                },
            ));
        }

        // Link simulation ↔ visual
        commands.entity(sim_entity)
            .remove::<NeedsVisual>()
            .insert(HasVisual(visual_entity));
    }
}

/// Sync ArenaBody → visual transforms
fn sync_transforms(
    sim_query: Query<(&ArenaBody, &HasVisual), Changed<ArenaBody>>,
    mut visual_query: Query<&mut Transform, With<VisualOf>>,
    arena: Res<ArenaConfig>,
) {
    for (body, has_visual) in sim_query.iter() {
        if let Ok(mut visual_transform) = visual_query.get_mut(has_visual.0) {
            visual_transform.translation = screen_to_world(&arena, body.position, body.size, 0.0);
        }
    }
}

/// Ширина полосок HUD по текущему Health/Stamina владельца
fn update_hud_bars(
    owners: Query<(&Health, Option<&Stamina>)>,
    mut bars: Query<(&HudBar, &mut Sprite, &mut Transform)>,
    arena: Res<ArenaConfig>,
) {
    for (bar, mut sprite, mut transform) in bars.iter_mut() {
        let Ok((health, stamina)) = owners.get(bar.owner) else {
            continue;
        };

        let value = match bar.kind {
            BarKind::Health => health.current as f32,
            BarKind::Stamina => stamina.map_or(0.0, |s| s.current),
        };

        let size = Vec2::new(value * BAR_SCALE, BAR_HEIGHT);
        sprite.custom_size = Some(size);
        transform.translation = screen_to_world(&arena, bar.origin, size, 1.0);
    }
}

/// Убрать бокс бойца, выбывшего из матча (HUD остаётся)
fn despawn_dead_entities(
    mut commands: Commands,
    dead_query: Query<(Entity, &HasVisual), With<Dead>>, // Dead добавляется вместо Actor
) {
    for (sim_entity, has_visual) in dead_query.iter() {
        commands.entity(has_visual.0).despawn();
        commands.entity(sim_entity).remove::<HasVisual>();
    }
}

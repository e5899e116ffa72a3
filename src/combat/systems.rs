//! Combat domain: the per-frame combat loop.
//!
//! Runs as one chained Update sequence: weapon velocity tracking, respawn
//! countdown, pursuit, hit detection, flash revert. All of the actual
//! arithmetic lives in the pure helpers at the bottom so it can be
//! exercised without a running renderer.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::combat::components::{BaseColor, DefeatState, Enemy, Health, HitFlash, Weapon};
use crate::combat::events::{EnemyDefeatedEvent, EnemyHitEvent, EnemyRespawnedEvent};
use crate::combat::resources::{CombatSession, CombatTuning};
use crate::core::ArenaRng;
use crate::movement::Player;

pub(crate) const ENEMY_RADIUS: f32 = 0.5;
const ENEMY_BASE_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);
const FLASH_COLOR: Color = Color::srgb(1.0, 0.95, 0.85);
const DEFEATED_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);

pub(crate) fn spawn_enemy(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<ArenaRng>,
) {
    let position = respawn_point(&mut rng.0, &tuning);

    commands.spawn((
        Enemy,
        Health::new(tuning.max_health),
        DefeatState::default(),
        BaseColor(ENEMY_BASE_COLOR),
        Mesh3d(meshes.add(Sphere::new(ENEMY_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ENEMY_BASE_COLOR,
            ..default()
        })),
        Transform::from_translation(position),
        RigidBody::Kinematic,
        Collider::sphere(ENEMY_RADIUS),
    ));
}

/// Step 1: velocity = position delta / elapsed time, stored fresh each frame.
pub(crate) fn track_weapon_velocity(
    time: Res<Time>,
    mut query: Query<(&GlobalTransform, &mut Weapon)>,
) {
    let dt = time.delta_secs();
    for (transform, mut weapon) in &mut query {
        weapon.track(transform.translation(), dt);
    }
}

/// Step 2: count down defeated enemies and put them back on the ring.
/// A respawning enemy skips pursuit and hit checks for that frame.
pub(crate) fn tick_respawn(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut rng: ResMut<ArenaRng>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut respawned: MessageWriter<EnemyRespawnedEvent>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut Health,
            &mut DefeatState,
            &BaseColor,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<Enemy>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut health, mut state, base, material) in &mut query {
        state.just_respawned = false;

        if state.tick(dt) {
            let position = respawn_point(&mut rng.0, &tuning);
            transform.translation = position;
            health.reset();
            state.respawn();
            if let Some(mat) = materials.get_mut(&material.0) {
                mat.base_color = base.0;
            }
            respawned.write(EnemyRespawnedEvent {
                enemy: entity,
                position,
            });
        }
    }
}

/// Step 3: straight-line pursuit on the ground plane, stopping at the
/// stand-off distance. No path planning, no obstacle avoidance.
pub(crate) fn pursue_player(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<(&mut Transform, &DefeatState), (With<Enemy>, Without<Player>)>,
) {
    let dt = time.delta_secs();
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation;

    for (mut transform, state) in &mut enemy_query {
        if !state.active() {
            continue;
        }
        if let Some(next) = pursuit_step(transform.translation, player_pos, dt, &tuning) {
            transform.translation = next;
        }
    }
}

/// Step 4: the hit gate and its consequences.
pub(crate) fn detect_hits(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut session: ResMut<CombatSession>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    weapon_query: Query<(&GlobalTransform, &Weapon)>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &mut Health,
            &mut DefeatState,
            Option<&mut HitFlash>,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<Enemy>,
    >,
    mut hits: MessageWriter<EnemyHitEvent>,
    mut defeats: MessageWriter<EnemyDefeatedEvent>,
) {
    let now = time.elapsed_secs();
    let Ok((weapon_transform, weapon)) = weapon_query.single() else {
        return;
    };
    let weapon_pos = weapon_transform.translation();

    for (entity, transform, mut health, mut state, flash, material) in &mut enemy_query {
        if !state.active() {
            continue;
        }

        let distance = weapon_pos.distance(transform.translation);
        if !swing_connects(distance, weapon.speed(), now, &session, &tuning) {
            continue;
        }

        match apply_hit(&mut health, &mut state, &mut session, now, &tuning) {
            HitOutcome::Damaged => {
                // Supersede a pending flash instead of letting two timers race.
                match flash {
                    Some(mut flash) => flash.timer = tuning.flash_duration,
                    None => {
                        commands.entity(entity).insert(HitFlash {
                            timer: tuning.flash_duration,
                        });
                    }
                }
                hits.write(EnemyHitEvent {
                    enemy: entity,
                    remaining_health: health.current,
                });
            }
            HitOutcome::Defeated => {
                // The defeat tint owns the material now; drop any pending flash.
                commands.entity(entity).remove::<HitFlash>();
                if let Some(mat) = materials.get_mut(&material.0) {
                    mat.base_color = DEFEATED_COLOR;
                }
                defeats.write(EnemyDefeatedEvent {
                    enemy: entity,
                    total_kills: session.kills,
                });
            }
        }
    }
}

/// Step 5: tint flashed enemies, then restore their base color.
pub(crate) fn update_hit_flash(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut HitFlash,
        &BaseColor,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let dt = time.delta_secs();
    for (entity, mut flash, base, material) in &mut query {
        flash.timer -= dt;
        let Some(mat) = materials.get_mut(&material.0) else {
            continue;
        };
        if flash.timer > 0.0 {
            mat.base_color = FLASH_COLOR;
        } else {
            mat.base_color = base.0;
            commands.entity(entity).remove::<HitFlash>();
        }
    }
}

pub(crate) fn log_combat_events(
    mut hits: MessageReader<EnemyHitEvent>,
    mut defeats: MessageReader<EnemyDefeatedEvent>,
    mut respawns: MessageReader<EnemyRespawnedEvent>,
) {
    for hit in hits.read() {
        debug!("hit {:?}, {} hp left", hit.enemy, hit.remaining_health);
    }
    for defeat in defeats.read() {
        info!("{:?} defeated, kills: {}", defeat.enemy, defeat.total_kills);
    }
    for respawn in respawns.read() {
        info!("{:?} respawned at {}", respawn.enemy, respawn.position);
    }
}

// ---------------------------------------------------------------------------
// Pure combat arithmetic
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HitOutcome {
    Damaged,
    Defeated,
}

/// The three-way hit gate: close enough, swinging fast enough, and past
/// the cooldown from the last accepted hit.
pub(crate) fn swing_connects(
    distance: f32,
    swing_speed: f32,
    now: f32,
    session: &CombatSession,
    tuning: &CombatTuning,
) -> bool {
    distance < tuning.hit_radius
        && swing_speed > tuning.min_swing_speed
        && session.cooldown_elapsed(now, tuning.hit_cooldown)
}

/// Resolve one accepted hit. On depletion the enemy is defeated exactly
/// once: the countdown starts and the kill counter moves by one.
pub(crate) fn apply_hit(
    health: &mut Health,
    state: &mut DefeatState,
    session: &mut CombatSession,
    now: f32,
    tuning: &CombatTuning,
) -> HitOutcome {
    session.record_hit(now);
    if health.take_damage(tuning.hit_damage) {
        state.defeat(tuning.defeat_duration);
        session.kills += 1;
        HitOutcome::Defeated
    } else {
        HitOutcome::Damaged
    }
}

/// One pursuit step toward the player on the XZ plane, or None inside
/// the stand-off distance. Y is left alone.
pub(crate) fn pursuit_step(
    enemy_pos: Vec3,
    player_pos: Vec3,
    dt: f32,
    tuning: &CombatTuning,
) -> Option<Vec3> {
    let planar = Vec2::new(player_pos.x - enemy_pos.x, player_pos.z - enemy_pos.z);
    if planar.length() <= tuning.stand_off_distance {
        return None;
    }
    let dir = planar.normalize();
    let step = dir * tuning.pursuit_speed * dt;
    Some(enemy_pos + Vec3::new(step.x, 0.0, step.y))
}

/// Uniform angle, uniform radius in the respawn ring around the origin.
pub(crate) fn respawn_point(rng: &mut impl Rng, tuning: &CombatTuning) -> Vec3 {
    let angle = rng.random_range(0.0..TAU);
    let radius = rng.random_range(tuning.respawn_radius_min..tuning.respawn_radius_max);
    Vec3::new(angle.cos() * radius, ENEMY_RADIUS, angle.sin() * radius)
}

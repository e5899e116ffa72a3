//! Combat domain: unit tests for the combat loop arithmetic.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::components::{DefeatState, Health, Weapon};
use super::resources::{CombatSession, CombatTuning};
use super::systems::{
    ENEMY_RADIUS, HitOutcome, apply_hit, pursuit_step, respawn_point, swing_connects,
};

#[test]
fn test_weapon_velocity_from_position_delta() {
    let mut weapon = Weapon::default();

    // First frame only primes the previous position.
    weapon.track(Vec3::new(1.0, 1.0, 0.0), 0.1);
    assert_eq!(weapon.velocity, Vec3::ZERO);

    weapon.track(Vec3::new(1.5, 1.0, 0.0), 0.1);
    assert!((weapon.velocity - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    assert!((weapon.speed() - 5.0).abs() < 1e-5);

    // Recomputed fresh each frame, no smoothing.
    weapon.track(Vec3::new(1.5, 1.0, 0.0), 0.1);
    assert_eq!(weapon.velocity, Vec3::ZERO);
}

#[test]
fn test_stationary_weapon_never_hits() {
    let tuning = CombatTuning::default();
    let session = CombatSession::default();

    // Touching the enemy but not swinging.
    assert!(!swing_connects(0.1, 0.0, 10.0, &session, &tuning));
    assert!(!swing_connects(0.0, 1.9, 10.0, &session, &tuning));
}

#[test]
fn test_hit_gate_requires_all_three_conditions() {
    let tuning = CombatTuning::default();
    let mut session = CombatSession::default();
    session.record_hit(1.0);

    // All three satisfied.
    assert!(swing_connects(0.5, 3.0, 2.0, &session, &tuning));
    // Too far.
    assert!(!swing_connects(0.9, 3.0, 2.0, &session, &tuning));
    // Too slow.
    assert!(!swing_connects(0.5, 1.0, 2.0, &session, &tuning));
    // Inside cooldown.
    assert!(!swing_connects(0.5, 3.0, 1.3, &session, &tuning));
}

#[test]
fn test_first_hit_is_not_cooldown_gated() {
    let tuning = CombatTuning::default();
    let session = CombatSession::default();
    assert!(swing_connects(0.5, 3.0, 0.0, &session, &tuning));
}

#[test]
fn test_four_hits_deplete_and_defeat_once() {
    let tuning = CombatTuning::default();
    let mut session = CombatSession::default();
    let mut health = Health::new(tuning.max_health);
    let mut state = DefeatState::default();

    let mut now = 0.0;
    let expected = [75, 50, 25];
    for remaining in expected {
        now += 1.0;
        let outcome = apply_hit(&mut health, &mut state, &mut session, now, &tuning);
        assert_eq!(outcome, HitOutcome::Damaged);
        assert_eq!(health.current, remaining);
        assert_eq!(session.kills, 0);
        assert!(state.active());
    }

    now += 1.0;
    let outcome = apply_hit(&mut health, &mut state, &mut session, now, &tuning);
    assert_eq!(outcome, HitOutcome::Defeated);
    assert_eq!(health.current, 0);
    assert_eq!(session.kills, 1);
    assert!(state.defeated);
    // Defeated enemies are out of the hit check entirely.
    assert!(!state.active());
    assert_eq!(session.last_hit_time, now);
}

#[test]
fn test_health_display_floor_at_zero() {
    let mut health = Health::new(20);
    assert!(health.take_damage(25));
    assert_eq!(health.current, 0);
    assert!(health.is_depleted());
}

#[test]
fn test_respawn_countdown_and_reset() {
    let tuning = CombatTuning::default();
    let mut health = Health::new(tuning.max_health);
    let mut state = DefeatState::default();

    health.take_damage(tuning.max_health);
    state.defeat(tuning.defeat_duration);

    // 4.8s of countdown: still down.
    for _ in 0..4 {
        assert!(!state.tick(1.2));
    }
    // The countdown lapses.
    assert!(state.tick(1.2));

    state.respawn();
    health.reset();
    assert!(!state.defeated);
    assert_eq!(health.current, tuning.max_health);
    // The respawn frame performs no pursuit and no hit check.
    assert!(state.just_respawned);
    assert!(!state.active());

    state.just_respawned = false;
    assert!(state.active());
}

#[test]
fn test_tick_is_inert_while_alive() {
    let mut state = DefeatState::default();
    assert!(!state.tick(100.0));
    assert!(state.active());
}

#[test]
fn test_respawn_point_stays_on_ring() {
    let tuning = CombatTuning::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..100 {
        let p = respawn_point(&mut rng, &tuning);
        let planar_radius = Vec2::new(p.x, p.z).length();
        assert!(planar_radius >= tuning.respawn_radius_min);
        assert!(planar_radius < tuning.respawn_radius_max);
        assert_eq!(p.y, ENEMY_RADIUS);
    }
}

#[test]
fn test_pursuit_step_is_planar_and_fixed_speed() {
    let tuning = CombatTuning::default();
    let enemy = Vec3::new(10.0, ENEMY_RADIUS, 0.0);
    let player = Vec3::new(0.0, 1.6, 0.0);

    let next = pursuit_step(enemy, player, 0.1, &tuning).expect("outside stand-off");
    // Moves straight toward the player at pursuit_speed.
    let step = next - enemy;
    assert!((step.length() - tuning.pursuit_speed * 0.1).abs() < 1e-5);
    assert!(step.x < 0.0);
    // Height difference to the viewer is ignored.
    assert_eq!(next.y, enemy.y);
}

#[test]
fn test_pursuit_stops_at_stand_off() {
    let tuning = CombatTuning::default();
    let enemy = Vec3::new(tuning.stand_off_distance * 0.5, ENEMY_RADIUS, 0.0);
    let player = Vec3::new(0.0, 1.6, 0.0);
    assert!(pursuit_step(enemy, player, 0.1, &tuning).is_none());
}

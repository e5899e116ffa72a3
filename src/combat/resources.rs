//! Combat domain: tuning and session state resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct CombatTuning {
    /// A swing connects only within this distance of the enemy
    pub hit_radius: f32,
    /// Minimum weapon speed for a swing to count as a strike
    pub min_swing_speed: f32,
    /// Minimum gap between two accepted hits
    pub hit_cooldown: f32,
    /// Health removed per accepted hit
    pub hit_damage: i32,
    /// Health pool on spawn and respawn
    pub max_health: i32,
    /// Seconds spent defeated before respawning
    pub defeat_duration: f32,
    /// Respawn ring around the arena origin
    pub respawn_radius_min: f32,
    pub respawn_radius_max: f32,
    /// Straight-line pursuit speed on the ground plane
    pub pursuit_speed: f32,
    /// Pursuit stops inside this planar distance to the player
    pub stand_off_distance: f32,
    /// Duration of the hit-flash tint
    pub flash_duration: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            hit_radius: 0.8,
            min_swing_speed: 2.0,
            hit_cooldown: 0.5,
            hit_damage: 25,
            max_health: 100,
            defeat_duration: 5.0,
            respawn_radius_min: 10.0,
            respawn_radius_max: 15.0,
            pursuit_speed: 1.5,
            stand_off_distance: 0.6,
            flash_duration: 0.15,
        }
    }
}

/// Per-session combat bookkeeping. Lives for the running scene only.
#[derive(Resource, Debug, Clone)]
pub struct CombatSession {
    /// Session-clock time of the last accepted hit
    pub last_hit_time: f32,
    pub kills: u32,
}

impl Default for CombatSession {
    fn default() -> Self {
        Self {
            // The first swing of a session is never cooldown-gated.
            last_hit_time: f32::NEG_INFINITY,
            kills: 0,
        }
    }
}

impl CombatSession {
    pub fn record_hit(&mut self, now: f32) {
        self.last_hit_time = now;
    }

    pub fn cooldown_elapsed(&self, now: f32, cooldown: f32) -> bool {
        now - self.last_hit_time > cooldown
    }
}

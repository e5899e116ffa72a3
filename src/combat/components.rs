//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

/// Marks the pursuing enemy.
#[derive(Component, Debug)]
pub struct Enemy;

/// Health component for damageable entities.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage. Display value never goes below zero.
    /// Returns true if this hit depleted the pool.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current = (self.current - amount).max(0);
        self.current == 0
    }

    pub fn reset(&mut self) {
        self.current = self.max;
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// Defeat/respawn sub-state. While defeated the enemy is inert and
/// invulnerable; `respawn_timer` counts down to the respawn frame.
#[derive(Component, Debug, Default)]
pub struct DefeatState {
    pub defeated: bool,
    pub respawn_timer: f32,
    /// Set for exactly the frame the enemy respawns on. Pursuit and hit
    /// detection sit that frame out.
    pub just_respawned: bool,
}

impl DefeatState {
    /// Enter the defeated state and start the respawn countdown.
    pub fn defeat(&mut self, respawn_after: f32) {
        self.defeated = true;
        self.respawn_timer = respawn_after;
    }

    /// Count down while defeated. Returns true when the countdown has
    /// lapsed and the enemy should respawn this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.defeated {
            return false;
        }
        self.respawn_timer -= dt;
        self.respawn_timer <= 0.0
    }

    /// Clear the defeated flag on the respawn frame.
    pub fn respawn(&mut self) {
        self.defeated = false;
        self.respawn_timer = 0.0;
        self.just_respawned = true;
    }

    /// True when the enemy participates in pursuit and hit checks.
    pub fn active(&self) -> bool {
        !self.defeated && !self.just_respawned
    }
}

/// Tracked weapon transform state. Velocity is recomputed fresh every
/// frame from the position delta, no smoothing.
#[derive(Component, Debug, Default)]
pub struct Weapon {
    pub prev_position: Option<Vec3>,
    pub velocity: Vec3,
}

impl Weapon {
    /// Record this frame's world position and derive velocity from the
    /// previous one. The first frame only primes `prev_position`.
    pub fn track(&mut self, position: Vec3, dt: f32) {
        if let Some(prev) = self.prev_position {
            if dt > 0.0 {
                self.velocity = (position - prev) / dt;
            }
        }
        self.prev_position = Some(position);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Transient hit-flash cue. A new accepted hit supersedes the pending
/// timer instead of racing it, and defeat removes the component outright,
/// so a stale revert can never stomp a later state change.
#[derive(Component, Debug)]
pub struct HitFlash {
    pub timer: f32,
}

/// The material color an enemy reverts to after a flash or respawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseColor(pub Color);

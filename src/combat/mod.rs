//! Combat domain: weapon tracking, pursuit, hit detection, and respawn.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{BaseColor, DefeatState, Enemy, Health, HitFlash, Weapon};
pub use events::{EnemyDefeatedEvent, EnemyHitEvent, EnemyRespawnedEvent};
pub use resources::{CombatSession, CombatTuning};

use bevy::prelude::*;

use crate::combat::systems::{
    detect_hits, log_combat_events, pursue_player, spawn_enemy, tick_respawn,
    track_weapon_velocity, update_hit_flash,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<CombatSession>()
            .add_message::<EnemyHitEvent>()
            .add_message::<EnemyDefeatedEvent>()
            .add_message::<EnemyRespawnedEvent>()
            .add_systems(Startup, spawn_enemy)
            .add_systems(
                Update,
                (
                    track_weapon_velocity,
                    tick_respawn,
                    pursue_player,
                    detect_hits,
                    update_hit_flash,
                    log_combat_events,
                )
                    .chain(),
            );
    }
}

//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted for every accepted hit that leaves the enemy standing.
#[derive(Debug)]
pub struct EnemyHitEvent {
    pub enemy: Entity,
    pub remaining_health: i32,
}

impl Message for EnemyHitEvent {}

/// Emitted exactly once per health depletion.
#[derive(Debug)]
pub struct EnemyDefeatedEvent {
    pub enemy: Entity,
    pub total_kills: u32,
}

impl Message for EnemyDefeatedEvent {}

/// Emitted on the frame a defeated enemy returns to the ring.
#[derive(Debug)]
pub struct EnemyRespawnedEvent {
    pub enemy: Entity,
    pub position: Vec3,
}

impl Message for EnemyRespawnedEvent {}

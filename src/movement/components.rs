//! Movement domain: player rig components and tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the player rig body. The camera rides it as a child at eye
/// height, standing in for the XR viewer transform.
#[derive(Component, Debug)]
pub struct Player;

/// Marks the carried club entity.
#[derive(Component, Debug)]
pub struct Club;

/// Timed swing arc state for the club. Inactive at zero.
#[derive(Component, Debug, Default)]
pub struct SwingState {
    pub timer: f32,
}

impl SwingState {
    pub fn is_swinging(&self) -> bool {
        self.timer > 0.0
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub turn_speed: f32,
    pub eye_height: f32,
    pub swing_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            turn_speed: 2.5,
            eye_height: 1.6,
            swing_duration: 0.25,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x strafes, y walks forward/back, in the rig's local frame
    pub axis: Vec2,
    /// Positive turns left
    pub turn: f32,
    pub swing_pressed: bool,
}

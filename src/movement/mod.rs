//! Movement domain: desktop stand-in for the XR rig and weapon hand.

mod components;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Club, MovementInput, MovementTuning, Player, SwingState};

use bevy::prelude::*;

use crate::movement::systems::{apply_movement, read_move_input, spawn_player, update_swing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_move_input, apply_movement, update_swing).chain());
    }
}

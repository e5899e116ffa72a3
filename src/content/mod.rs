//! Content domain: RON-backed gameplay tuning.
//!
//! Every tuning value has a compiled-in default, so a missing or broken
//! data file downgrades to a warning rather than aborting the session.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::GameplayDefaults;
pub use loader::ContentLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::combat::CombatTuning;
use crate::movement::MovementTuning;

const DEFAULTS_PATH: &str = "assets/data/gameplay_defaults.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_gameplay_defaults);
    }
}

fn load_gameplay_defaults(
    mut combat: ResMut<CombatTuning>,
    mut movement: ResMut<MovementTuning>,
) {
    match loader::load_single_file::<GameplayDefaults>(Path::new(DEFAULTS_PATH)) {
        Ok(defaults) => {
            *combat = defaults.combat;
            *movement = defaults.movement;
            info!("loaded gameplay defaults from {}", DEFAULTS_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
        }
    }
}

//! Core domain: session configuration and the shared arena RNG.

mod resources;

pub use resources::{ArenaRng, SessionConfig};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let config = SessionConfig::default();
        info!("session seed: {}", config.seed);
        app.insert_resource(ArenaRng(ChaCha8Rng::seed_from_u64(config.seed)))
            .insert_resource(config);
    }
}

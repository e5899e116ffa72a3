//! Core domain: shared resources for session setup.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Session-wide configuration, fixed at startup.
#[derive(Resource, Debug)]
pub struct SessionConfig {
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Seeded RNG for all gameplay rolls (enemy respawn placement).
/// Re-running with the same seed reproduces the same respawn ring points.
#[derive(Resource, Debug)]
pub struct ArenaRng(pub ChaCha8Rng);

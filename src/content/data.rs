//! Content domain: data definitions deserialized from RON.

use serde::{Deserialize, Serialize};

use crate::combat::CombatTuning;
use crate::movement::MovementTuning;

/// Top-level shape of `assets/data/gameplay_defaults.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub combat: CombatTuning,
    pub movement: MovementTuning,
}

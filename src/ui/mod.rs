//! UI domain: in-run HUD elements.

mod scoreboard;

use bevy::prelude::*;

use crate::ui::scoreboard::{spawn_scoreboard_ui, update_scoreboard};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scoreboard_ui)
            .add_systems(Update, update_scoreboard);
    }
}

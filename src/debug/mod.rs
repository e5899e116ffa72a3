//! Debug overlay for fast iteration (dev-tools feature).
//!
//! F3 toggles a read-only overlay with weapon speed, enemy state, and
//! the distance between them.

use bevy::prelude::*;

use crate::combat::{DefeatState, Enemy, Health, Weapon};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub visible: bool,
}

#[derive(Component)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.9, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut query: Query<&mut Visibility, With<DebugOverlayText>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
        for mut visibility in &mut query {
            *visibility = if state.visible {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn update_overlay(
    state: Res<DebugState>,
    weapon_query: Query<(&GlobalTransform, &Weapon)>,
    enemy_query: Query<(&Transform, &Health, &DefeatState), With<Enemy>>,
    mut query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.visible {
        return;
    }
    let Ok((weapon_transform, weapon)) = weapon_query.single() else {
        return;
    };
    let Ok((enemy_transform, health, defeat)) = enemy_query.single() else {
        return;
    };
    let distance = weapon_transform
        .translation()
        .distance(enemy_transform.translation);

    let enemy_state = if defeat.defeated {
        format!("defeated ({:.1}s)", defeat.respawn_timer.max(0.0))
    } else {
        format!("{}/{} hp", health.current, health.max)
    };

    for mut text in &mut query {
        **text = format!(
            "weapon speed {:.2} m/s\nenemy {}\ndistance {:.2} m",
            weapon.speed(),
            enemy_state,
            distance
        );
    }
}

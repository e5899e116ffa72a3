//! UI domain: kill-count scoreboard HUD element.

use bevy::prelude::*;

use crate::combat::CombatSession;

const SCOREBOARD_PADDING: f32 = 16.0;

/// Marker for the scoreboard container
#[derive(Component)]
pub struct ScoreboardUI;

/// Marker for the kill count text
#[derive(Component)]
pub struct KillCountText;

pub(crate) fn spawn_scoreboard_ui(mut commands: Commands) {
    commands
        .spawn((
            ScoreboardUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(SCOREBOARD_PADDING),
                top: Val::Px(SCOREBOARD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("KILLS"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
            parent.spawn((
                KillCountText,
                Text::new("0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Rewrite the count only when it actually changes. The session resource
/// also moves on every accepted hit, so change detection alone is too
/// chatty here.
pub(crate) fn update_scoreboard(
    session: Res<CombatSession>,
    mut shown_kills: Local<Option<u32>>,
    mut query: Query<&mut Text, With<KillCountText>>,
) {
    if *shown_kills == Some(session.kills) {
        return;
    }
    *shown_kills = Some(session.kills);
    for mut text in &mut query {
        **text = format!("{}", session.kills);
    }
}

//! Movement domain: rig spawning, input, walking, and the club swing.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::f32::consts::PI;

use crate::combat::Weapon;
use crate::movement::components::{Club, MovementInput, MovementTuning, Player, SwingState};

const CLUB_REST_OFFSET: Vec3 = Vec3::new(0.35, 1.2, -0.5);
const CLUB_RADIUS: f32 = 0.05;
const CLUB_LENGTH: f32 = 0.8;
/// Forward reach of the swing arc at its peak
const SWING_REACH: f32 = 0.9;
const SWING_LIFT: f32 = 0.25;
const SWING_PITCH: f32 = 1.6;

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
) {
    commands
        .spawn((Player, Transform::from_xyz(0.0, 0.0, 0.0), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, tuning.eye_height, 0.0),
            ));

            parent.spawn((
                Club,
                Weapon::default(),
                SwingState::default(),
                Mesh3d(meshes.add(Cylinder::new(CLUB_RADIUS, CLUB_LENGTH))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(120, 85, 50),
                    ..default()
                })),
                Transform::from_translation(CLUB_REST_OFFSET),
                RigidBody::Kinematic,
                Collider::capsule(CLUB_RADIUS, CLUB_LENGTH),
            ));
        });
}

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<MovementInput>,
) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    input.axis = axis.normalize_or_zero();

    input.turn = 0.0;
    if keyboard.pressed(KeyCode::KeyQ) {
        input.turn += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        input.turn -= 1.0;
    }

    input.swing_pressed =
        mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::Space);
}

pub(crate) fn apply_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let dt = time.delta_secs();
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    if input.turn != 0.0 {
        transform.rotate_y(input.turn * tuning.turn_speed * dt);
    }

    if input.axis != Vec2::ZERO {
        let forward = transform.rotation * Vec3::NEG_Z;
        let right = transform.rotation * Vec3::X;
        let mut step = forward * input.axis.y + right * input.axis.x;
        step.y = 0.0;
        transform.translation += step.normalize_or_zero() * tuning.move_speed * dt;
    }
}

/// Drive the club along its swing arc. The arc is what gives the weapon
/// the world-space velocity the combat loop measures.
pub(crate) fn update_swing(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<(&mut Transform, &mut SwingState), With<Club>>,
) {
    let dt = time.delta_secs();
    let Ok((mut transform, mut swing)) = query.single_mut() else {
        return;
    };

    if input.swing_pressed && !swing.is_swinging() {
        swing.timer = tuning.swing_duration;
    }

    if swing.is_swinging() {
        swing.timer -= dt;
        let progress = 1.0 - (swing.timer / tuning.swing_duration).clamp(0.0, 1.0);
        *transform = swing_pose(progress);
    } else {
        *transform = Transform::from_translation(CLUB_REST_OFFSET);
    }
}

/// Club pose at a point of the swing, progress in 0..=1. Starts and ends
/// at the rest offset, peaking forward and up at the midpoint.
pub(crate) fn swing_pose(progress: f32) -> Transform {
    let arc = (progress * PI).sin();
    Transform {
        translation: CLUB_REST_OFFSET + Vec3::new(0.0, arc * SWING_LIFT, -arc * SWING_REACH),
        rotation: Quat::from_rotation_x(-arc * SWING_PITCH),
        ..default()
    }
}

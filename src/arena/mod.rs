//! Arena domain: static scenery. A sand floor and four walls enclosing
//! the fight, plus scene lighting.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

pub const ARENA_SIZE: f32 = 36.0;
pub const WALL_HEIGHT: f32 = 5.0;
const WALL_THICKNESS: f32 = 0.3;
const FLOOR_THICKNESS: f32 = 0.1;
const FLOOR_COLOR: Color = Color::srgb(0.76, 0.70, 0.50);
const WALL_COLOR: Color = Color::srgb(0.80, 0.25, 0.33);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_arena, spawn_lights));
    }
}

fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ARENA_SIZE, ARENA_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: FLOOR_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        RigidBody::Static,
        Collider::cuboid(ARENA_SIZE, FLOOR_THICKNESS, ARENA_SIZE),
    ));

    // Four walls on the arena perimeter
    let wall_mesh = meshes.add(Cuboid::new(ARENA_SIZE, WALL_HEIGHT, WALL_THICKNESS));
    let wall_material = materials.add(StandardMaterial {
        base_color: WALL_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });

    let half = ARENA_SIZE / 2.0;
    let walls = [
        (Vec3::new(0.0, WALL_HEIGHT / 2.0, -half), 0.0),
        (Vec3::new(0.0, WALL_HEIGHT / 2.0, half), 0.0),
        (Vec3::new(half, WALL_HEIGHT / 2.0, 0.0), FRAC_PI_2),
        (Vec3::new(-half, WALL_HEIGHT / 2.0, 0.0), FRAC_PI_2),
    ];
    for (position, yaw) in walls {
        commands.spawn((
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_y(yaw)),
            RigidBody::Static,
            Collider::cuboid(ARENA_SIZE, WALL_HEIGHT, WALL_THICKNESS),
        ));
    }
}

fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

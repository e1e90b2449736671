//! Builders for the aim rig and scene geometry.

use bevy::prelude::*;
use rail_snap::{AimCamera, AimReference, Collider, CrosshairDummy, Enemy, Player};

/// Positions of the four rig roles.
///
/// The default places the player at the origin, the camera behind it and
/// the crosshair dummy one unit ahead, all looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigLayout {
    /// Player position.
    pub player: Vec3,
    /// Player collider radius.
    pub player_radius: f32,
    /// Aim camera position.
    pub camera: Vec3,
    /// Crosshair dummy position; its forward axis is -Z.
    pub dummy: Vec3,
    /// Aim reference position.
    pub reference: Vec3,
}

impl Default for RigLayout {
    fn default() -> Self {
        Self {
            player: Vec3::ZERO,
            player_radius: 1.0,
            camera: Vec3::new(0.0, 0.0, 5.0),
            dummy: Vec3::new(0.0, 0.0, -1.0),
            reference: Vec3::new(0.0, 0.0, -2.0),
        }
    }
}

/// Entities spawned by [`spawn_rig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigEntities {
    /// The player.
    pub player: Entity,
    /// The aim camera.
    pub camera: Entity,
    /// The crosshair dummy.
    pub dummy: Entity,
    /// The aim reference.
    pub reference: Entity,
}

/// Spawns one entity per rig role.
pub fn spawn_rig(world: &mut World, layout: &RigLayout) -> RigEntities {
    RigEntities {
        player: world
            .spawn((
                Player,
                Transform::from_translation(layout.player),
                Collider::sphere(layout.player_radius),
            ))
            .id(),
        camera: world
            .spawn((AimCamera, Transform::from_translation(layout.camera)))
            .id(),
        dummy: world
            .spawn((CrosshairDummy, Transform::from_translation(layout.dummy)))
            .id(),
        reference: world
            .spawn((AimReference, Transform::from_translation(layout.reference)))
            .id(),
    }
}

/// Spawns an enemy with the default snap collider at `position`.
pub fn spawn_enemy(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((Enemy::default(), Transform::from_translation(position)))
        .id()
}

/// Spawns an axis-aligned box obstacle of full `size` centred on `centre`.
pub fn spawn_wall(world: &mut World, centre: Vec3, size: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Wall"),
            Transform::from_translation(centre),
            Collider::cuboid(size),
        ))
        .id()
}

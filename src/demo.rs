//! Headless demo scene used by the binary.
//!
//! Spawns the aim rig, a wall and a handful of enemies placed to exercise
//! every outcome: one strafing in and out of cover, one hidden behind the
//! wall, one out of range and one behind the player. The aim reference
//! sweeps sideways so the aim ray crosses the strafing enemy.

use bevy::ecs::prelude::On;
use bevy::prelude::*;

use crate::components::{
    AimCamera, AimReference, CrosshairDummy, Enemy, Player, PrimaryCrosshair, SecondaryCrosshair,
    SightState,
};
use crate::raycast::Collider;
use crate::targeting::{CrosshairState, SightChanged};

/// Radius of the player's collider.
pub const PLAYER_COLLIDER_RADIUS: f32 = 1.0;

/// Sideways oscillation about a fixed anchor.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Strafe {
    /// Centre of the motion.
    pub anchor: Vec3,
    /// Peak displacement along X.
    pub amplitude: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

impl Strafe {
    /// Position at `elapsed` seconds.
    #[must_use]
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        self.anchor + Vec3::X * self.amplitude * (elapsed * self.speed).sin()
    }
}

/// Running totals reported when the demo ends.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoStats {
    /// Unseen-to-seen transitions.
    pub acquired: u32,
    /// Seen-to-unseen transitions.
    pub lost: u32,
    /// Frames on which the crosshair started a snap onto a new enemy.
    pub snaps: u32,
    last_target: Option<Entity>,
}

/// Installs the demo scene.
#[derive(Default, Debug)]
pub struct DemoScenePlugin;

impl Plugin for DemoScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoStats>()
            .add_observer(count_sight_changes)
            .add_systems(Startup, spawn_demo_scene_system)
            .add_systems(
                Update,
                (
                    strafe_system.before(crate::TargetingSet::Discover),
                    count_snaps_system.after(crate::TargetingSet::Resolve),
                ),
            );
    }
}

/// Spawns the rig, obstacles and enemies.
pub fn spawn_demo_scene_system(mut commands: Commands) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Transform::default(),
        Collider::sphere(PLAYER_COLLIDER_RADIUS),
    ));
    commands.spawn((Name::new("AimCamera"), AimCamera, Transform::from_xyz(0.0, 0.0, 5.0)));
    commands.spawn((
        Name::new("CrosshairDummy"),
        CrosshairDummy,
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));
    let reference_anchor = Vec3::new(0.0, 0.0, -2.0);
    commands.spawn((
        Name::new("AimReference"),
        AimReference,
        Transform::from_translation(reference_anchor),
        Strafe {
            anchor: reference_anchor,
            amplitude: 0.5,
            speed: 1.3,
        },
    ));
    commands.spawn((Name::new("PrimaryCrosshair"), PrimaryCrosshair, Transform::default()));
    commands.spawn((
        Name::new("SecondaryCrosshair"),
        SecondaryCrosshair::default(),
        Transform::default(),
    ));

    commands.spawn((
        Name::new("Wall"),
        Transform::from_xyz(8.0, 0.0, -20.0),
        Collider::cuboid(Vec3::new(6.0, 6.0, 1.0)),
    ));

    let strafer = Vec3::new(0.0, 0.0, -40.0);
    commands.spawn((
        Name::new("Strafer"),
        Enemy::default(),
        Transform::from_translation(strafer),
        Strafe {
            anchor: strafer,
            amplitude: 25.0,
            speed: 0.8,
        },
    ));
    commands.spawn((
        Name::new("Hidden"),
        Enemy::default(),
        Transform::from_xyz(24.0, 0.0, -60.0),
    ));
    commands.spawn((
        Name::new("Distant"),
        Enemy::with_radius(4.0),
        Transform::from_xyz(0.0, 0.0, -140.0),
    ));
    commands.spawn((
        Name::new("Behind"),
        Enemy::default(),
        Transform::from_xyz(0.0, 0.0, 20.0),
    ));
}

/// Moves every [`Strafe`] entity along its path.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn strafe_system(time: Res<Time>, mut movers: Query<(&Strafe, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (strafe, mut transform) in &mut movers {
        transform.translation = strafe.position_at(elapsed);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn count_sight_changes(event: On<SightChanged>, mut stats: ResMut<DemoStats>) {
    match event.event().state {
        SightState::Seen => stats.acquired += 1,
        SightState::Unseen => stats.lost += 1,
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn count_snaps_system(crosshair: Res<CrosshairState>, mut stats: ResMut<DemoStats>) {
    let target = crosshair.snap_target();
    if target.is_some() && target != stats.last_target {
        stats.snaps += 1;
    }
    stats.last_target = target;
}

//! Bevy plugin wiring the targeting systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error};

use crate::components::{
    AimCamera, AimReference, CrosshairDummy, Enemy, Player, PrimaryCrosshair,
    SecondaryCrosshair, SightState, Sighting,
};
use crate::raycast::Collider;
use crate::registry::{register_spawned_enemy, scan_enemies_system, EnemyRegistry, ScanSchedule};
use crate::settings::SnapSettings;

use super::aim::{apply_crosshair_visuals_system, resolve_aim_system, CrosshairState};
use super::debug::SightDebugLines;
use super::lifecycle::{
    attach_missing_snap_colliders_system, attach_snap_collider, release_removed_enemy,
};
use super::markers::sync_markers_system;
use super::rig::{verify_targeting_setup_system, TargetingError};
use super::visibility::{evaluate_visibility_system, SightChanged};

/// Ordering of the targeting stages within `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetingSet {
    /// Registry scan.
    Discover,
    /// Sight flags.
    Evaluate,
    /// Aim ray and crosshair.
    Resolve,
    /// Marker upkeep.
    Markers,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_targeting_error(event: On<TargetingError>) {
    error!("targeting error: {}", event.event());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_sight_change(event: On<SightChanged>) {
    let SightChanged { enemy, state } = *event.event();
    match state {
        SightState::Seen => debug!("enemy {enemy} acquired"),
        SightState::Unseen => debug!("enemy {enemy} lost"),
    }
}

/// Installs enemy discovery, visibility evaluation, aim resolution and
/// marker upkeep.
///
/// Settings are taken from an existing [`SnapSettings`] resource when the
/// host inserted one before adding the plugin, otherwise the defaults apply.
/// The host must spawn exactly one [`Player`], [`AimCamera`],
/// [`CrosshairDummy`] and [`AimReference`] during `Startup`; a missing or
/// duplicated role fails the app in `PostStartup`.
#[derive(Default, Debug)]
pub struct SnapPlugin;

impl Plugin for SnapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnapSettings>()
            .init_resource::<EnemyRegistry>()
            .init_resource::<ScanSchedule>()
            .init_resource::<CrosshairState>()
            .init_resource::<SightDebugLines>();

        app.register_type::<Enemy>()
            .register_type::<Sighting>()
            .register_type::<Collider>()
            .register_type::<Player>()
            .register_type::<AimCamera>()
            .register_type::<CrosshairDummy>()
            .register_type::<AimReference>()
            .register_type::<PrimaryCrosshair>()
            .register_type::<SecondaryCrosshair>();

        app.add_observer(log_targeting_error)
            .add_observer(log_sight_change)
            .add_observer(register_spawned_enemy)
            .add_observer(attach_snap_collider)
            .add_observer(release_removed_enemy);

        app.configure_sets(
            Update,
            (
                TargetingSet::Discover,
                TargetingSet::Evaluate,
                TargetingSet::Resolve,
                TargetingSet::Markers,
            )
                .chain(),
        );

        app.add_systems(PostStartup, verify_targeting_setup_system);
        app.add_systems(
            Update,
            (
                (attach_missing_snap_colliders_system, scan_enemies_system)
                    .in_set(TargetingSet::Discover),
                evaluate_visibility_system.in_set(TargetingSet::Evaluate),
                (resolve_aim_system, apply_crosshair_visuals_system)
                    .chain()
                    .in_set(TargetingSet::Resolve),
                sync_markers_system.in_set(TargetingSet::Markers),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rig(app: &mut App) {
        let world = app.world_mut();
        world.spawn((Player, Transform::default(), Collider::sphere(1.0)));
        world.spawn((AimCamera, Transform::from_xyz(0.0, 0.0, 5.0)));
        world.spawn((CrosshairDummy, Transform::from_xyz(0.0, 0.0, -1.0)));
        world.spawn((AimReference, Transform::from_xyz(0.0, 0.0, -2.0)));
    }

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SnapPlugin);
        assert!(app.world().contains_resource::<SnapSettings>());
        assert!(app.world().contains_resource::<EnemyRegistry>());
        assert!(app.world().contains_resource::<CrosshairState>());
        assert!(app.world().contains_resource::<SightDebugLines>());
    }

    #[rstest]
    fn host_settings_survive_plugin_build() {
        let mut app = App::new();
        app.insert_resource(SnapSettings {
            distance_to_snap: 42.0,
            ..SnapSettings::default()
        });
        app.add_plugins(SnapPlugin);
        let settings = app.world().resource::<SnapSettings>();
        assert!((settings.distance_to_snap - 42.0).abs() < f32::EPSILON);
    }

    #[rstest]
    fn complete_rig_runs_a_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SnapPlugin);
        rig(&mut app);
        let enemy = app
            .world_mut()
            .spawn((Enemy::default(), Transform::from_xyz(0.0, 0.0, -40.0)))
            .id();
        app.update();
        assert!(app.world().resource::<EnemyRegistry>().contains(enemy));
        assert_eq!(
            app.world().get::<Sighting>(enemy).map(|s| s.state()),
            Some(SightState::Seen)
        );
    }

    #[rstest]
    fn enemy_spawned_before_the_plugin_is_snappable() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let enemy = app
            .world_mut()
            .spawn((Enemy::default(), Transform::from_xyz(0.0, 0.0, -40.0)))
            .id();
        app.add_plugins(SnapPlugin);
        rig(&mut app);
        app.update();
        assert_eq!(
            app.world().get::<Collider>(enemy),
            Some(&Collider::sphere(2.6))
        );
        assert_eq!(
            app.world().resource::<CrosshairState>().snap_target(),
            Some(enemy)
        );
    }

    #[rstest]
    #[should_panic]
    fn missing_rig_fails_startup() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SnapPlugin);
        app.update();
    }
}

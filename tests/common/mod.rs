//! Shared test fixtures and helpers for targeting integration tests.
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of these helpers."
)]

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use rail_snap::{
    CrosshairState, EnemyRegistry, MarkerSlot, SightState, Sighting, SnapMarker, SnapPlugin,
    SnapSettings,
};
use test_utils::{install_fixed_step, spawn_enemy, spawn_rig, RigEntities, RigLayout, FRAME};

/// Builder for test `App` instances running the targeting plugin.
pub struct SnapTestAppBuilder {
    app: App,
    rig: Option<RigEntities>,
}

impl SnapTestAppBuilder {
    /// A headless app with `MinimalPlugins` stepping [`FRAME`] per update.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        install_fixed_step(&mut app, FRAME);
        Self { app, rig: None }
    }

    /// Uses `settings` instead of the defaults.
    #[must_use]
    pub fn with_settings(mut self, settings: SnapSettings) -> Self {
        self.app.insert_resource(settings);
        self
    }

    /// Spawns the default aim rig.
    #[must_use]
    pub fn with_rig(self) -> Self {
        self.with_rig_layout(&RigLayout::default())
    }

    /// Spawns an aim rig with a custom layout.
    #[must_use]
    pub fn with_rig_layout(mut self, layout: &RigLayout) -> Self {
        self.rig = Some(spawn_rig(self.app.world_mut(), layout));
        self
    }

    /// Spawns an enemy before the first frame.
    #[must_use]
    pub fn spawn_enemy(mut self, position: Vec3) -> (Self, Entity) {
        let enemy = spawn_enemy(self.app.world_mut(), position);
        (self, enemy)
    }

    /// Installs [`SnapPlugin`] and returns the app.
    #[must_use]
    pub fn build(mut self) -> App {
        self.app.add_plugins(SnapPlugin);
        self.app
    }

    /// Like [`Self::build`], also returning the rig entities.
    ///
    /// # Panics
    ///
    /// Panics if no rig was spawned.
    #[must_use]
    pub fn build_with_rig(self) -> (App, RigEntities) {
        let rig = self
            .rig
            .unwrap_or_else(|| panic!("build_with_rig requires with_rig"));
        (self.build(), rig)
    }
}

impl Default for SnapTestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assertion helpers for targeting state.
pub struct SnapAssertions;

impl SnapAssertions {
    /// The enemy's current sight flag.
    pub fn sight_state(app: &App, enemy: Entity) -> Result<SightState> {
        app.world()
            .get::<Sighting>(enemy)
            .map(|sighting| sighting.state())
            .context("entity missing Sighting component")
    }

    /// Assert the enemy's flag equals `expected`.
    pub fn assert_sight(app: &App, enemy: Entity, expected: SightState) -> Result<()> {
        let state = Self::sight_state(app, enemy)?;
        ensure!(
            state == expected,
            "Expected enemy {enemy} to be {expected:?}, got {state:?}"
        );
        Ok(())
    }

    /// Assert whether the enemy is registered.
    pub fn assert_registered(app: &App, enemy: Entity, expected: bool) -> Result<()> {
        let registered = app
            .world()
            .get_resource::<EnemyRegistry>()
            .context("EnemyRegistry resource missing")?
            .contains(enemy);
        ensure!(
            registered == expected,
            "Expected registered({enemy}) = {expected}, got {registered}"
        );
        Ok(())
    }

    /// Number of live markers belonging to `enemy`.
    pub fn marker_count(app: &mut App, enemy: Entity) -> usize {
        let world = app.world_mut();
        world
            .query::<&SnapMarker>()
            .iter(world)
            .filter(|marker| marker.enemy == enemy)
            .count()
    }

    /// Assert `enemy` owns exactly `expected` markers and its slot agrees.
    pub fn assert_markers(app: &mut App, enemy: Entity, expected: usize) -> Result<()> {
        let count = Self::marker_count(app, enemy);
        ensure!(
            count == expected,
            "Expected {expected} markers for {enemy}, got {count}"
        );
        if let Some(slot) = app.world().get::<MarkerSlot>(enemy) {
            ensure!(
                slot.marker().is_some() == (expected > 0),
                "MarkerSlot of {enemy} disagrees with live markers: {slot:?}"
            );
        }
        Ok(())
    }

    /// Fetch the crosshair state.
    pub fn crosshair(app: &App) -> Result<&CrosshairState> {
        app.world()
            .get_resource::<CrosshairState>()
            .context("CrosshairState resource missing")
    }

    /// Assert the crosshair is snapped to `expected` (or released for `None`).
    pub fn assert_snap_target(app: &App, expected: Option<Entity>) -> Result<()> {
        let target = Self::crosshair(app)?.snap_target();
        ensure!(
            target == expected,
            "Expected snap target {expected:?}, got {target:?}"
        );
        Ok(())
    }

    /// Assert the primary crosshair sits within `epsilon` of `expected`.
    pub fn assert_primary_near(app: &App, expected: Vec3, epsilon: f32) -> Result<()> {
        let primary = Self::crosshair(app)?.primary();
        ensure!(
            primary.abs_diff_eq(expected, epsilon),
            "Expected primary crosshair near {expected:?}, got {primary:?}"
        );
        Ok(())
    }
}

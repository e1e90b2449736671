//! Enemy discovery: periodic rescans, on-spawn registration and removal.

mod common;

use anyhow::Result;
use bevy::prelude::*;
use common::{SnapAssertions, SnapTestAppBuilder};
use rail_snap::{DiscoveryMode, EnemyRegistry, SightState, SnapSettings};
use rstest::rstest;
use test_utils::{advance, spawn_enemy};

const AHEAD: Vec3 = Vec3::new(0.0, 0.0, -40.0);

#[test]
fn enemy_spawned_between_scans_waits_for_the_next_scan() -> Result<()> {
    let (builder, early) = SnapTestAppBuilder::new().with_rig().spawn_enemy(AHEAD);
    let mut app = builder.build();

    // Updates run at t = 0.0 ..= 1.0; the scan at t = 0 finds the early enemy.
    advance(&mut app, 11);
    SnapAssertions::assert_registered(&app, early, true)?;

    let late = spawn_enemy(app.world_mut(), Vec3::new(3.0, 0.0, -30.0));

    // Up to t = 2.5 the late enemy is invisible to targeting.
    advance(&mut app, 15);
    SnapAssertions::assert_registered(&app, late, false)?;
    SnapAssertions::assert_sight(&app, late, SightState::Unseen)?;
    SnapAssertions::assert_markers(&mut app, late, 0)?;

    // The scan at t = 3.0 picks it up.
    advance(&mut app, 10);
    SnapAssertions::assert_registered(&app, late, true)?;
    SnapAssertions::assert_sight(&app, late, SightState::Seen)?;
    SnapAssertions::assert_markers(&mut app, late, 1)?;
    assert_eq!(app.world().resource::<EnemyRegistry>().len(), 2);
    Ok(())
}

#[test]
fn on_spawn_discovery_registers_immediately() -> Result<()> {
    let mut app = SnapTestAppBuilder::new()
        .with_settings(SnapSettings {
            discovery: DiscoveryMode::OnSpawn,
            ..SnapSettings::default()
        })
        .with_rig()
        .build();
    advance(&mut app, 5);

    let enemy = spawn_enemy(app.world_mut(), AHEAD);
    SnapAssertions::assert_registered(&app, enemy, true)?;
    app.update();
    SnapAssertions::assert_sight(&app, enemy, SightState::Seen)?;
    Ok(())
}

#[rstest]
#[case::despawned(true)]
#[case::capability_removed(false)]
fn removed_enemy_is_purged_at_once(#[case] despawn: bool) -> Result<()> {
    let (builder, enemy) = SnapTestAppBuilder::new().with_rig().spawn_enemy(AHEAD);
    let mut app = builder.build();
    advance(&mut app, 3);
    SnapAssertions::assert_markers(&mut app, enemy, 1)?;
    SnapAssertions::assert_snap_target(&app, Some(enemy))?;

    if despawn {
        app.world_mut().despawn(enemy);
    } else {
        app.world_mut().entity_mut(enemy).remove::<rail_snap::Enemy>();
    }
    app.world_mut().flush();

    SnapAssertions::assert_registered(&app, enemy, false)?;
    assert_eq!(SnapAssertions::marker_count(&mut app, enemy), 0);
    SnapAssertions::assert_snap_target(&app, None)?;

    // The next frame neither panics nor resurrects anything.
    app.update();
    assert_eq!(SnapAssertions::marker_count(&mut app, enemy), 0);
    Ok(())
}

#[test]
fn rescans_never_duplicate_members() -> Result<()> {
    let (builder, _enemy) = SnapTestAppBuilder::new().with_rig().spawn_enemy(AHEAD);
    let mut app = builder.build();
    advance(&mut app, 70);
    assert_eq!(app.world().resource::<EnemyRegistry>().len(), 1);
    Ok(())
}

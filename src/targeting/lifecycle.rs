//! Enemy lifecycle: snap colliders on arrival, cleanup on removal.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::debug;

use crate::components::{Enemy, MarkerSlot};
use crate::raycast::Collider;
use crate::registry::EnemyRegistry;
use crate::settings::SnapSettings;

use super::aim::CrosshairState;

/// Gives a new enemy its snap sphere unless it already has a collider.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn attach_snap_collider(
    add: On<Add, Enemy>,
    settings: Res<SnapSettings>,
    enemies: Query<(&Enemy, Has<Collider>)>,
    mut commands: Commands,
) {
    let Ok((enemy, has_collider)) = enemies.get(add.entity) else {
        return;
    };
    if has_collider {
        return;
    }
    commands
        .entity(add.entity)
        .insert(snap_sphere(enemy, &settings));
}

/// Gives every collider-less enemy its snap sphere.
///
/// Catches enemies that existed before the plugin's observers were
/// registered, such as those spawned while the host was still building the
/// app.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn attach_missing_snap_colliders_system(
    settings: Res<SnapSettings>,
    enemies: Query<(Entity, &Enemy), Without<Collider>>,
    mut commands: Commands,
) {
    for (entity, enemy) in &enemies {
        debug!("attaching snap collider to enemy {entity}");
        commands.entity(entity).insert(snap_sphere(enemy, &settings));
    }
}

fn snap_sphere(enemy: &Enemy, settings: &SnapSettings) -> Collider {
    Collider::sphere(
        enemy
            .snap_collider_radius
            .unwrap_or(settings.snap_collider_radius),
    )
}

/// Purges an enemy that is despawned or loses its [`Enemy`] component.
///
/// Deregisters it, despawns its marker and drops any snap onto it.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn release_removed_enemy(
    remove: On<Remove, Enemy>,
    mut registry: ResMut<EnemyRegistry>,
    slots: Query<&MarkerSlot>,
    mut crosshair: ResMut<CrosshairState>,
    mut commands: Commands,
) {
    let enemy = remove.entity;
    if registry.deregister(enemy) {
        debug!("deregistered enemy {enemy}");
    }
    if let Ok(slot) = slots.get(enemy) {
        if let Some(marker) = slot.marker() {
            commands.entity(marker).try_despawn();
        }
    }
    crosshair.forget(enemy);
}

//! Marker upkeep: one [`SnapMarker`] per `Seen` enemy, none otherwise.

use bevy::prelude::*;
use log::debug;

use crate::components::{Enemy, MarkerSlot, Sighting, SnapMarker};

/// Spawns, moves and despawns snap markers to match each enemy's flag.
///
/// A marker follows its enemy's translation. A marker that disappeared
/// behind the enemy's back is respawned on the next `Seen` frame.
pub fn sync_markers_system(
    mut commands: Commands,
    mut enemies: Query<(Entity, &Transform, &Sighting, &mut MarkerSlot), With<Enemy>>,
    mut markers: Query<&mut Transform, (With<SnapMarker>, Without<Enemy>)>,
) {
    for (enemy, transform, sighting, mut slot) in &mut enemies {
        match (sighting.is_seen(), slot.0) {
            (true, Some(marker)) => {
                if let Ok(mut marker_transform) = markers.get_mut(marker) {
                    marker_transform.translation = transform.translation;
                } else {
                    slot.0 = Some(spawn_marker(&mut commands, enemy, transform));
                }
            }
            (true, None) => {
                slot.0 = Some(spawn_marker(&mut commands, enemy, transform));
                debug!("marker shown for enemy {enemy}");
            }
            (false, Some(marker)) => {
                commands.entity(marker).try_despawn();
                slot.0 = None;
                debug!("marker hidden for enemy {enemy}");
            }
            (false, None) => {}
        }
    }
}

fn spawn_marker(commands: &mut Commands, enemy: Entity, transform: &Transform) -> Entity {
    commands
        .spawn((
            SnapMarker { enemy },
            Transform::from_translation(transform.translation),
            Name::new("SnapMarker"),
        ))
        .id()
}

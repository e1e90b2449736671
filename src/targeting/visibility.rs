//! Visibility ray caster: decides each frame which enemies are `Seen`.
//!
//! An enemy qualifies when all three hold:
//!
//! - a ray cast from the enemy towards the player reaches it: the first hit is
//!   the player itself, lies no closer than
//!   [`SnapSettings::line_of_sight_tolerance`] short of the player, or there
//!   is no hit at all. Geometry behind the player never obstructs;
//! - the straight-line distance is below [`SnapSettings::distance_to_snap`];
//! - the enemy's projection onto the crosshair dummy's forward axis exceeds
//!   [`SnapSettings::max_behind_engage_distance`].
//!
//! Only this module writes [`Sighting`]. Each flip triggers [`SightChanged`].

use bevy::prelude::*;
use log::{trace, warn};

use crate::components::{CrosshairDummy, Enemy, Player, SightState, Sighting};
use crate::raycast::{RayCaster, SceneRaycast};
use crate::registry::EnemyRegistry;
use crate::settings::SnapSettings;
use crate::vector_math::{aim_axis_projection, direction_between};

use super::debug::{DebugRayKind, SightDebugLines};

/// Triggered whenever an enemy's [`Sighting`] flips.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SightChanged {
    /// The enemy whose flag changed.
    pub enemy: Entity,
    /// The new state.
    pub state: SightState,
}

/// World-space inputs for a single enemy's sight check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightQuery {
    /// The enemy being evaluated; excluded from its own sight ray.
    pub enemy: Entity,
    /// The player; a hit on it always counts as a clear line.
    pub player: Entity,
    /// Enemy position.
    pub enemy_position: Vec3,
    /// Player position.
    pub player_position: Vec3,
    /// Crosshair position defining the engagement cone apex.
    pub aim_origin: Vec3,
    /// Unit forward axis of the crosshair.
    pub aim_forward: Vec3,
}

/// Outcome of [`assess_sight`], keeping each qualifying condition separate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightVerdict {
    /// Straight-line enemy-player distance.
    pub distance: f32,
    /// Distance to the first thing the sight ray struck, if anything other
    /// than the player.
    pub hit_distance: Option<f32>,
    /// Whether nothing but the player stands between enemy and player.
    pub line_clear: bool,
    /// Whether `distance` is inside the snap range.
    pub in_range: bool,
    /// Whether the enemy lies inside the engagement cone.
    pub in_cone: bool,
}

impl SightVerdict {
    /// Whether every condition holds.
    #[must_use]
    pub const fn qualifies(&self) -> bool {
        self.line_clear && self.in_range && self.in_cone
    }

    /// The flag value this verdict implies.
    #[must_use]
    pub const fn state(&self) -> SightState {
        if self.qualifies() {
            SightState::Seen
        } else {
            SightState::Unseen
        }
    }
}

/// Evaluates one enemy against the current scene.
///
/// Casts exactly one ray. A cast that hits nothing, or hits only the player,
/// leaves the line of sight clear; range and cone must still hold. So does a
/// hit within the tolerance of the player's position or beyond it, which
/// keeps the result independent of the player's collider size. An enemy
/// standing on the player has no direction to cast along and is treated the
/// same way.
pub fn assess_sight(
    caster: &impl RayCaster,
    query: &SightQuery,
    settings: &SnapSettings,
) -> SightVerdict {
    let distance = query.enemy_position.distance(query.player_position);
    let hit_distance = direction_between(query.enemy_position, query.player_position)
        .map(Dir3::new_unchecked)
        .and_then(|direction| {
            caster.cast_ray(query.enemy_position, direction, Some(query.enemy))
        })
        .filter(|hit| hit.entity != query.player)
        .map(|hit| hit.distance);
    let line_clear =
        hit_distance.is_none_or(|hit| hit > distance - settings.line_of_sight_tolerance);

    SightVerdict {
        distance,
        hit_distance,
        line_clear,
        in_range: distance < settings.distance_to_snap,
        in_cone: aim_axis_projection(query.aim_origin, query.aim_forward, query.enemy_position)
            > settings.max_behind_engage_distance,
    }
}

/// Re-evaluates every registered enemy and writes its [`Sighting`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
#[expect(
    clippy::too_many_arguments,
    reason = "Bevy systems declare each resource and query they touch."
)]
pub fn evaluate_visibility_system(
    settings: Res<SnapSettings>,
    registry: Res<EnemyRegistry>,
    raycast: SceneRaycast,
    players: Query<(Entity, &Transform), With<Player>>,
    dummies: Query<&Transform, With<CrosshairDummy>>,
    mut enemies: Query<(&Transform, &mut Sighting), With<Enemy>>,
    mut debug_lines: ResMut<SightDebugLines>,
    mut commands: Commands,
) {
    debug_lines.clear();

    let (Ok((player_entity, player)), Ok(dummy)) = (players.single(), dummies.single()) else {
        warn!("visibility pass skipped: player or crosshair dummy unavailable");
        return;
    };

    for enemy in registry.iter() {
        let Ok((transform, mut sighting)) = enemies.get_mut(enemy) else {
            continue;
        };
        let query = SightQuery {
            enemy,
            player: player_entity,
            enemy_position: transform.translation,
            player_position: player.translation,
            aim_origin: dummy.translation,
            aim_forward: dummy.forward().as_vec3(),
        };
        let verdict = assess_sight(&raycast, &query, &settings);
        trace!("enemy {enemy}: {verdict:?}");

        if settings.debug_rays {
            let kind = if verdict.qualifies() {
                DebugRayKind::Qualified
            } else {
                DebugRayKind::Rejected
            };
            debug_lines.push(
                query.enemy_position,
                query.player_position - query.enemy_position,
                kind,
            );
        }

        let state = verdict.state();
        if sighting.set(state) {
            commands.trigger(SightChanged { enemy, state });
        }
    }
}

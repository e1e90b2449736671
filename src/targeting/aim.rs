//! Aim resolver: snaps the primary crosshair onto a seen enemy under the aim ray.
//!
//! Every frame the aim ray is cast from the crosshair dummy along the
//! camera-to-aim-reference direction. If it strikes a registered enemy whose
//! flag is currently [`SightState::Seen`](crate::SightState::Seen), the
//! primary crosshair eases towards that enemy over
//! [`SnapSettings::snap_duration`] and the secondary indicator shows.
//! Otherwise the snap is dropped, the primary crosshair returns to the dummy
//! at once and the indicator hides.
//!
//! The animation is an explicit [`SnapTween`] sampled each frame. A hit on a
//! different enemy restarts it from wherever the crosshair currently is.

use bevy::prelude::*;
use bevy_math::curve::{Curve, EaseFunction, EasingCurve};
use log::{debug, warn};

use crate::components::{
    AimCamera, AimReference, CrosshairDummy, Enemy, PrimaryCrosshair, SecondaryCrosshair,
    Sighting,
};
use crate::raycast::{RayCaster, SceneRaycast};
use crate::registry::EnemyRegistry;
use crate::settings::SnapSettings;
use crate::vector_math::direction_between;

use super::debug::{DebugRayKind, SightDebugLines};

/// Length of the aim ray segment recorded for debugging.
const AIM_DEBUG_LENGTH: f32 = 100.0;

/// In-flight interpolation of the primary crosshair towards an enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTween {
    target: Entity,
    start: Vec3,
    end: Vec3,
    started_at: f32,
    duration: f32,
    easing: EaseFunction,
}

impl SnapTween {
    /// A tween from `start` to `end` beginning at `started_at` seconds.
    #[must_use]
    pub const fn new(
        target: Entity,
        start: Vec3,
        end: Vec3,
        started_at: f32,
        duration: f32,
        easing: EaseFunction,
    ) -> Self {
        Self {
            target,
            start,
            end,
            started_at,
            duration,
            easing,
        }
    }

    /// Enemy the crosshair is travelling towards.
    #[must_use]
    pub const fn target(&self) -> Entity {
        self.target
    }

    /// Current destination.
    #[must_use]
    pub const fn end(&self) -> Vec3 {
        self.end
    }

    /// Normalised progress in `[0, 1]` at time `now`.
    #[must_use]
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the crosshair has arrived at `now`.
    #[must_use]
    pub fn is_finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased crosshair position at time `now`.
    #[must_use]
    pub fn sample(&self, now: f32) -> Vec3 {
        EasingCurve::new(self.start, self.end, self.easing).sample_clamped(self.progress(now))
    }
}

/// Crosshair state read by rendering.
///
/// `secondary` always tracks the crosshair dummy; `primary` tracks it too
/// unless a snap is active.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CrosshairState {
    primary: Vec3,
    secondary: Vec3,
    indicator_visible: bool,
    snap: Option<SnapTween>,
}

impl CrosshairState {
    /// Position of the primary (snapping) crosshair.
    #[must_use]
    pub const fn primary(&self) -> Vec3 {
        self.primary
    }

    /// Position of the secondary indicator.
    #[must_use]
    pub const fn secondary(&self) -> Vec3 {
        self.secondary
    }

    /// Whether the secondary indicator is shown.
    #[must_use]
    pub const fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    /// The active snap animation, if any.
    #[must_use]
    pub const fn snap(&self) -> Option<&SnapTween> {
        self.snap.as_ref()
    }

    /// Enemy currently snapped to, if any.
    #[must_use]
    pub fn snap_target(&self) -> Option<Entity> {
        self.snap.map(|tween| tween.target)
    }

    /// Moves the crosshair visuals to the unsnapped `baseline`.
    ///
    /// An active snap keeps the primary crosshair where the tween left it.
    pub fn begin_frame(&mut self, baseline: Vec3) {
        self.secondary = baseline;
        if self.snap.is_none() {
            self.primary = baseline;
        }
    }

    /// Animates the primary crosshair towards `target` at `position`.
    ///
    /// Continues the current tween when `target` is unchanged, following the
    /// enemy if it moved; otherwise retargets from the current position.
    pub fn snap_to(
        &mut self,
        target: Entity,
        position: Vec3,
        now: f32,
        duration: f32,
        easing: EaseFunction,
    ) {
        let tween = match self.snap {
            Some(mut tween) if tween.target == target => {
                tween.end = position;
                tween
            }
            _ => SnapTween::new(target, self.primary, position, now, duration, easing),
        };
        self.primary = tween.sample(now);
        self.snap = Some(tween);
        self.indicator_visible = true;
    }

    /// Drops any snap, hides the indicator and puts the primary crosshair
    /// straight back on `baseline`.
    pub fn release(&mut self, baseline: Vec3) {
        self.snap = None;
        self.indicator_visible = false;
        self.primary = baseline;
    }

    /// Drops the snap if it targets `enemy`, which is going away.
    pub fn forget(&mut self, enemy: Entity) {
        if self.snap_target() == Some(enemy) {
            self.snap = None;
            self.indicator_visible = false;
            self.primary = self.secondary;
        }
    }
}

/// Casts the aim ray and updates [`CrosshairState`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
#[expect(
    clippy::too_many_arguments,
    reason = "Bevy systems declare each resource and query they touch."
)]
pub fn resolve_aim_system(
    time: Res<Time>,
    settings: Res<SnapSettings>,
    registry: Res<EnemyRegistry>,
    raycast: SceneRaycast,
    dummies: Query<&Transform, With<CrosshairDummy>>,
    references: Query<&Transform, With<AimReference>>,
    cameras: Query<&Transform, With<AimCamera>>,
    enemies: Query<(&Transform, &Sighting), With<Enemy>>,
    mut crosshair: ResMut<CrosshairState>,
    mut debug_lines: ResMut<SightDebugLines>,
) {
    let (Ok(dummy), Ok(reference), Ok(camera)) =
        (dummies.single(), references.single(), cameras.single())
    else {
        warn!("aim resolution skipped: crosshair dummy, aim reference or camera unavailable");
        return;
    };

    let baseline = dummy.translation;
    crosshair.begin_frame(baseline);

    let aim = direction_between(camera.translation, reference.translation);
    if settings.debug_rays {
        if let Some(direction) = aim {
            debug_lines.push(baseline, direction * AIM_DEBUG_LENGTH, DebugRayKind::Aim);
        }
    }

    let target = aim
        .map(Dir3::new_unchecked)
        .and_then(|direction| raycast.cast_ray(baseline, direction, None))
        .filter(|hit| registry.contains(hit.entity))
        .and_then(|hit| {
            enemies
                .get(hit.entity)
                .ok()
                .filter(|(_, sighting)| sighting.is_seen())
                .map(|(transform, _)| (hit.entity, transform.translation))
        });

    let previous = crosshair.snap_target();
    match target {
        Some((enemy, position)) => {
            if previous != Some(enemy) {
                debug!("crosshair snapping to enemy {enemy}");
            }
            crosshair.snap_to(
                enemy,
                position,
                time.elapsed_secs(),
                settings.snap_duration,
                settings.easing,
            );
        }
        None => {
            if let Some(enemy) = previous {
                debug!("crosshair released from enemy {enemy}");
            }
            crosshair.release(baseline);
        }
    }
}

/// Mirrors [`CrosshairState`] onto host crosshair visuals, if any exist.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn apply_crosshair_visuals_system(
    crosshair: Res<CrosshairState>,
    mut primaries: Query<&mut Transform, (With<PrimaryCrosshair>, Without<SecondaryCrosshair>)>,
    mut secondaries: Query<(&mut Transform, &mut SecondaryCrosshair), Without<PrimaryCrosshair>>,
) {
    for mut transform in &mut primaries {
        transform.translation = crosshair.primary();
    }
    for (mut transform, mut indicator) in &mut secondaries {
        transform.translation = crosshair.secondary();
        indicator.visible = crosshair.indicator_visible();
    }
}

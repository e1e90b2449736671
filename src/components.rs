//! ECS component types used by the targeting systems.
//! Includes the enemy capability, its sight flag, and the rig role markers.
use bevy::prelude::*;

/// Whether an enemy currently qualifies for snapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum SightState {
    /// Clear line of sight, in range and inside the engagement cone.
    Seen,
    /// Any qualifying condition failed, or the enemy was never evaluated.
    #[default]
    Unseen,
}

/// Capability marking an entity as a snap target.
///
/// Adding it also inserts the enemy's [`Sighting`] flag and marker slot. The
/// targeting plugin gives the entity a sphere [`crate::Collider`] if none was
/// supplied, sized by `snap_collider_radius` or the settings default.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component, Default)]
#[require(Transform, Sighting, MarkerSlot)]
pub struct Enemy {
    /// Overrides [`crate::SnapSettings::snap_collider_radius`] for this enemy.
    pub snap_collider_radius: Option<f32>,
}

impl Enemy {
    /// An enemy with a custom snap collider radius.
    #[must_use]
    pub const fn with_radius(radius: f32) -> Self {
        Self {
            snap_collider_radius: Some(radius),
        }
    }
}

/// Authoritative sight flag of an enemy.
///
/// Readable by anyone; only the visibility evaluation writes it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component, Default)]
pub struct Sighting(SightState);

impl Sighting {
    /// Current state of the flag.
    #[must_use]
    pub const fn state(self) -> SightState {
        self.0
    }

    /// Shorthand for `state() == SightState::Seen`.
    #[must_use]
    pub const fn is_seen(self) -> bool {
        matches!(self.0, SightState::Seen)
    }

    /// Stores `state`, returning `true` when it differs from the previous one.
    pub(crate) fn set(&mut self, state: SightState) -> bool {
        let changed = self.0 != state;
        self.0 = state;
        changed
    }
}

/// The enemy's live marker entity, if any.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerSlot(pub(crate) Option<Entity>);

impl MarkerSlot {
    /// The marker currently bound to this enemy.
    #[must_use]
    pub const fn marker(self) -> Option<Entity> {
        self.0
    }
}

/// Transient visual shown over an enemy while it is [`SightState::Seen`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapMarker {
    /// Enemy this marker belongs to.
    pub enemy: Entity,
}

/// The player the enemies need line of sight to.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Player;

/// Camera the aim ray is derived from.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct AimCamera;

/// Raw, unassisted aim point. Its position is the unsnapped crosshair
/// baseline and its forward axis defines the engagement cone.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CrosshairDummy;

/// Fixed point the aim ray is directed through, relative to the camera.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct AimReference;

/// Optional visual that mirrors the primary crosshair position.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct PrimaryCrosshair;

/// Optional visual that mirrors the secondary indicator.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SecondaryCrosshair {
    /// Whether the indicator should be drawn this frame.
    pub visible: bool,
}

//! Startup verification of the aim rig and settings.
//!
//! Targeting cannot run without exactly one player, aim camera, crosshair
//! dummy and aim reference. Rather than discovering a missing role as a
//! silently idle frame loop, the check runs once in `PostStartup` and
//! returns an error, which Bevy's default error handler turns into a panic.

use std::fmt;

use bevy::prelude::*;
use log::error;
use thiserror::Error;

use crate::components::{AimCamera, AimReference, CrosshairDummy, Player};
use crate::settings::SnapSettings;

/// Entity roles the targeting systems look up every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigRole {
    /// Entity marked [`Player`].
    Player,
    /// Entity marked [`AimCamera`].
    AimCamera,
    /// Entity marked [`CrosshairDummy`].
    CrosshairDummy,
    /// Entity marked [`AimReference`].
    AimReference,
}

impl fmt::Display for RigRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Player => "Player",
            Self::AimCamera => "AimCamera",
            Self::CrosshairDummy => "CrosshairDummy",
            Self::AimReference => "AimReference",
        };
        f.write_str(name)
    }
}

/// Fatal configuration problems detected at startup.
///
/// Also triggered as an event so hosts with a non-panicking error handler
/// can observe it.
#[derive(Event, Debug, Clone, PartialEq, Error)]
pub enum TargetingError {
    /// No entity carries the role's marker component.
    #[error("no entity is marked `{0}`; the targeting rig requires exactly one")]
    MissingRole(RigRole),
    /// More than one entity carries the role's marker component.
    #[error("{count} entities are marked `{role}`; the targeting rig requires exactly one")]
    DuplicateRole {
        /// The over-subscribed role.
        role: RigRole,
        /// How many entities carry it.
        count: usize,
    },
    /// [`SnapSettings::validate`] rejected the configured settings.
    #[error("invalid snap settings: {0}")]
    InvalidSettings(String),
}

/// Checks that exactly one entity fills `role`.
///
/// # Errors
///
/// Returns [`TargetingError::MissingRole`] for zero entities and
/// [`TargetingError::DuplicateRole`] for more than one.
pub const fn check_role(role: RigRole, count: usize) -> Result<(), TargetingError> {
    match count {
        1 => Ok(()),
        0 => Err(TargetingError::MissingRole(role)),
        _ => Err(TargetingError::DuplicateRole { role, count }),
    }
}

/// Verifies the rig roles and settings once startup has spawned the scene.
///
/// # Errors
///
/// Returns the first [`TargetingError`] found after logging it and
/// triggering it as an event.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn verify_targeting_setup_system(
    settings: Res<SnapSettings>,
    players: Query<(), With<Player>>,
    cameras: Query<(), With<AimCamera>>,
    dummies: Query<(), With<CrosshairDummy>>,
    references: Query<(), With<AimReference>>,
    mut commands: Commands,
) -> bevy::ecs::error::Result {
    let outcome = check_role(RigRole::Player, players.iter().count())
        .and_then(|()| check_role(RigRole::AimCamera, cameras.iter().count()))
        .and_then(|()| check_role(RigRole::CrosshairDummy, dummies.iter().count()))
        .and_then(|()| check_role(RigRole::AimReference, references.iter().count()))
        .and_then(|()| {
            settings
                .validate()
                .map_err(|err| TargetingError::InvalidSettings(err.to_string()))
        });

    if let Err(err) = &outcome {
        error!("targeting setup failed: {err}");
        commands.trigger(err.clone());
    }
    outcome?;
    Ok(())
}

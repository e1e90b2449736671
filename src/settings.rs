//! Runtime configuration for the targeting subsystem.
//!
//! [`SnapSettings`] is a Bevy resource read by every targeting system. It can
//! be built in code, left at its defaults, or loaded from a JSON document in
//! which any omitted field keeps its default.

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use bevy_math::curve::EaseFunction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DISTANCE_TO_SNAP, DEFAULT_MAX_BEHIND_ENGAGE_DISTANCE, DEFAULT_SCAN_INTERVAL_SECS,
    DEFAULT_SNAP_COLLIDER_RADIUS, DEFAULT_SNAP_DURATION_SECS, LINE_OF_SIGHT_TOLERANCE,
};

/// How the enemy registry learns about enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMode {
    /// Rescan the world for [`crate::Enemy`] entities every
    /// [`SnapSettings::scan_interval`] seconds, starting on the first frame.
    /// Enemies spawned between scans stay untargetable until the next one.
    #[default]
    Periodic,
    /// Register enemies the moment their [`crate::Enemy`] component is added.
    OnSpawn,
}

/// Errors raised while loading or validating [`SnapSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings document is not valid JSON for [`SnapSettings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the targeting systems cannot work with.
    #[error("invalid setting `{field}` = {value}: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human readable constraint that was violated.
        reason: &'static str,
    },
}

/// Tunables for enemy visibility, discovery and crosshair snapping.
///
/// # Examples
///
/// ```
/// use rail_snap::SnapSettings;
///
/// let settings = SnapSettings::from_json_str(r#"{ "distance_to_snap": 80.0 }"#).unwrap();
/// assert_eq!(settings.distance_to_snap, 80.0);
/// assert_eq!(settings.max_behind_engage_distance, 10.0);
/// ```
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapSettings {
    /// Enemies at or beyond this straight-line distance from the player are
    /// never seen.
    pub distance_to_snap: f32,
    /// Threshold the aim-axis projection of an enemy must exceed.
    pub max_behind_engage_distance: f32,
    /// Seconds between registry scans in [`DiscoveryMode::Periodic`].
    pub scan_interval: f32,
    /// Radius of the sphere collider given to enemies that have none.
    pub snap_collider_radius: f32,
    /// Seconds the primary crosshair takes to reach a new target.
    pub snap_duration: f32,
    /// Allowed gap between sight-ray hit distance and true distance.
    pub line_of_sight_tolerance: f32,
    /// Registry discovery strategy.
    pub discovery: DiscoveryMode,
    /// Collect [`crate::targeting::SightDebugLines`] every frame.
    pub debug_rays: bool,
    /// Easing applied to the snap animation.
    #[serde(skip, default = "default_easing")]
    pub easing: EaseFunction,
}

const fn default_easing() -> EaseFunction {
    EaseFunction::QuadraticOut
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            distance_to_snap: DEFAULT_DISTANCE_TO_SNAP,
            max_behind_engage_distance: DEFAULT_MAX_BEHIND_ENGAGE_DISTANCE,
            scan_interval: DEFAULT_SCAN_INTERVAL_SECS,
            snap_collider_radius: DEFAULT_SNAP_COLLIDER_RADIUS,
            snap_duration: DEFAULT_SNAP_DURATION_SECS,
            line_of_sight_tolerance: LINE_OF_SIGHT_TOLERANCE,
            discovery: DiscoveryMode::default(),
            debug_rays: false,
            easing: default_easing(),
        }
    }
}

impl SnapSettings {
    /// Parses settings from a JSON document and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON or unknown fields
    /// and [`SettingsError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every numeric field against the range the systems rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as [`SettingsError::Invalid`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("distance_to_snap", self.distance_to_snap)?;
        finite(
            "max_behind_engage_distance",
            self.max_behind_engage_distance,
        )?;
        positive("scan_interval", self.scan_interval)?;
        non_negative("snap_collider_radius", self.snap_collider_radius)?;
        non_negative("snap_duration", self.snap_duration)?;
        positive("line_of_sight_tolerance", self.line_of_sight_tolerance)?;
        Ok(())
    }

    /// The scan interval as a [`Duration`], clamped to be non-negative.
    #[must_use]
    pub fn scan_period(&self) -> Duration {
        Duration::from_secs_f32(self.scan_interval.max(0.0))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            value,
            reason: "must not be negative",
        })
    }
}

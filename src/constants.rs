//! Targeting tunables shared across systems.
//!
//! These are the defaults backing [`crate::settings::SnapSettings`]. Hosts
//! override them through the resource rather than editing the constants.

/// Maximum straight-line distance at which an enemy may be snapped to.
pub const DEFAULT_DISTANCE_TO_SNAP: f32 = 125.0;
/// Minimum projection of an enemy onto the aim axis, in world units.
///
/// Enemies behind the crosshair, or too far off to the side, project below
/// this value and are never eligible.
pub const DEFAULT_MAX_BEHIND_ENGAGE_DISTANCE: f32 = 10.0;
/// Seconds between enemy registry scans in periodic discovery mode.
pub const DEFAULT_SCAN_INTERVAL_SECS: f32 = 3.0;
/// Radius of the sphere collider given to enemies that lack one.
pub const DEFAULT_SNAP_COLLIDER_RADIUS: f32 = 2.6;
/// Seconds the primary crosshair takes to travel onto a target.
pub const DEFAULT_SNAP_DURATION_SECS: f32 = 0.2;
/// Allowed gap between the sight ray's first hit and the true distance to
/// the player. Anything larger means the ray grazed intervening geometry.
pub const LINE_OF_SIGHT_TOLERANCE: f32 = 2.0;

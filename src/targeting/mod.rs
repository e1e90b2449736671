//! Per-frame target acquisition systems.
//!
//! This module re-exports the plugin and the systems it schedules. Within a
//! frame they run in [`TargetingSet`] order: registry discovery, visibility
//! evaluation, aim resolution, then marker upkeep.

mod aim;
mod debug;
mod lifecycle;
mod markers;
mod plugin;
mod rig;
mod visibility;

pub use aim::{
    apply_crosshair_visuals_system, resolve_aim_system, CrosshairState, SnapTween,
};
pub use debug::{DebugRay, DebugRayKind, SightDebugLines};
pub use lifecycle::{
    attach_missing_snap_colliders_system, attach_snap_collider, release_removed_enemy,
};
pub use markers::sync_markers_system;
pub use plugin::{SnapPlugin, TargetingSet};
pub use rig::{check_role, verify_targeting_setup_system, RigRole, TargetingError};
pub use visibility::{
    assess_sight, evaluate_visibility_system, SightChanged, SightQuery, SightVerdict,
};

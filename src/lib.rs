//! Aim-assist target acquisition for an on-rails shooter.
//!
//! Enemies are discovered into an [`EnemyRegistry`], flagged
//! [`SightState::Seen`] when they have line of sight to the player, are in
//! range and lie ahead of the crosshair, and the primary crosshair eases onto
//! a seen enemy that the aim ray strikes. [`SnapPlugin`] wires it all into a
//! Bevy app.
pub mod components;
pub mod constants;
pub mod demo;
pub mod logging;
pub mod raycast;
pub mod registry;
pub mod settings;
pub mod targeting;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use components::{
    AimCamera, AimReference, CrosshairDummy, Enemy, MarkerSlot, Player, PrimaryCrosshair,
    SecondaryCrosshair, SightState, Sighting, SnapMarker,
};
pub use demo::{DemoScenePlugin, DemoStats, Strafe};
pub use logging::init as init_logging;
pub use raycast::{nearest_hit, Collider, ColliderSet, RayCaster, RayHit, SceneRaycast};
pub use registry::{register_spawned_enemy, scan_enemies_system, EnemyRegistry, ScanSchedule};
pub use settings::{DiscoveryMode, SettingsError, SnapSettings};
pub use targeting::{
    assess_sight, check_role, CrosshairState, DebugRay, DebugRayKind, RigRole, SightChanged,
    SightDebugLines, SightQuery, SightVerdict, SnapPlugin, SnapTween, TargetingError,
    TargetingSet,
};
pub use vector_math::{aim_axis_projection, direction_between};

pub mod prelude {
    //! Prelude exports for hosts embedding the targeting plugin.
    //!
    //! ```rust,no_run
    //! use rail_snap::prelude::*;
    //! ```

    pub use crate::{
        AimCamera, AimReference, Collider, CrosshairDummy, CrosshairState, DiscoveryMode, Enemy,
        Player, PrimaryCrosshair, SecondaryCrosshair, SightChanged, SightState, Sighting,
        SnapPlugin, SnapSettings, TargetingSet,
    };
}

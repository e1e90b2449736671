//! Utility helpers for tests.
//!
//! Scene builders for the aim rig and a fixed-step clock so scan cadence and
//! snap animation can be asserted frame by frame.

pub mod clock;
pub mod scene;

pub use clock::{advance, install_fixed_step, FRAME};
pub use scene::{spawn_enemy, spawn_rig, spawn_wall, RigEntities, RigLayout};

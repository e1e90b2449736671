//! Deterministic frame stepping.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

/// Frame length used by the integration tests.
///
/// Long enough that scan intervals are a round number of frames, short
/// enough to stay under the virtual clock's per-frame delta clamp.
pub const FRAME: Duration = Duration::from_millis(100);

/// Makes every `app.update()` advance time by exactly `frame`.
///
/// The first update still has a zero delta, so update `n` (counting from
/// zero) runs at `n * frame`.
pub fn install_fixed_step(app: &mut App, frame: Duration) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
}

/// Runs `frames` updates.
pub fn advance(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}

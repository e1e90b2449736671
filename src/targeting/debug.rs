//! Diagnostic ray segments for an optional debug renderer.

use bevy::prelude::*;

/// What a [`DebugRay`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugRayKind {
    /// Sight ray of an enemy that qualified this frame (drawn green).
    Qualified,
    /// Sight ray of an enemy that did not qualify (drawn red).
    Rejected,
    /// The aim ray (drawn blue).
    Aim,
}

/// A ray segment recorded for visualisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRay {
    /// Start of the segment.
    pub origin: Vec3,
    /// Offset from `origin` to the segment end.
    pub direction: Vec3,
    /// Colour category.
    pub kind: DebugRayKind,
}

/// Rays recorded during the current frame.
///
/// Only filled when [`crate::SnapSettings::debug_rays`] is enabled; cleared
/// at the start of every visibility pass either way.
#[derive(Resource, Debug, Default, Clone)]
pub struct SightDebugLines {
    rays: Vec<DebugRay>,
}

impl SightDebugLines {
    /// Rays recorded this frame, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &DebugRay> + '_ {
        self.rays.iter()
    }

    /// Number of recorded rays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub(crate) fn push(&mut self, origin: Vec3, direction: Vec3, kind: DebugRayKind) {
        self.rays.push(DebugRay {
            origin,
            direction,
            kind,
        });
    }

    pub(crate) fn clear(&mut self) {
        self.rays.clear();
    }
}

//! Basic vector math helpers used by the targeting rules.
//! Small helpers for sight directions and aim-axis projections.
use glam::Vec3;

/// Returns the unit vector pointing from `from` towards `to`.
///
/// Returns `None` when the points coincide or either is not finite, since no
/// direction can be derived.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use rail_snap::vector_math::direction_between;
/// let dir = direction_between(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0)).unwrap();
/// assert!((dir.z + 1.0).abs() < f32::EPSILON);
/// assert!(direction_between(Vec3::ONE, Vec3::ONE).is_none());
/// ```
#[must_use]
pub fn direction_between(from: Vec3, to: Vec3) -> Option<Vec3> {
    let offset = to - from;
    if !offset.is_finite() {
        return None;
    }
    offset.try_normalize()
}

/// Projects the offset from `origin` to `point` onto `forward`.
///
/// `forward` is expected to be normalised; the result is then the signed
/// distance of `point` along the aim axis. Points behind `origin` yield a
/// negative value.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use rail_snap::aim_axis_projection;
/// let ahead = aim_axis_projection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(3.0, 0.0, -15.0));
/// assert!((ahead - 15.0).abs() < 1e-6);
///
/// let behind = aim_axis_projection(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 8.0));
/// assert!(behind < 0.0);
/// ```
#[must_use]
pub fn aim_axis_projection(origin: Vec3, forward: Vec3, point: Vec3) -> f32 {
    forward.dot(point - origin)
}

//! Immediate-mode ray casting against simple colliders.
//!
//! Targeting only needs "nearest hit along a ray", so the scene is described
//! by [`Collider`] shapes attached to entities with a [`Transform`]. The
//! [`SceneRaycast`] system parameter casts against those directly; the
//! [`RayCaster`] trait lets tests and other hosts substitute their own
//! physics.
//!
//! A ray whose origin lies inside a collider does not report that collider.
//! Sight rays start at the enemy's own position, so its snap sphere would
//! otherwise always be the first hit.

use bevy::ecs::system::SystemParam;
use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::prelude::*;

/// Collision shape used for ray queries.
///
/// Shapes are centred on the entity's translation. Rotation and scale are
/// ignored, so cuboids are axis aligned.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum Collider {
    /// Sphere of the given radius.
    Sphere {
        /// Sphere radius in world units.
        radius: f32,
    },
    /// Axis-aligned box with the given half extents.
    Cuboid {
        /// Half of the box size along each axis.
        half_extents: Vec3,
    },
}

impl Collider {
    /// A sphere collider.
    #[must_use]
    pub const fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// An axis-aligned box collider from its full size.
    #[must_use]
    pub fn cuboid(size: Vec3) -> Self {
        Self::Cuboid {
            half_extents: size * 0.5,
        }
    }

    /// Whether `point` lies inside the shape placed at `centre`.
    #[must_use]
    pub fn contains(&self, centre: Vec3, point: Vec3) -> bool {
        match *self {
            Self::Sphere { radius } => centre.distance_squared(point) <= radius * radius,
            Self::Cuboid { half_extents } => (point - centre).abs().cmple(half_extents).all(),
        }
    }

    /// Distance along `cast` to the shape placed at `centre`, if it is hit.
    fn intersect(&self, centre: Vec3, cast: &RayCast3d) -> Option<f32> {
        match *self {
            Self::Sphere { radius } => {
                cast.sphere_intersection_at(&BoundingSphere::new(centre, radius))
            }
            Self::Cuboid { half_extents } => {
                cast.aabb_intersection_at(&Aabb3d::new(centre, half_extents))
            }
        }
    }
}

/// Nearest intersection reported by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entity owning the struck collider.
    pub entity: Entity,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Capability to cast a ray into the scene and report the nearest hit.
#[cfg_attr(test, mockall::automock)]
pub trait RayCaster {
    /// Casts from `origin` along `direction`, skipping `exclude` if given.
    fn cast_ray(&self, origin: Vec3, direction: Dir3, exclude: Option<Entity>) -> Option<RayHit>;
}

/// Finds the nearest collider hit among `colliders`.
///
/// Colliders containing `origin` and the `exclude` entity are skipped. Ties
/// keep the first collider encountered.
pub fn nearest_hit<'a, I>(
    colliders: I,
    origin: Vec3,
    direction: Dir3,
    exclude: Option<Entity>,
) -> Option<RayHit>
where
    I: IntoIterator<Item = (Entity, Vec3, &'a Collider)>,
{
    let cast = RayCast3d::new(origin, direction, f32::MAX);
    let mut nearest: Option<(Entity, f32)> = None;

    for (entity, centre, collider) in colliders {
        if Some(entity) == exclude || collider.contains(centre, origin) {
            continue;
        }
        let Some(distance) = collider.intersect(centre, &cast) else {
            continue;
        };
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((entity, distance));
        }
    }

    nearest.map(|(entity, distance)| RayHit {
        entity,
        distance,
        point: origin + direction * distance,
    })
}

/// System parameter casting rays against every [`Collider`] in the world.
///
/// ```ignore
/// fn probe(raycast: SceneRaycast) {
///     let hit = raycast.cast_ray(Vec3::ZERO, Dir3::NEG_Z, None);
/// }
/// ```
#[derive(SystemParam)]
pub struct SceneRaycast<'w, 's> {
    colliders: Query<'w, 's, (Entity, &'static Transform, &'static Collider)>,
}

impl RayCaster for SceneRaycast<'_, '_> {
    fn cast_ray(&self, origin: Vec3, direction: Dir3, exclude: Option<Entity>) -> Option<RayHit> {
        nearest_hit(
            self.colliders
                .iter()
                .map(|(entity, transform, collider)| (entity, transform.translation, collider)),
            origin,
            direction,
            exclude,
        )
    }
}

/// Owned collider list for casting outside the ECS.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<(Entity, Vec3, Collider)>,
}

impl ColliderSet {
    /// Adds a collider centred at `centre`.
    pub fn insert(&mut self, entity: Entity, centre: Vec3, collider: Collider) {
        self.colliders.push((entity, centre, collider));
    }

    /// Number of colliders in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the set holds no colliders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl RayCaster for ColliderSet {
    fn cast_ray(&self, origin: Vec3, direction: Dir3, exclude: Option<Entity>) -> Option<RayHit> {
        nearest_hit(
            self.colliders
                .iter()
                .map(|(entity, centre, collider)| (*entity, *centre, collider)),
            origin,
            direction,
            exclude,
        )
    }
}

//! Enemy registry: the working set evaluated every frame.
//!
//! The registry is an insertion-ordered set keyed by entity identity, so a
//! rescan never duplicates an enemy. Membership is the targeting capability:
//! an aim-ray hit only snaps when the struck entity is registered.
//!
//! Discovery follows [`DiscoveryMode`]: either a periodic scan on a repeating
//! timer (first scan on the first frame) or registration as soon as the
//! [`Enemy`] component is added. Deregistration is always immediate.

mod schedule;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use hashbrown::HashSet;
use log::debug;

use crate::components::Enemy;
use crate::settings::{DiscoveryMode, SnapSettings};

pub use schedule::ScanSchedule;

/// Ordered set of enemies considered by the targeting systems.
#[derive(Resource, Debug, Default, Clone)]
pub struct EnemyRegistry {
    order: Vec<Entity>,
    members: HashSet<Entity>,
}

impl EnemyRegistry {
    /// Adds `enemy`, returning `false` if it was already registered.
    pub fn register(&mut self, enemy: Entity) -> bool {
        if !self.members.insert(enemy) {
            return false;
        }
        self.order.push(enemy);
        true
    }

    /// Removes `enemy`, returning `false` if it was not registered.
    pub fn deregister(&mut self, enemy: Entity) -> bool {
        if !self.members.remove(&enemy) {
            return false;
        }
        self.order.retain(|&registered| registered != enemy);
        true
    }

    /// Registers every entity yielded by a scan, returning how many were new.
    pub fn absorb_scan(&mut self, found: impl IntoIterator<Item = Entity>) -> usize {
        found
            .into_iter()
            .filter(|&enemy| self.register(enemy))
            .count()
    }

    /// Whether `enemy` is registered.
    #[must_use]
    pub fn contains(&self, enemy: Entity) -> bool {
        self.members.contains(&enemy)
    }

    /// Registered enemies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered enemies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no enemies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Rescans the world for enemies when the scan timer fires.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn scan_enemies_system(
    time: Res<Time>,
    settings: Res<SnapSettings>,
    mut schedule: ResMut<ScanSchedule>,
    mut registry: ResMut<EnemyRegistry>,
    enemies: Query<Entity, With<Enemy>>,
) {
    if settings.discovery != DiscoveryMode::Periodic {
        return;
    }
    schedule.set_period(settings.scan_period());
    if !schedule.tick(time.delta()) {
        return;
    }
    let added = registry.absorb_scan(enemies.iter());
    debug!(
        "enemy scan registered {added} new enemies ({} total)",
        registry.len()
    );
}

/// Registers enemies on spawn when discovery is [`DiscoveryMode::OnSpawn`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn register_spawned_enemy(
    add: On<Add, Enemy>,
    settings: Res<SnapSettings>,
    mut registry: ResMut<EnemyRegistry>,
) {
    if settings.discovery == DiscoveryMode::OnSpawn && registry.register(add.entity) {
        debug!("registered enemy {} on spawn", add.entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entities<const N: usize>() -> [Entity; N] {
        let mut world = World::new();
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn repeated_scans_do_not_duplicate() {
        let [a, b] = entities();
        let mut registry = EnemyRegistry::default();
        assert_eq!(registry.absorb_scan([a, b]), 2);
        assert_eq!(registry.absorb_scan([a, b]), 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn deregister_preserves_order_of_the_rest() {
        let [a, b, c] = entities();
        let mut registry = EnemyRegistry::default();
        registry.absorb_scan([a, b, c]);
        assert!(registry.deregister(b));
        assert!(!registry.deregister(b));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![a, c]);
        assert!(!registry.contains(b));
    }

    #[rstest]
    #[case::periodic(DiscoveryMode::Periodic, false)]
    #[case::on_spawn(DiscoveryMode::OnSpawn, true)]
    fn spawn_observer_respects_mode(#[case] mode: DiscoveryMode, #[case] registered: bool) {
        let mut world = World::new();
        world.insert_resource(SnapSettings {
            discovery: mode,
            ..SnapSettings::default()
        });
        world.init_resource::<EnemyRegistry>();
        world.add_observer(register_spawned_enemy);

        let enemy = world.spawn(Enemy::default()).id();

        assert_eq!(world.resource::<EnemyRegistry>().contains(enemy), registered);
    }
}

//! Projectile компоненты + lifetime cleanup

use bevy::prelude::*;

/// Снаряд пушки
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    /// Кто выстрелил
    pub shooter: Entity,
}

/// Коллайдеры, с которыми этот projectile не сталкивается (коллайдеры стрелявшей пушки)
///
/// Читается ShooterCollisionFilter (Rapier physics hooks).
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct IgnoredColliders(pub Vec<Entity>);

impl IgnoredColliders {
    pub fn contains(&self, entity: Entity) -> bool {
        self.0.contains(&entity)
    }
}

/// Despawn через заданное время
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct DespawnAfter {
    pub timer: Timer,
}

impl DespawnAfter {
    pub fn new(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

/// System: despawn projectile по истечению lifetime
pub fn despawn_expired_projectiles(
    mut commands: Commands,
    mut query: Query<(Entity, &mut DespawnAfter)>,
    time: Res<Time>,
) {
    for (entity, mut despawn_after) in query.iter_mut() {
        despawn_after.timer.tick(time.delta());

        if despawn_after.timer.finished() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_despawn_after_timer() {
        let mut despawn_after = DespawnAfter::new(1.5);
        despawn_after.timer.tick(Duration::from_secs_f32(1.0));
        assert!(!despawn_after.timer.finished());

        despawn_after.timer.tick(Duration::from_secs_f32(0.6));
        assert!(despawn_after.timer.finished());
    }

    #[test]
    fn test_ignored_colliders_contains() {
        let base = Entity::from_raw(3);
        let barrel = Entity::from_raw(4);
        let ignored = IgnoredColliders(vec![base, barrel]);

        assert!(ignored.contains(base));
        assert!(ignored.contains(barrel));
        assert!(!ignored.contains(Entity::from_raw(99)));
    }
}

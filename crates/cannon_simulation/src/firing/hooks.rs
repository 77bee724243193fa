//! Rapier physics hooks: снаряд не сталкивается со своей пушкой
//!
//! Projectile спавнится с ActiveHooks::FILTER_CONTACT_PAIRS | FILTER_INTERSECTION_PAIR
//! и списком IgnoredColliders. Rapier вызывает hook для каждой пары,
//! где хотя бы у одного коллайдера включены hooks.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::projectile::IgnoredColliders;

#[derive(SystemParam)]
pub struct ShooterCollisionFilter<'w, 's> {
    ignored: Query<'w, 's, &'static IgnoredColliders>,
}

impl ShooterCollisionFilter<'_, '_> {
    fn suppressed(&self, a: Entity, b: Entity) -> bool {
        pair_suppressed(self.ignored.get(a).ok(), self.ignored.get(b).ok(), a, b)
    }
}

/// Пара (a, b) подавлена, если любая сторона держит другую в своём IgnoredColliders
pub fn pair_suppressed(
    a_ignored: Option<&IgnoredColliders>,
    b_ignored: Option<&IgnoredColliders>,
    a: Entity,
    b: Entity,
) -> bool {
    a_ignored.is_some_and(|list| list.contains(b)) || b_ignored.is_some_and(|list| list.contains(a))
}

impl BevyPhysicsHooks for ShooterCollisionFilter<'_, '_> {
    fn filter_contact_pair(&self, context: PairFilterContextView) -> Option<SolverFlags> {
        if self.suppressed(context.collider1(), context.collider2()) {
            None
        } else {
            Some(SolverFlags::COMPUTE_IMPULSES)
        }
    }

    fn filter_intersection_pair(&self, context: PairFilterContextView) -> bool {
        !self.suppressed(context.collider1(), context.collider2())
    }
}

//! Firing: cooldown-gated выстрел Rapier projectile из muzzle
//!
//! ECS ответственность:
//! - Cooldown state (CannonWeapon::next_fire_time)
//! - Spawn projectile (RigidBody + Collider + Velocity), lifetime cleanup
//! - Подавление коллизий снаряда с собственной пушкой (ShooterCollisionFilter)
//!
//! Presentation ответственность (вне крейта):
//! - Меш снаряда, VFX, проигрывание звука по FireSfxRequested

use bevy::prelude::*;

pub mod events;
pub mod hooks;
pub mod projectile;
pub mod systems;

pub use events::{CannonFired, FireCommand, FireSfxRequested};
pub use hooks::{pair_suppressed, ShooterCollisionFilter};
pub use projectile::{despawn_expired_projectiles, DespawnAfter, IgnoredColliders, Projectile};
pub use systems::{prepare_shot, process_fire_commands, Shot};

use crate::CannonSet;

pub struct FiringPlugin;

impl Plugin for FiringPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FireCommand>()
            .add_event::<CannonFired>()
            .add_event::<FireSfxRequested>()
            .register_type::<crate::components::CannonWeapon>()
            .register_type::<Projectile>()
            .register_type::<IgnoredColliders>()
            .register_type::<DespawnAfter>();

        app.add_systems(Update, process_fire_commands.in_set(CannonSet::Fire));
        app.add_systems(Update, despawn_expired_projectiles.in_set(CannonSet::Cleanup));
    }
}

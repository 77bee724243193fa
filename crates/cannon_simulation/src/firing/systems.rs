//! Fire control: FireCommand → cooldown gate → Rapier projectile

use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy_rapier3d::prelude::*;

use super::events::{CannonFired, FireCommand, FireSfxRequested};
use super::projectile::{DespawnAfter, IgnoredColliders, Projectile};
use crate::components::{CannonWeapon, FireRejected, FireSfx, ProjectileTemplate, TurretRig};

/// Параметры одного выстрела (после всех проверок)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub template: ProjectileTemplate,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
}

/// Проверки + расчёт выстрела. Не меняет state (cooldown стартует вызывающий).
///
/// Порядок проверок: cooldown → prefab → muzzle.
pub fn prepare_shot(
    weapon: &CannonWeapon,
    muzzle: Option<GlobalTransform>,
    now: f64,
) -> Result<Shot, FireRejected> {
    weapon.ready_at(now)?;

    let template = weapon.projectile.ok_or(FireRejected::NoProjectile)?;
    let muzzle = muzzle.ok_or(FireRejected::NoMuzzle)?;

    let forward = muzzle.forward().as_vec3();
    let (_, rotation, position) = muzzle.to_scale_rotation_translation();

    Ok(Shot {
        template,
        position: weapon.spawn_point(position, forward),
        rotation,
        velocity: weapon.launch_velocity(forward),
    })
}

/// System: обработка FireCommand
///
/// 1. Cooldown / prefab / muzzle проверки (отказ → debug лог, no-op)
/// 2. next_fire_time = now + cooldown
/// 3. Spawn projectile: Transform + RigidBody::Dynamic + Collider + Velocity
/// 4. IgnoredColliders = все коллайдеры тела пушки (база или сама пушка + потомки)
/// 5. DespawnAfter если lifetime > 0
/// 6. CannonFired (+ FireSfxRequested)
pub fn process_fire_commands(
    mut commands: Commands,
    mut fire_events: EventReader<FireCommand>,
    mut cannons: Query<(&TurretRig, &mut CannonWeapon, Option<&FireSfx>)>,
    transform_helper: TransformHelper,
    children: Query<&Children>,
    colliders: Query<(), With<Collider>>,
    time: Res<Time>,
    mut fired_events: EventWriter<CannonFired>,
    mut sfx_events: EventWriter<FireSfxRequested>,
) {
    let now = time.elapsed_secs_f64();

    for FireCommand { cannon } in fire_events.read().copied() {
        let Ok((rig, mut weapon, fire_sfx)) = cannons.get_mut(cannon) else {
            continue;
        };

        let muzzle = rig
            .muzzle
            .and_then(|muzzle| transform_helper.compute_global_transform(muzzle).ok());

        let shot = match prepare_shot(&weapon, muzzle, now) {
            Ok(shot) => shot,
            Err(reason) => {
                crate::logger::log(&format!("Cannon {:?}: fire rejected ({})", cannon, reason));
                continue;
            }
        };

        weapon.start_cooldown(now);

        let mut projectile = commands.spawn((
            Projectile { shooter: cannon },
            Transform::from_translation(shot.position).with_rotation(shot.rotation),
            RigidBody::Dynamic,
            Collider::ball(shot.template.radius),
            ColliderMassProperties::Mass(shot.template.mass),
            Velocity::linear(shot.velocity),
        ));

        if shot.template.ccd {
            projectile.insert(Ccd::enabled());
        }

        if weapon.ignore_collision_with_cannon {
            let body = rig.base.unwrap_or(cannon);
            let ignored: Vec<Entity> = std::iter::once(body)
                .chain(children.iter_descendants(body))
                .filter(|entity| colliders.contains(*entity))
                .collect();

            projectile.insert((
                IgnoredColliders(ignored),
                ActiveHooks::FILTER_CONTACT_PAIRS | ActiveHooks::FILTER_INTERSECTION_PAIR,
            ));
        }

        if weapon.projectile_life > 0.0 {
            projectile.insert(DespawnAfter::new(weapon.projectile_life));
        }

        let projectile = projectile.id();

        fired_events.write(CannonFired {
            cannon,
            projectile,
            position: shot.position,
            velocity: shot.velocity,
        });

        if let Some(sfx) = fire_sfx {
            sfx_events.write(FireSfxRequested {
                cannon,
                clip: sfx.clip.clone(),
                position: shot.position,
            });
        }

        crate::logger::log_info(&format!(
            "💥 Cannon {:?} fired {:?} at {:?} (v = {:?}, next shot at {:.3}s)",
            cannon, projectile, shot.position, shot.velocity, weapon.next_fire_time
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_prepare_shot_spawns_in_front_of_muzzle() {
        let weapon = CannonWeapon {
            spawn_forward_offset: 0.5,
            muzzle_velocity: 20.0,
            ..default()
        };
        let muzzle = GlobalTransform::from(Transform::from_xyz(0.0, 1.0, -2.0));

        let shot = prepare_shot(&weapon, Some(muzzle), 0.0).unwrap();

        assert!((shot.position - Vec3::new(0.0, 1.0, -2.5)).length() < EPS);
        assert!((shot.velocity - Vec3::new(0.0, 0.0, -20.0)).length() < EPS);
        assert!(shot.rotation.abs_diff_eq(Quat::IDENTITY, EPS));
    }

    #[test]
    fn test_prepare_shot_follows_muzzle_rotation() {
        let weapon = CannonWeapon {
            spawn_forward_offset: 0.0,
            muzzle_velocity: 10.0,
            ..default()
        };
        // Ствол задран на 90° — forward смотрит вверх
        let muzzle = GlobalTransform::from(
            Transform::from_xyz(3.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        );

        let shot = prepare_shot(&weapon, Some(muzzle), 0.0).unwrap();

        assert!((shot.position - Vec3::new(3.0, 0.0, 0.0)).length() < EPS);
        assert!((shot.velocity - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_prepare_shot_rejections() {
        let muzzle = Some(GlobalTransform::IDENTITY);

        let mut cooling = CannonWeapon::default();
        cooling.start_cooldown(1.0);
        assert!(matches!(
            prepare_shot(&cooling, muzzle, 1.1),
            Err(FireRejected::CoolingDown { .. })
        ));

        let no_prefab = CannonWeapon {
            projectile: None,
            ..default()
        };
        assert_eq!(prepare_shot(&no_prefab, muzzle, 0.0), Err(FireRejected::NoProjectile));

        let weapon = CannonWeapon::default();
        assert_eq!(prepare_shot(&weapon, None, 0.0), Err(FireRejected::NoMuzzle));
    }
}

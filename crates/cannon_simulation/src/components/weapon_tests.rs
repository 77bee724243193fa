//! Tests for CannonWeapon component.

#[cfg(test)]
mod tests {
    use super::super::weapon::*;
    use bevy::prelude::*;

    #[test]
    fn test_weapon_defaults() {
        let weapon = CannonWeapon::default();
        assert!(weapon.projectile.is_some());
        assert_eq!(weapon.muzzle_velocity, 30.0);
        assert_eq!(weapon.fire_cooldown, 0.3);
        assert_eq!(weapon.projectile_life, 10.0);
        assert!(weapon.ignore_collision_with_cannon);
        assert!(weapon.ready_at(0.0).is_ok());
    }

    #[test]
    fn test_weapon_cooldown_gate() {
        let mut weapon = CannonWeapon {
            fire_cooldown: 0.5,
            ..default()
        };

        weapon.start_cooldown(2.0);
        assert_eq!(weapon.next_fire_time, 2.5);

        // Внутри окна — отказ
        let rejected = weapon.ready_at(2.2);
        assert!(matches!(rejected, Err(FireRejected::CoolingDown { .. })));

        // Ровно на границе и позже — можно
        assert!(weapon.ready_at(2.5).is_ok());
        assert!(weapon.ready_at(3.0).is_ok());
    }

    #[test]
    fn test_spawn_point_clamps_negative_offset() {
        let mut weapon = CannonWeapon::default();
        let muzzle = Vec3::new(1.0, 2.0, 3.0);
        let forward = Vec3::NEG_Z;

        weapon.spawn_forward_offset = 0.5;
        assert_eq!(weapon.spawn_point(muzzle, forward), Vec3::new(1.0, 2.0, 2.5));

        weapon.spawn_forward_offset = -4.0;
        assert_eq!(weapon.spawn_point(muzzle, forward), muzzle);
    }

    #[test]
    fn test_launch_velocity_follows_forward() {
        let weapon = CannonWeapon {
            muzzle_velocity: 12.0,
            ..default()
        };
        assert_eq!(weapon.launch_velocity(Vec3::Y), Vec3::new(0.0, 12.0, 0.0));
    }

    #[test]
    fn test_fire_rejected_messages() {
        let err = FireRejected::CoolingDown { remaining: 0.25 };
        assert_eq!(err.to_string(), "cooling down for 0.250s more");
        assert_eq!(FireRejected::NoMuzzle.to_string(), "muzzle reference is missing");
    }
}

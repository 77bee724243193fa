//! Чистая математика наведения: slider t → мировая X / угол elevation
//!
//! Никаких ECS зависимостей — тестируется напрямую.

use bevy::prelude::*;
use crate::components::{ElevationAxis, TurretSettings};

/// Линейная интерполяция с клампом t в [0, 1].
///
/// Форма `a(1-t) + bt` даёт ровно `a` при t = 0 и ровно `b` при t = 1.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a * (1.0 - t) + b * t
}

/// Обратная интерполяция (клампится в [0, 1], 0 при вырожденном диапазоне)
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Мировая X базы для слайдера t
pub fn horizontal_x(settings: &TurretSettings, t: f32) -> f32 {
    lerp(settings.min_x, settings.max_x, t)
}

/// Нормализованное положение слайдера для текущей мировой X (startup sync)
pub fn horizontal_t(settings: &TurretSettings, x: f32) -> f32 {
    inverse_lerp(settings.min_x, settings.max_x, x)
}

/// Угол elevation (градусы) для слайдера t, с учётом инверсии
pub fn elevation_angle(settings: &TurretSettings, t: f32) -> f32 {
    let t = if settings.invert_vertical_slider { 1.0 - t } else { t };
    lerp(settings.min_elevation, settings.max_elevation, t)
}

/// Локальный поворот pivot: rest pose × поворот на `angle_deg` вокруг локальной оси.
///
/// Bevy right-handed: положительный угол вокруг X поднимает forward (-Z) вверх.
pub fn elevation_rotation(rest: Quat, axis: ElevationAxis, angle_deg: f32) -> Quat {
    rest * Quat::from_axis_angle(axis.to_vec3(), angle_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_lerp_exact_endpoints() {
        let ranges = [(-10.0, 10.0), (0.1, 0.7), (-3.3, 1234.567), (5.0, 5.0)];
        for (a, b) in ranges {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(lerp(-10.0, 10.0, -0.5), -10.0);
        assert_eq!(lerp(-10.0, 10.0, 3.0), 10.0);
        assert!((lerp(-10.0, 10.0, 0.25) - -5.0).abs() < EPS);
    }

    #[test]
    fn test_horizontal_matches_lerp_across_range() {
        let settings = TurretSettings {
            min_x: -4.0,
            max_x: 12.0,
            ..default()
        };

        for step in 0..=20 {
            let t = step as f32 / 20.0;
            let expected = -4.0 + 16.0 * t;
            assert!((horizontal_x(&settings, t) - expected).abs() < EPS, "t = {}", t);
        }
        assert_eq!(horizontal_x(&settings, 0.0), -4.0);
        assert_eq!(horizontal_x(&settings, 1.0), 12.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(-10.0, 10.0, 0.0), 0.5);
        assert_eq!(inverse_lerp(-10.0, 10.0, 25.0), 1.0);
        assert_eq!(inverse_lerp(-10.0, 10.0, -25.0), 0.0);
        // Вырожденный диапазон
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_horizontal_t_roundtrip_inside_range() {
        let settings = TurretSettings::default();
        let t = horizontal_t(&settings, 5.0);
        assert!((t - 0.75).abs() < EPS);
        assert!((horizontal_x(&settings, t) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_elevation_inversion_swaps_endpoints() {
        let mut settings = TurretSettings {
            min_elevation: 5.0,
            max_elevation: 45.0,
            ..default()
        };

        assert_eq!(elevation_angle(&settings, 0.0), 5.0);
        assert_eq!(elevation_angle(&settings, 1.0), 45.0);

        settings.invert_vertical_slider = true;
        assert_eq!(elevation_angle(&settings, 0.0), 45.0);
        assert_eq!(elevation_angle(&settings, 1.0), 5.0);
    }

    #[test]
    fn test_elevation_rotation_about_x_raises_forward() {
        let rotation = elevation_rotation(Quat::IDENTITY, ElevationAxis::X, 90.0);
        let forward = rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::Y).length() < EPS, "forward = {:?}", forward);
    }

    #[test]
    fn test_elevation_rotation_composes_with_rest_pose() {
        // Rest pose: пушка развёрнута на 90° вокруг Y
        let rest = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let rotation = elevation_rotation(rest, ElevationAxis::X, 30.0);

        let expected = rest * Quat::from_rotation_x(30f32.to_radians());
        assert!(rotation.abs_diff_eq(expected, EPS));

        // Нулевой угол оставляет rest pose как есть
        let untouched = elevation_rotation(rest, ElevationAxis::Z, 0.0);
        assert!(untouched.abs_diff_eq(rest, EPS));
    }

    #[test]
    fn test_elevation_axes() {
        for (axis, unit) in [
            (ElevationAxis::X, Vec3::X),
            (ElevationAxis::Y, Vec3::Y),
            (ElevationAxis::Z, Vec3::Z),
        ] {
            let rotation = elevation_rotation(Quat::IDENTITY, axis, 45.0);
            let (rot_axis, angle) = rotation.to_axis_angle();
            assert!((rot_axis - unit).length() < EPS);
            assert!((angle - 45f32.to_radians()).abs() < EPS);
        }
    }
}

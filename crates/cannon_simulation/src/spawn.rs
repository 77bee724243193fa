//! Spawn helper: пушка целиком (база → pivot → ствол + muzzle) и два слайдера
//!
//! Hierarchy:
//! ```text
//! Cannon (база, KinematicPositionBased, cuboid collider)
//! └── BarrelPivot (поворот elevation)
//!     ├── Barrel (cuboid collider вдоль -Z)
//!     └── Muzzle (конец ствола, forward = -Z)
//! ```

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{Cannon, FireSfx, KeyboardControlled, Slider, SliderBindings, TurretRig};
use crate::config::CannonConfig;

/// Размеры пушки (метры)
pub mod dimensions {
    /// Полуразмеры корпуса (x, y, z)
    pub const BODY_HALF_EXTENTS: (f32, f32, f32) = (1.0, 0.5, 0.75);
    /// Высота pivot над центром базы
    pub const BARREL_PIVOT_HEIGHT: f32 = 0.75;
    /// Длина ствола от pivot до muzzle
    pub const BARREL_LENGTH: f32 = 2.5;
    /// Полутолщина ствола
    pub const BARREL_HALF_WIDTH: f32 = 0.15;
}

/// Entity ids собранной пушки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannonParts {
    pub cannon: Entity,
    pub barrel_pivot: Entity,
    pub barrel: Entity,
    pub muzzle: Entity,
    pub horizontal_slider: Entity,
    pub vertical_slider: Entity,
}

/// Создаёт пушку по конфигу в мировой позиции `position`.
///
/// База = сама пушка (TurretRig.base == cannon).
pub fn spawn_cannon(commands: &mut Commands, config: &CannonConfig, position: Vec3) -> CannonParts {
    use dimensions::*;

    let horizontal_slider = commands.spawn(Slider::default()).id();
    let vertical_slider = commands.spawn(Slider::default()).id();

    let (hx, hy, hz) = BODY_HALF_EXTENTS;
    let cannon = commands
        .spawn((
            Cannon,
            Transform::from_translation(position),
            config.turret_settings(),
            config.weapon(),
            SliderBindings {
                horizontal: Some(horizontal_slider),
                vertical: Some(vertical_slider),
            },
            RigidBody::KinematicPositionBased,
            Collider::cuboid(hx, hy, hz),
        ))
        .id();

    let barrel_pivot = commands
        .spawn((
            Transform::from_xyz(0.0, BARREL_PIVOT_HEIGHT, 0.0),
            ChildOf(cannon),
        ))
        .id();

    let barrel = commands
        .spawn((
            Transform::from_xyz(0.0, 0.0, -BARREL_LENGTH * 0.5),
            Collider::cuboid(BARREL_HALF_WIDTH, BARREL_HALF_WIDTH, BARREL_LENGTH * 0.5),
            ChildOf(barrel_pivot),
        ))
        .id();

    let muzzle = commands
        .spawn((Transform::from_xyz(0.0, 0.0, -BARREL_LENGTH), ChildOf(barrel_pivot)))
        .id();

    let mut cannon_commands = commands.entity(cannon);
    cannon_commands.insert(TurretRig {
        base: Some(cannon),
        barrel_pivot: Some(barrel_pivot),
        muzzle: Some(muzzle),
    });

    if config.controls.keyboard {
        cannon_commands.insert(KeyboardControlled);
    }

    if let Some(clip) = &config.projectile.sfx_clip {
        cannon_commands.insert(FireSfx::new(clip.clone()));
    }

    crate::logger::log_info(&format!(
        "Cannon {:?} spawned at {:?} (pivot {:?}, muzzle {:?})",
        cannon, position, barrel_pivot, muzzle
    ));

    CannonParts {
        cannon,
        barrel_pivot,
        barrel,
        muzzle,
        horizontal_slider,
        vertical_slider,
    }
}

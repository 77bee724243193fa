//! Turret компоненты: ссылки на части пушки, диапазоны наведения, привязки слайдеров

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Пушка — корневой компонент
///
/// Автоматически добавляет настройки, rest pose и привязки через Required Components.
/// Пустой TurretRig при появлении заполняется ссылками на саму пушку (`TurretRig::on_self`).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform, TurretRig, TurretSettings, BarrelRestPose, SliderBindings)]
pub struct Cannon;

/// Ссылки на части пушки (entity hierarchy)
///
/// - `base` — скользит по мировой X
/// - `barrel_pivot` — только локальный поворот elevation
/// - `muzzle` — точка вылета, её forward (-Z) = направление выстрела
///
/// `None` = ссылки нет, соответствующая операция становится no-op.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TurretRig {
    pub base: Option<Entity>,
    pub barrel_pivot: Option<Entity>,
    pub muzzle: Option<Entity>,
}

impl TurretRig {
    /// Все три ссылки указывают на саму пушку (однокомпонентная пушка)
    pub fn on_self(entity: Entity) -> Self {
        Self {
            base: Some(entity),
            barrel_pivot: Some(entity),
            muzzle: Some(entity),
        }
    }
}

/// Ось elevation в локальных координатах pivot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ElevationAxis {
    #[default]
    #[serde(alias = "x")]
    X,
    #[serde(alias = "y")]
    Y,
    #[serde(alias = "z")]
    Z,
}

impl ElevationAxis {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            ElevationAxis::X => Vec3::X,
            ElevationAxis::Y => Vec3::Y,
            ElevationAxis::Z => Vec3::Z,
        }
    }
}

/// Диапазоны наведения
///
/// Инвариант (после `validate`): min_x ≤ max_x, min_elevation ≤ max_elevation
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TurretSettings {
    /// Мировая X при t = 0
    pub min_x: f32,
    /// Мировая X при t = 1
    pub max_x: f32,
    /// Градусы
    pub min_elevation: f32,
    /// Градусы
    pub max_elevation: f32,
    pub elevation_axis: ElevationAxis,
    /// Вертикальный слайдер работает наоборот (t → 1 - t)
    pub invert_vertical_slider: bool,
}

impl Default for TurretSettings {
    fn default() -> Self {
        Self {
            min_x: -10.0,
            max_x: 10.0,
            min_elevation: 0.0,
            max_elevation: 60.0,
            elevation_axis: ElevationAxis::X,
            invert_vertical_slider: false,
        }
    }
}

impl TurretSettings {
    /// Схлопывает перевёрнутые диапазоны: max подтягивается к min.
    ///
    /// Возвращает true если что-то поменялось.
    pub fn validate(&mut self) -> bool {
        let mut corrected = false;

        if self.max_x < self.min_x {
            self.max_x = self.min_x;
            corrected = true;
        }

        if self.max_elevation < self.min_elevation {
            self.max_elevation = self.min_elevation;
            corrected = true;
        }

        corrected
    }
}

/// Исходный локальный поворот barrel pivot (снимается один раз при появлении пушки)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BarrelRestPose {
    pub rotation: Quat,
    pub captured: bool,
}

impl Default for BarrelRestPose {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            captured: false,
        }
    }
}

/// Какие slider entity управляют пушкой
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SliderBindings {
    pub horizontal: Option<Entity>,
    pub vertical: Option<Entity>,
}

/// Маркер: пушка слушает клавиатуру (A/D, W/S, Space)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct KeyboardControlled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_collapses_inverted_ranges() {
        let mut settings = TurretSettings {
            min_x: 5.0,
            max_x: -3.0,
            min_elevation: 20.0,
            max_elevation: 10.0,
            ..default()
        };

        assert!(settings.validate());
        assert_eq!(settings.max_x, 5.0);
        assert_eq!(settings.min_x, 5.0);
        assert_eq!(settings.max_elevation, 20.0);
        assert_eq!(settings.min_elevation, 20.0);
    }

    #[test]
    fn test_validate_keeps_sane_ranges() {
        let mut settings = TurretSettings::default();
        assert!(!settings.validate());
        assert_eq!(settings, TurretSettings::default());
    }

    #[test]
    fn test_rig_on_self() {
        let entity = Entity::from_raw(7);
        let rig = TurretRig::on_self(entity);
        assert_eq!(rig.base, Some(entity));
        assert_eq!(rig.barrel_pivot, Some(entity));
        assert_eq!(rig.muzzle, Some(entity));
    }
}

//! Turret systems: validation, startup sync, применение AimCommand к transform

use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use super::events::AimCommand;
use super::mapping::{elevation_angle, elevation_rotation, horizontal_t, horizontal_x};
use crate::components::{BarrelRestPose, Cannon, Slider, SliderBindings, TurretRig, TurretSettings};

/// System: пушка без ссылок на части управляет сама собой
///
/// TurretRig приходит через required components пустым; если к моменту
/// появления пушки его никто не заполнил — base/pivot/muzzle = сама пушка.
pub fn fill_empty_turret_rig(mut cannons: Query<(Entity, &mut TurretRig), Added<Cannon>>) {
    for (entity, mut rig) in cannons.iter_mut() {
        if *rig == TurretRig::default() {
            *rig = TurretRig::on_self(entity);
            crate::logger::log(&format!("Cannon {:?}: no part references, using self", entity));
        }
    }
}

/// System: валидация диапазонов (аналог editor validation)
///
/// - При появлении пушки: только коррекция
/// - При изменении настроек в runtime: коррекция + повторное применение текущих слайдеров
pub fn validate_turret_settings(
    mut cannons: Query<(Entity, &mut TurretSettings, &SliderBindings), Changed<TurretSettings>>,
    sliders: Query<&Slider>,
    mut aim_events: EventWriter<AimCommand>,
) {
    for (entity, mut settings, bindings) in cannons.iter_mut() {
        let just_added = settings.is_added();

        // bypass: коррекция не должна снова триггерить Changed
        if settings.bypass_change_detection().validate() {
            crate::logger::log_warning(&format!(
                "Cannon {:?}: inverted range corrected → x [{}, {}], elevation [{}, {}]",
                entity, settings.min_x, settings.max_x, settings.min_elevation, settings.max_elevation
            ));
        }

        if just_added {
            continue;
        }

        if let Some(slider) = bindings.horizontal.and_then(|e| sliders.get(e).ok()) {
            aim_events.write(AimCommand::Horizontal { cannon: entity, t: slider.value() });
        }
        if let Some(slider) = bindings.vertical.and_then(|e| sliders.get(e).ok()) {
            aim_events.write(AimCommand::Elevation { cannon: entity, t: slider.value() });
        }
    }
}

/// System: снимок исходного локального поворота barrel pivot
///
/// Один раз при появлении пушки. Нет pivot → identity.
pub fn capture_barrel_rest_pose(
    mut cannons: Query<(&TurretRig, &mut BarrelRestPose), Added<Cannon>>,
    transforms: Query<&Transform>,
) {
    for (rig, mut rest) in cannons.iter_mut() {
        if rest.captured {
            continue;
        }

        rest.rotation = rig
            .barrel_pivot
            .and_then(|pivot| transforms.get(pivot).ok())
            .map(|transform| transform.rotation)
            .unwrap_or(Quat::IDENTITY);
        rest.captured = true;
    }
}

/// System: стартовая синхронизация слайдеров с пушкой
///
/// - Horizontal слайдер = положение базы (inverse lerp мировой X), затем применяется
/// - Vertical слайдер = минимум elevation (1.0 если слайдер инвертирован), затем применяется
///
/// Слайдеры выставляются без SliderValueChanged event.
pub fn sync_sliders_on_start(
    cannons: Query<(Entity, &TurretRig, &TurretSettings, &SliderBindings), Added<Cannon>>,
    mut sliders: Query<&mut Slider>,
    transform_helper: TransformHelper,
    mut aim_events: EventWriter<AimCommand>,
) {
    for (entity, rig, settings, bindings) in cannons.iter() {
        if let (Some(base), Some(slider_entity)) = (rig.base, bindings.horizontal) {
            let base_global = transform_helper.compute_global_transform(base);
            if let (Ok(base_global), Ok(mut slider)) = (base_global, sliders.get_mut(slider_entity)) {
                let t = horizontal_t(settings, base_global.translation().x);
                Slider::set_without_notify(&mut slider, t);
                aim_events.write(AimCommand::Horizontal { cannon: entity, t: slider.value() });
            }
        }

        if let (Some(_), Some(slider_entity)) = (rig.barrel_pivot, bindings.vertical) {
            if let Ok(mut slider) = sliders.get_mut(slider_entity) {
                let t = if settings.invert_vertical_slider { 1.0 } else { 0.0 };
                Slider::set_without_notify(&mut slider, t);
                aim_events.write(AimCommand::Elevation { cannon: entity, t: slider.value() });
            }
        }
    }
}

/// System: применение AimCommand к transform базы / pivot
///
/// Horizontal меняет МИРОВУЮ X базы: если у базы есть parent,
/// локальная translation пересчитывается через parent GlobalTransform.
pub fn apply_aim_commands(
    mut aim_events: EventReader<AimCommand>,
    cannons: Query<(&TurretRig, &TurretSettings, &BarrelRestPose)>,
    parents: Query<&ChildOf>,
    mut transforms: ParamSet<(TransformHelper, Query<&mut Transform>)>,
) {
    for command in aim_events.read() {
        let Ok((rig, settings, rest)) = cannons.get(command.cannon()) else {
            continue;
        };

        match *command {
            AimCommand::Horizontal { cannon, t } => {
                let Some(base) = rig.base else {
                    continue;
                };

                let x = horizontal_x(settings, t);
                let Some(local) = world_x_to_local(&transforms.p0(), &parents, base, x) else {
                    continue;
                };

                if let Ok(mut transform) = transforms.p1().get_mut(base) {
                    transform.translation = local;
                    crate::logger::log(&format!(
                        "Cannon {:?}: horizontal t={:.3} → x={:.3}",
                        cannon, t, x
                    ));
                }
            }
            AimCommand::Elevation { cannon, t } => {
                let Some(pivot) = rig.barrel_pivot else {
                    continue;
                };

                let angle = elevation_angle(settings, t);
                if let Ok(mut transform) = transforms.p1().get_mut(pivot) {
                    transform.rotation =
                        elevation_rotation(rest.rotation, settings.elevation_axis, angle);
                    crate::logger::log(&format!(
                        "Cannon {:?}: elevation t={:.3} → {:.2}°",
                        cannon, t, angle
                    ));
                }
            }
        }
    }
}

/// Новая локальная translation базы, у которой мировая X заменена на `x`
fn world_x_to_local(
    helper: &TransformHelper,
    parents: &Query<&ChildOf>,
    base: Entity,
    x: f32,
) -> Option<Vec3> {
    let mut world = helper.compute_global_transform(base).ok()?.translation();
    world.x = x;

    match parents.get(base) {
        Ok(child_of) => {
            let parent_global = helper.compute_global_transform(child_of.0).ok()?;
            Some(parent_global.affine().inverse().transform_point3(world))
        }
        Err(_) => Some(world),
    }
}

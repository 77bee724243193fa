//! Input systems: слайдеры → SliderValueChanged → AimCommand, клавиатура → слайдеры / FireCommand

use bevy::prelude::*;

use super::controls::ManualControls;
use crate::components::{KeyboardControlled, Slider, SliderBindings};
use crate::firing::FireCommand;
use crate::turret::AimCommand;

/// Event: значение слайдера изменилось (аналог onValueChanged у UI слайдера)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SliderValueChanged {
    pub slider: Entity,
    pub value: f32,
}

/// System: Changed<Slider> → SliderValueChanged
///
/// Только что добавленные слайдеры не шлют event (стартовое значение
/// выставляет sync_sliders_on_start).
pub fn emit_slider_changes(
    sliders: Query<(Entity, Ref<Slider>), Changed<Slider>>,
    mut changed_events: EventWriter<SliderValueChanged>,
) {
    for (entity, slider) in sliders.iter() {
        if slider.is_added() {
            continue;
        }

        changed_events.write(SliderValueChanged {
            slider: entity,
            value: slider.value(),
        });
    }
}

/// System: SliderValueChanged → AimCommand для всех пушек, привязанных к слайдеру
pub fn route_slider_changes(
    mut changed_events: EventReader<SliderValueChanged>,
    cannons: Query<(Entity, &SliderBindings)>,
    mut aim_events: EventWriter<AimCommand>,
) {
    for event in changed_events.read() {
        for (cannon, bindings) in cannons.iter() {
            if bindings.horizontal == Some(event.slider) {
                aim_events.write(AimCommand::Horizontal { cannon, t: event.value });
            }
            if bindings.vertical == Some(event.slider) {
                aim_events.write(AimCommand::Elevation { cannon, t: event.value });
            }
        }
    }
}

/// System: зажатые стрелки / WASD двигают слайдеры KeyboardControlled пушек
///
/// Слайдер помечается изменённым только если значение реально сдвинулось
/// (упёрся в край → event не шлётся).
pub fn nudge_sliders_from_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<ManualControls>,
    time: Res<Time>,
    cannons: Query<&SliderBindings, With<KeyboardControlled>>,
    mut sliders: Query<&mut Slider>,
) {
    let h = controls.horizontal_axis(&keyboard);
    let v = controls.vertical_axis(&keyboard);
    let step = controls.slider_speed * time.delta_secs();

    for bindings in cannons.iter() {
        for (axis, slider_entity) in [(h, bindings.horizontal), (v, bindings.vertical)] {
            if axis.abs() <= 0.01 {
                continue;
            }

            let Some(mut slider) = slider_entity.and_then(|e| sliders.get_mut(e).ok()) else {
                continue;
            };

            let mut next = *slider;
            next.nudge(axis * step);
            slider.set_if_neq(next);
        }
    }
}

/// System: клавиша выстрела → FireCommand для всех KeyboardControlled пушек
pub fn fire_on_key_press(
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<ManualControls>,
    cannons: Query<Entity, With<KeyboardControlled>>,
    mut fire_events: EventWriter<FireCommand>,
) {
    if !keyboard.just_pressed(controls.fire) {
        return;
    }

    for cannon in cannons.iter() {
        fire_events.write(FireCommand { cannon });
    }
}

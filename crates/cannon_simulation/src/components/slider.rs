//! UI slider (headless модель): нормализованное значение [0, 1]
//!
//! Визуальный виджет живёт в presentation слое, ECS хранит только значение.
//! Изменение значения через `Mut<Slider>` → `SliderValueChanged` event
//! (см. `input::emit_slider_changes`). `set_without_notify` обходит change detection.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Slider {
    value: f32,
}

impl Slider {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Значение клампится в [0, 1]
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Сдвиг на delta (клавиатура)
    pub fn nudge(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    /// Установить значение без SliderValueChanged event
    pub fn set_without_notify(slider: &mut Mut<Slider>, value: f32) {
        slider.bypass_change_detection().set(value);
    }
}

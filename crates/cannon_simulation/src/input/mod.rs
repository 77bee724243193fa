//! Input binding: UI слайдеры и клавиатура
//!
//! Flow:
//! 1. Клавиатура (KeyboardControlled) двигает Slider / шлёт FireCommand
//! 2. Изменённый Slider → SliderValueChanged
//! 3. SliderValueChanged → AimCommand (turret применяет в CannonSet::Aim)

use bevy::prelude::*;

pub mod controls;
pub mod systems;

pub use controls::ManualControls;
pub use systems::{
    emit_slider_changes, fire_on_key_press, nudge_sliders_from_keyboard, route_slider_changes,
    SliderValueChanged,
};

use crate::CannonSet;

pub struct CannonInputPlugin;

impl Plugin for CannonInputPlugin {
    fn build(&self, app: &mut App) {
        // Без InputPlugin (headless) ресурс создаём сами, press/clear делает вызывающий код
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ManualControls>()
            .add_event::<SliderValueChanged>()
            .register_type::<crate::components::Slider>()
            .register_type::<crate::components::KeyboardControlled>();

        app.add_systems(
            Update,
            (
                nudge_sliders_from_keyboard,
                fire_on_key_press,
                emit_slider_changes,
                route_slider_changes,
            )
                .chain()
                .in_set(CannonSet::Input),
        );
    }
}

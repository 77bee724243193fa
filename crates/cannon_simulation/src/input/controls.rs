//! Раскладка клавиатуры для ручного управления пушкой

use bevy::prelude::*;

/// Keyboard bindings + скорость движения слайдеров
///
/// - A/D, ←/→ — horizontal слайдер
/// - W/S, ↑/↓ — vertical слайдер
/// - Space — выстрел (just_pressed)
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ManualControls {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub fire: KeyCode,
    /// Единиц слайдера в секунду при зажатой клавише
    pub slider_speed: f32,
}

impl Default for ManualControls {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            up: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            down: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            fire: KeyCode::Space,
            slider_speed: 1.0,
        }
    }
}

impl ManualControls {
    /// Raw axis: -1 / 0 / +1
    pub fn horizontal_axis(&self, keyboard: &ButtonInput<KeyCode>) -> f32 {
        raw_axis(keyboard, &self.left, &self.right)
    }

    pub fn vertical_axis(&self, keyboard: &ButtonInput<KeyCode>) -> f32 {
        raw_axis(keyboard, &self.down, &self.up)
    }
}

fn raw_axis(keyboard: &ButtonInput<KeyCode>, negative: &[KeyCode], positive: &[KeyCode]) -> f32 {
    let negative = keyboard.any_pressed(negative.iter().copied()) as i8;
    let positive = keyboard.any_pressed(positive.iter().copied()) as i8;
    (positive - negative) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_from_keys() {
        let controls = ManualControls::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();

        assert_eq!(controls.horizontal_axis(&keyboard), 0.0);

        keyboard.press(KeyCode::ArrowRight);
        assert_eq!(controls.horizontal_axis(&keyboard), 1.0);

        keyboard.press(KeyCode::KeyA);
        assert_eq!(controls.horizontal_axis(&keyboard), 0.0);

        keyboard.release(KeyCode::ArrowRight);
        assert_eq!(controls.horizontal_axis(&keyboard), -1.0);

        keyboard.press(KeyCode::KeyW);
        assert_eq!(controls.vertical_axis(&keyboard), 1.0);
    }
}

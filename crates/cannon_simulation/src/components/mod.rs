//! ECS Components пушки
//!
//! Организация по доменам:
//! - turret: ссылки на части, диапазоны наведения, привязки слайдеров
//! - slider: нормализованное значение UI слайдера
//! - weapon: параметры выстрела, projectile template, звук

pub mod slider;
pub mod turret;
pub mod weapon;

#[cfg(test)]
mod weapon_tests;

// Re-exports для удобного импорта
pub use slider::*;
pub use turret::*;
pub use weapon::*;

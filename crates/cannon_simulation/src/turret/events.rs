//! Aim events

use bevy::prelude::*;

/// Команда наведения (нормализованный t ∈ [0, 1], значения вне диапазона клампятся)
///
/// Источники: слайдеры (route_slider_changes), startup sync, validation, внешний код.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum AimCommand {
    /// База → мировая X = lerp(min_x, max_x, t)
    Horizontal { cannon: Entity, t: f32 },
    /// Pivot → rest pose × поворот на lerp(min_elevation, max_elevation, t)
    Elevation { cannon: Entity, t: f32 },
}

impl AimCommand {
    pub fn cannon(&self) -> Entity {
        match self {
            AimCommand::Horizontal { cannon, .. } | AimCommand::Elevation { cannon, .. } => *cannon,
        }
    }
}

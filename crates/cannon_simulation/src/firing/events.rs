//! Fire events
//!
//! - FireCommand: внешний триггер (клавиша, скрипт, UI кнопка) → ECS
//! - CannonFired: выстрел состоялся (ECS → presentation: VFX, отдача)
//! - FireSfxRequested: проиграть звук выстрела (если у пушки есть FireSfx)

use bevy::prelude::*;

/// Event: выстрелить из пушки
///
/// Cooldown и наличие prefab/muzzle проверяются в process_fire_commands,
/// отказ — тихий no-op.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FireCommand {
    pub cannon: Entity,
}

/// Event: projectile заспавнен
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CannonFired {
    pub cannon: Entity,
    pub projectile: Entity,
    /// Точка спавна (мировые координаты)
    pub position: Vec3,
    /// Начальная скорость projectile
    pub velocity: Vec3,
}

/// Event: звук выстрела
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FireSfxRequested {
    pub cannon: Entity,
    pub clip: String,
    pub position: Vec3,
}

//! Cannon Simulation Core
//!
//! ECS-симуляция пушки на Bevy 0.16 + Rapier 3D:
//! - два нормализованных слайдера → мировая X базы и elevation ствола
//! - выстрел с cooldown → Rapier projectile из muzzle
//!
//! Рендер, UI виджеты и аудио — presentation слой вне крейта (слушает events).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;

// Публичные модули
pub mod components;
pub mod config;
pub mod firing;
pub mod input;
pub mod logger;
pub mod spawn;
pub mod turret;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use config::{load_config, CannonConfig, ConfigError};
pub use firing::{CannonFired, FireCommand, FireSfxRequested, FiringPlugin, Projectile, ShooterCollisionFilter};
pub use input::{CannonInputPlugin, ManualControls, SliderValueChanged};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use spawn::{spawn_cannon, CannonParts};
pub use turret::{AimCommand, TurretPlugin};

/// Шаг симуляции для headless режима (60Hz)
pub const HEADLESS_TICK: Duration = Duration::from_nanos(16_666_667);

/// Порядок cannon систем внутри Update
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CannonSet {
    /// Validation, rest pose, стартовая синхронизация слайдеров
    Setup,
    /// Клавиатура + слайдеры → AimCommand / FireCommand
    Input,
    /// AimCommand → transform
    Aim,
    /// FireCommand → projectile
    Fire,
    /// Lifetime cleanup
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct CannonSimulationPlugin;

impl Plugin for CannonSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CannonSet::Setup,
                CannonSet::Input,
                CannonSet::Aim,
                CannonSet::Fire,
                CannonSet::Cleanup,
            )
                .chain(),
        )
        .add_plugins((TurretPlugin, CannonInputPlugin, FiringPlugin));
    }
}

/// Rapier physics с фильтром "снаряд не бьёт свою пушку"
///
/// Отдельно от CannonSimulationPlugin: headless тесты гоняют логику без physics step.
pub struct CannonPhysicsPlugin;

impl Plugin for CannonPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<ShooterCollisionFilter>::default());
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается фиксированным шагом HEADLESS_TICK на каждый `app.update()`
/// (первый update — нулевой delta).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_TICK))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

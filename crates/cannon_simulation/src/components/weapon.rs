//! Cannon weapon: параметры выстрела + cooldown state
//!
//! Architecture:
//! - ECS хранит: stats, projectile template, next_fire_time (game state)
//! - Fire system спавнит Rapier projectile (см. `firing`)
//! - Presentation слой слушает CannonFired / FireSfxRequested

use bevy::prelude::*;
use thiserror::Error;

/// Шаблон projectile (prefab): из чего собирается rigid body при выстреле
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ProjectileTemplate {
    /// Радиус ball collider (метры)
    pub radius: f32,
    /// Масса (кг)
    pub mass: f32,
    /// Continuous collision detection (быстрые снаряды не пролетают сквозь стены)
    pub ccd: bool,
}

impl Default for ProjectileTemplate {
    fn default() -> Self {
        Self {
            radius: 0.15,
            mass: 1.0,
            ccd: true,
        }
    }
}

/// Оружие пушки
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CannonWeapon {
    /// None = prefab не назначен, выстрел невозможен
    pub projectile: Option<ProjectileTemplate>,

    /// Начальная скорость снаряда (м/с)
    pub muzzle_velocity: f32,

    /// Пауза между выстрелами (секунды)
    pub fire_cooldown: f32,

    /// Время жизни снаряда (секунды), ≤ 0 = живёт вечно
    pub projectile_life: f32,

    /// Сдвиг точки спавна вперёд от muzzle (отрицательные значения = 0)
    pub spawn_forward_offset: f32,

    /// Снаряд не сталкивается с коллайдерами самой пушки
    pub ignore_collision_with_cannon: bool,

    /// Время (Time::elapsed, секунды), раньше которого стрелять нельзя
    pub next_fire_time: f64,
}

impl Default for CannonWeapon {
    fn default() -> Self {
        Self {
            projectile: Some(ProjectileTemplate::default()),
            muzzle_velocity: 30.0,
            fire_cooldown: 0.3,
            projectile_life: 10.0,
            spawn_forward_offset: 0.25,
            ignore_collision_with_cannon: true,
            next_fire_time: 0.0,
        }
    }
}

/// Почему выстрел не состоялся (для gameplay — тихий no-op, только лог)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FireRejected {
    #[error("cooling down for {remaining:.3}s more")]
    CoolingDown { remaining: f64 },

    #[error("no projectile template assigned")]
    NoProjectile,

    #[error("muzzle reference is missing")]
    NoMuzzle,
}

impl CannonWeapon {
    /// Проверка cooldown (включительно: при now == next_fire_time уже можно)
    pub fn ready_at(&self, now: f64) -> Result<(), FireRejected> {
        if now < self.next_fire_time {
            return Err(FireRejected::CoolingDown {
                remaining: self.next_fire_time - now,
            });
        }
        Ok(())
    }

    /// Начать cooldown после выстрела
    pub fn start_cooldown(&mut self, now: f64) {
        self.next_fire_time = now + self.fire_cooldown as f64;
    }

    pub fn effective_offset(&self) -> f32 {
        self.spawn_forward_offset.max(0.0)
    }

    /// Точка спавна: muzzle + forward × max(0, offset)
    pub fn spawn_point(&self, muzzle_position: Vec3, forward: Vec3) -> Vec3 {
        muzzle_position + forward * self.effective_offset()
    }

    pub fn launch_velocity(&self, forward: Vec3) -> Vec3 {
        forward * self.muzzle_velocity
    }
}

/// Звук выстрела (клип проигрывает presentation слой по FireSfxRequested)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FireSfx {
    pub clip: String,
}

impl FireSfx {
    pub fn new(clip: impl Into<String>) -> Self {
        Self { clip: clip.into() }
    }
}

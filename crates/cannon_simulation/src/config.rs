//! Конфигурация пушки (TOML)
//!
//! Все ключи опциональны — отсутствующие берутся из Default.
//!
//! ```toml
//! [turret]
//! min_x = -10.0
//! max_x = 10.0
//! min_elevation = 0.0
//! max_elevation = 60.0
//! elevation_axis = "X"
//! invert_vertical_slider = false
//!
//! [projectile]
//! muzzle_velocity = 30.0
//! fire_cooldown = 0.3
//! projectile_life = 10.0
//! spawn_forward_offset = 0.25
//! ignore_collision_with_cannon = true
//! radius = 0.15
//! mass = 1.0
//! ccd = true
//! sfx_clip = "sfx/cannon_fire.ogg"
//!
//! [controls]
//! keyboard = true
//! slider_speed = 1.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{CannonWeapon, ElevationAxis, ProjectileTemplate, TurretSettings};
use crate::input::ManualControls;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannonConfig {
    pub turret: TurretConfig,
    pub projectile: ProjectileConfig,
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretConfig {
    pub min_x: f32,
    pub max_x: f32,
    pub min_elevation: f32,
    pub max_elevation: f32,
    pub elevation_axis: ElevationAxis,
    pub invert_vertical_slider: bool,
}

impl Default for TurretConfig {
    fn default() -> Self {
        let settings = TurretSettings::default();
        Self {
            min_x: settings.min_x,
            max_x: settings.max_x,
            min_elevation: settings.min_elevation,
            max_elevation: settings.max_elevation,
            elevation_axis: settings.elevation_axis,
            invert_vertical_slider: settings.invert_vertical_slider,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// false = prefab не назначен (пушка не стреляет)
    pub enabled: bool,
    pub muzzle_velocity: f32,
    pub fire_cooldown: f32,
    pub projectile_life: f32,
    pub spawn_forward_offset: f32,
    pub ignore_collision_with_cannon: bool,
    pub radius: f32,
    pub mass: f32,
    pub ccd: bool,
    pub sfx_clip: Option<String>,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        let weapon = CannonWeapon::default();
        let template = ProjectileTemplate::default();
        Self {
            enabled: true,
            muzzle_velocity: weapon.muzzle_velocity,
            fire_cooldown: weapon.fire_cooldown,
            projectile_life: weapon.projectile_life,
            spawn_forward_offset: weapon.spawn_forward_offset,
            ignore_collision_with_cannon: weapon.ignore_collision_with_cannon,
            radius: template.radius,
            mass: template.mass,
            ccd: template.ccd,
            sfx_clip: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Пушка слушает клавиатуру
    pub keyboard: bool,
    pub slider_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            slider_speed: ManualControls::default().slider_speed,
        }
    }
}

impl CannonConfig {
    /// Парсинг + validation диапазонов
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let mut config: CannonConfig = toml::from_str(source)?;
        config.validate();
        Ok(config)
    }

    /// Схлопывает перевёрнутые диапазоны (см. TurretSettings::validate)
    pub fn validate(&mut self) -> bool {
        let mut settings = self.turret_settings();
        let corrected = settings.validate();

        if corrected {
            crate::logger::log_warning(&format!(
                "Config: inverted turret range corrected → x [{}, {}], elevation [{}, {}]",
                settings.min_x, settings.max_x, settings.min_elevation, settings.max_elevation
            ));
            self.turret.max_x = settings.max_x;
            self.turret.max_elevation = settings.max_elevation;
        }

        corrected
    }

    pub fn turret_settings(&self) -> TurretSettings {
        TurretSettings {
            min_x: self.turret.min_x,
            max_x: self.turret.max_x,
            min_elevation: self.turret.min_elevation,
            max_elevation: self.turret.max_elevation,
            elevation_axis: self.turret.elevation_axis,
            invert_vertical_slider: self.turret.invert_vertical_slider,
        }
    }

    pub fn weapon(&self) -> CannonWeapon {
        let projectile = &self.projectile;
        CannonWeapon {
            projectile: projectile.enabled.then_some(ProjectileTemplate {
                radius: projectile.radius,
                mass: projectile.mass,
                ccd: projectile.ccd,
            }),
            muzzle_velocity: projectile.muzzle_velocity,
            fire_cooldown: projectile.fire_cooldown,
            projectile_life: projectile.projectile_life,
            spawn_forward_offset: projectile.spawn_forward_offset,
            ignore_collision_with_cannon: projectile.ignore_collision_with_cannon,
            next_fire_time: 0.0,
        }
    }

    pub fn manual_controls(&self) -> ManualControls {
        ManualControls {
            slider_speed: self.controls.slider_speed,
            ..Default::default()
        }
    }
}

/// Загрузка конфига с диска
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<CannonConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = CannonConfig::from_toml_str(&source)?;
    crate::logger::log_info(&format!("Config loaded from {}", path.display()));
    Ok(config)
}

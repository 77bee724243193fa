//! Turret aiming: слайдеры → мировая X базы и elevation pivot
//!
//! Порядок выполнения (Update):
//! 1. CannonSet::Setup — fill_empty_turret_rig, validate_turret_settings, capture_barrel_rest_pose, sync_sliders_on_start
//! 2. CannonSet::Aim — apply_aim_commands (после input, который генерирует AimCommand)

use bevy::prelude::*;

pub mod events;
pub mod mapping;
pub mod systems;

pub use events::AimCommand;
pub use mapping::{elevation_angle, elevation_rotation, horizontal_t, horizontal_x, inverse_lerp, lerp};
pub use systems::{
    apply_aim_commands, capture_barrel_rest_pose, fill_empty_turret_rig, sync_sliders_on_start,
    validate_turret_settings,
};

use crate::CannonSet;

pub struct TurretPlugin;

impl Plugin for TurretPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AimCommand>()
            .register_type::<crate::components::Cannon>()
            .register_type::<crate::components::TurretRig>()
            .register_type::<crate::components::TurretSettings>()
            .register_type::<crate::components::BarrelRestPose>()
            .register_type::<crate::components::SliderBindings>();

        app.add_systems(
            Update,
            (
                fill_empty_turret_rig,
                validate_turret_settings,
                capture_barrel_rest_pose,
                sync_sliders_on_start,
            )
                .chain()
                .in_set(CannonSet::Setup),
        );

        app.add_systems(Update, apply_aim_commands.in_set(CannonSet::Aim));
    }
}

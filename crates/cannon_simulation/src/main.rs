//! Headless симуляция пушки
//!
//! Запускает Bevy App без рендера: пушка проезжает по рельсу, поднимает ствол
//! и стреляет очередями. Usage: `cannon_simulation [config.toml]`

use bevy::prelude::*;
use cannon_simulation::logger::{set_log_level, LogLevel};
use cannon_simulation::{
    create_headless_app, load_config, log_error, log_info, spawn_cannon, CannonConfig,
    CannonPhysicsPlugin, CannonSimulationPlugin, FireCommand, Projectile, Slider,
};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                cannon_simulation::init_logger();
                log_error(&format!("Cannot start: {}", err));
                std::process::exit(1);
            }
        },
        None => CannonConfig::default(),
    };

    let mut app = create_headless_app();
    // Наведение логируется каждый тик на Debug — в демо только Info+
    set_log_level(LogLevel::Info);
    app.add_plugins((CannonSimulationPlugin, CannonPhysicsPlugin))
        .insert_resource(config.manual_controls());

    let parts = {
        let mut commands = app.world_mut().commands();
        spawn_cannon(&mut commands, &config, Vec3::ZERO)
    };
    app.world_mut().flush();

    log_info("Starting headless cannon simulation");

    // 600 тиков = 10 секунд при 60Hz
    for tick in 0..600u32 {
        // Плавный проход слайдерами туда-обратно
        let phase = tick as f32 / 600.0;
        let sweep = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        if let Some(mut slider) = app.world_mut().get_mut::<Slider>(parts.horizontal_slider) {
            slider.set(sweep);
        }
        if let Some(mut slider) = app.world_mut().get_mut::<Slider>(parts.vertical_slider) {
            slider.set(phase);
        }

        // Жмём "огонь" каждые 10 тиков — cooldown пропускает не все
        if tick % 10 == 0 {
            app.world_mut().send_event(FireCommand { cannon: parts.cannon });
        }

        app.update();

        if tick % 60 == 0 {
            let projectiles = app
                .world_mut()
                .query::<&Projectile>()
                .iter(app.world())
                .count();
            log_info(&format!("Tick {}: {} projectiles in flight", tick, projectiles));
        }
    }

    log_info("Simulation complete!");
}

//! Logging integration test
//!
//! Отдельный тестовый бинарь: logger глобальный, CaptureLogger ставится на весь процесс.

use bevy::prelude::*;
use cannon_simulation::logger::{set_logger, CaptureLogger, LogLevel};
use cannon_simulation::*;

fn warnings(capture: &CaptureLogger) -> Vec<String> {
    capture
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == LogLevel::Warning)
        .map(|(_, line)| line.clone())
        .collect()
}

/// Test: коррекция перевёрнутых диапазонов пишет warning (и из конфига, и в runtime)
#[test]
fn test_range_correction_is_logged_as_warning() {
    let capture = CaptureLogger::default();
    set_logger(Box::new(capture.clone()));

    // 1. Загрузка конфига
    let config = CannonConfig::from_toml_str("[turret]\nmin_x = 4.0\nmax_x = -4.0\n").unwrap();
    assert_eq!(config.turret.max_x, 4.0);

    let logged = warnings(&capture);
    assert_eq!(logged.len(), 1);
    assert!(logged[0].contains("inverted turret range corrected"), "{}", logged[0]);
    assert!(logged[0].contains("x [4, 4]"), "{}", logged[0]);

    // 2. Runtime изменение TurretSettings
    let mut app = create_headless_app();
    app.add_plugins(CannonSimulationPlugin);
    let parts = {
        let mut commands = app.world_mut().commands();
        spawn_cannon(&mut commands, &CannonConfig::default(), Vec3::ZERO)
    };
    app.world_mut().flush();
    app.update();
    assert_eq!(warnings(&capture).len(), 1, "Корректный конфиг не должен давать warning");

    app.world_mut()
        .get_mut::<TurretSettings>(parts.cannon)
        .unwrap()
        .max_elevation = -15.0;
    app.update();

    let logged = warnings(&capture);
    assert_eq!(logged.len(), 2);
    assert!(logged[1].contains(&format!("{:?}", parts.cannon)), "{}", logged[1]);
    assert!(logged[1].contains("elevation [0, 0]"), "{}", logged[1]);

    // Остальные уровни тоже доходят до printer'а
    assert!(capture
        .lines
        .lock()
        .unwrap()
        .iter()
        .any(|(level, line)| *level == LogLevel::Info && line.contains("spawned")));
}

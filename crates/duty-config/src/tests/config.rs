use crate::Config;

use googletest::prelude::*;
use serial_test::serial;

fn clear_duty_env() {
    let keys: Vec<String> = std::env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("DUTY_"))
        .collect();
    for key in keys {
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply() {
    clear_duty_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("DUTY_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.host, eq("127.0.0.1"));
    assert_that!(config.server.port, eq(8640));
    assert_that!(config.auth.enabled, eq(false));
    assert_that!(config.trash.retention_days, eq(30));
    assert_that!(config.validate(), ok(anything()));

    unsafe { std::env::remove_var("DUTY_CONFIG_DIR") };
}

#[test]
#[serial]
fn given_config_toml_when_loaded_then_values_override_defaults() {
    clear_duty_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[server]
port = 9100

[trash]
retention_days = 7

[logging]
level = "debug"
"#,
    )
    .unwrap();
    unsafe { std::env::set_var("DUTY_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(9100));
    assert_that!(config.trash.retention_days, eq(7));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));

    unsafe { std::env::remove_var("DUTY_CONFIG_DIR") };
}

#[test]
#[serial]
fn given_env_overrides_when_loaded_then_they_win_over_the_file() {
    clear_duty_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[server]\nport = 9100\n").unwrap();
    unsafe {
        std::env::set_var("DUTY_CONFIG_DIR", dir.path());
        std::env::set_var("DUTY_SERVER_PORT", "9200");
        std::env::set_var("DUTY_AUTH_ENABLED", "true");
        std::env::set_var("DUTY_AUTH_ACCESS_KEY", "firehouse-42");
    }

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(9200));
    assert_that!(config.auth.enabled, eq(true));
    assert_that!(config.auth.access_key, some(eq("firehouse-42")));
    assert_that!(config.validate(), ok(anything()));

    clear_duty_env();
}

#[test]
#[serial]
fn given_database_path_escaping_config_dir_then_validation_fails() {
    clear_duty_env();
    let mut config = Config::default();
    config.database.path = "../elsewhere.db".to_string();

    assert_that!(config.validate(), err(anything()));
}

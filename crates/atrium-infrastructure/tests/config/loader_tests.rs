//! Configuration Loader Tests

use atrium_infrastructure::config::{AppConfig, ConfigLoader, resolve_path};
use atrium_infrastructure::constants::{
    DEFAULT_CONFIG_FILENAME, DEFAULT_HTTP_PORT, DEFAULT_LOG_LEVEL,
};
use figment::Jail;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.app.env.is_none());
        Ok(())
    });
}

#[test]
fn test_file_then_env_precedence() {
    Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILENAME,
            r#"
                [app]
                env = "staging"

                [http]
                port = 9000
                host = "0.0.0.0"
            "#,
        )?;
        jail.set_env("ATRIUM_HTTP__PORT", "9100");

        let config = ConfigLoader::for_home(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.app.env.as_deref(), Some("staging"));
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 9100);
        Ok(())
    });
}

#[test]
fn test_missing_optional_file_uses_defaults() {
    Jail::expect_with(|jail| {
        let config = ConfigLoader::for_home(jail.directory().join("nowhere"))
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_missing_required_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::for_home(temp_dir.path())
        .require_file(true)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_validation_rejects_port_zero() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILENAME, "[http]\nport = 0\n")?;
        let result = ConfigLoader::for_home(jail.directory()).load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_log_level() {
    Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILENAME, "[logging]\nlevel = \"chatty\"\n")?;
        let result = ConfigLoader::for_home(jail.directory()).load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("nested").join(DEFAULT_CONFIG_FILENAME);

        let mut original = AppConfig::default();
        original.http.port = 9999;
        original.app.debug = true;

        let loader = ConfigLoader::new();
        loader
            .save_to_file(&original, &path)
            .map_err(|e| e.to_string())?;

        let loaded = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(loaded.http.port, 9999);
        assert!(loaded.app.debug);
        Ok(())
    });
}

#[test]
fn test_resolve_path() {
    let home = Path::new("/srv/app");
    assert_eq!(
        resolve_path(home, Path::new("storage/down")),
        Path::new("/srv/app/storage/down")
    );
    assert_eq!(
        resolve_path(home, Path::new("/var/run/down")),
        Path::new("/var/run/down")
    );
}

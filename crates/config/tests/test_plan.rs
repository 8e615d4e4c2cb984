//! Test plan for the `padron-config` crate.
//!
//! These tests exercise the configuration loader across default handling,
//! file discovery, environment overrides, and validation behaviour.

use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use padron_config::{load, AppConfig, DatabaseConfig};

const ENV_VARS_TO_RESET: &[&str] = &[
    "DATABASE_URL",
    "PADRON_CONFIG",
    "PADRON__DATABASE__MAX_CONNECTIONS",
    "PADRON__DATABASE__URL",
];

struct TestContext {
    vars: Vec<(String, Option<String>)>,
    original_dir: Option<PathBuf>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            vars: Vec::new(),
            original_dir: None,
        }
    }

    fn reset_environment(&mut self) {
        for key in ENV_VARS_TO_RESET {
            self.remove_var(key);
        }
    }

    fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        self.vars.push((key.to_string(), previous));
    }

    fn remove_var(&mut self, key: &str) {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        self.vars.push((key.to_string(), previous));
    }

    fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir =
                Some(std::env::current_dir().expect("failed to capture current directory"));
        }
        std::env::set_current_dir(dir).expect("failed to set current directory");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(original) = self.original_dir.take() {
            let _ = std::env::set_current_dir(original);
        }

        while let Some((key, value)) = self.vars.pop() {
            match value {
                Some(val) => std::env::set_var(&key, val),
                None => std::env::remove_var(&key),
            }
        }
    }
}

fn write_config_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create config directories");
    }
    fs::write(path, contents).expect("failed to write config file");
}

#[test]
#[serial]
fn load_uses_default_values_when_no_files_found() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let config = load().expect("configuration load should succeed without files");
    let defaults = AppConfig::default();

    assert_eq!(config.database.url, defaults.database.url);
    assert_eq!(
        config.database.max_connections,
        defaults.database.max_connections
    );
}

#[test]
#[serial]
fn load_picks_first_available_file_in_search_order() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "padron.toml",
        r#"
        [database]
        max_connections = 42
        "#,
    );
    write_config_file(
        temp_dir.path(),
        "config/padron.toml",
        r#"
        [database]
        max_connections = 51
        "#,
    );

    let config = load().expect("configuration load should pick the first file");
    assert_eq!(config.database.max_connections, 42);
}

#[test]
#[serial]
fn load_merges_partial_file_with_defaults() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "padron.toml",
        r#"
        [database]
        max_connections = 50
        "#,
    );

    let config = load().expect("configuration load should succeed");
    let defaults = AppConfig::default();

    assert_eq!(config.database.max_connections, 50);
    assert_eq!(config.database.url, defaults.database.url);
}

#[test]
#[serial]
fn load_applies_environment_overrides() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "padron.toml",
        r#"
        [database]
        max_connections = 5
        "#,
    );

    ctx.set_var("PADRON__DATABASE__MAX_CONNECTIONS", "20");

    let config = load().expect("configuration load should honour env overrides");
    assert_eq!(config.database.max_connections, 20);
}

#[test]
#[serial]
fn load_supports_database_url_environment_variable() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let url = "sqlite:///var/lib/padron/accounts.db";
    ctx.set_var("PADRON__DATABASE__URL", url);

    let config = load().expect("configuration load should read database env override");
    assert_eq!(config.database.url, url);
}

#[test]
#[serial]
fn load_honours_explicit_config_path() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "elsewhere/custom.toml",
        r#"
        [database]
        url = "sqlite://custom.db"
        "#,
    );

    let explicit = temp_dir.path().join("elsewhere/custom.toml");
    ctx.set_var("PADRON_CONFIG", explicit.to_string_lossy());

    let config = load().expect("configuration load should honour PADRON_CONFIG");
    assert_eq!(config.database.url, "sqlite://custom.db");
}

#[test]
#[serial]
fn load_errors_on_invalid_toml_contents() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "padron.toml",
        r#"
        [database]
        max_connections = "not-a-number
        "#,
    );

    let error = load().expect_err("invalid TOML should cause load to fail");
    let message = error.to_string();
    assert!(
        message.contains("invalid configuration")
            || message.contains("unable to build configuration"),
        "unexpected error message: {message}"
    );
}

#[test]
fn database_config_defaults_match_expected_values() {
    let defaults = DatabaseConfig::default();
    assert_eq!(defaults.url, "sqlite://padron.db");
    assert_eq!(defaults.max_connections, 10);
}

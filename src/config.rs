//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::task::ExportMode;

/// Overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "TASK_TRACKER_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,

    #[serde(default)]
    pub examples: ExamplesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Task file used when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,

    #[serde(default)]
    pub default_export_mode: ExportMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplesConfig {
    #[serde(default = "default_example_count")]
    pub count: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// External generator program and arguments. Built-in generator when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            count: default_example_count(),
            timeout_secs: default_timeout_secs(),
            command: None,
        }
    }
}

impl ExamplesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_example_count() -> usize {
    5
}

fn default_timeout_secs() -> u64 {
    5
}

pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join("task-tracker"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load the config file, or defaults when there is none
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.tasks.default_file.is_none());
        assert_eq!(config.tasks.default_export_mode, ExportMode::Overwrite);
        assert_eq!(config.examples.count, 5);
        assert_eq!(config.examples.timeout(), Duration::from_secs(5));
        assert!(config.examples.command.is_none());
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        let toml = r#"
            [tasks]
            default_export_mode = "append"

            [examples]
            timeout_secs = 2
            command = ["gen-tasks", "--count", "3"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tasks.default_export_mode, ExportMode::Append);
        assert_eq!(config.examples.timeout_secs, 2);
        assert_eq!(config.examples.count, 5);
        assert_eq!(
            config.examples.command,
            Some(vec![
                "gen-tasks".to_string(),
                "--count".to_string(),
                "3".to_string()
            ])
        );
    }

    #[test]
    fn test_config_rejects_unknown_export_mode() {
        let toml = r#"
            [tasks]
            default_export_mode = "replace"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    #[serial]
    fn test_config_roundtrip_through_app_dir() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var(CONFIG_DIR_ENV, temp.path().join("nested"));

        assert!(load_config()?.is_none());

        let mut config = Config::default();
        config.tasks.default_file = Some(PathBuf::from("/tmp/tasks.txt"));
        config.examples.count = 3;
        save_config(&config)?;

        let loaded = Config::load()?;
        assert_eq!(
            loaded.tasks.default_file,
            Some(PathBuf::from("/tmp/tasks.txt"))
        );
        assert_eq!(loaded.examples.count, 3);

        std::env::remove_var(CONFIG_DIR_ENV);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_malformed_config_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var(CONFIG_DIR_ENV, temp.path());
        fs::write(temp.path().join("config.toml"), "[examples]\ncount = \"many\"\n")?;

        assert!(Config::load().is_err());

        std::env::remove_var(CONFIG_DIR_ENV);
        Ok(())
    }
}

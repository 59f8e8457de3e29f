use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SERVICE_URL_ENV: &str = "HAIRSTYLE_ADVISOR_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analysis service; `/analyze` is appended.
    pub service_url: String,
    pub timeout_seconds: u64,
    /// Longest edge of the preview thumbnail, in pixels.
    pub preview_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".into(),
            timeout_seconds: 120,
            preview_size: 256,
        }
    }
}

impl Config {
    /// Loads `path`, or the default config file when `path` is `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home
            .join(".config")
            .join("hairstyle-advisor")
            .join("config.json"))
    }

    /// Command line beats environment, environment beats the file.
    pub fn apply_overrides(&mut self, env_url: Option<String>, cli_url: Option<String>) {
        if let Some(url) = cli_url.or(env_url).filter(|url| !url.trim().is_empty()) {
            self.service_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("config.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            service_url: "http://analysis.local:9000".into(),
            timeout_seconds: 30,
            preview_size: 128,
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.service_url, Config::default().service_url);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn cli_url_wins_over_env() {
        let mut config = Config::default();
        config.apply_overrides(
            Some("http://from-env:8000".into()),
            Some("http://from-cli:8000".into()),
        );
        assert_eq!(config.service_url, "http://from-cli:8000");

        let mut config = Config::default();
        config.apply_overrides(Some("http://from-env:8000".into()), None);
        assert_eq!(config.service_url, "http://from-env:8000");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".into()), None);
        assert_eq!(config.service_url, Config::default().service_url);
    }
}

//! Configuration management for orgportal
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/orgportal/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    /// Shown for creators without a loadable picture. Never probed itself;
    /// relative paths resolve against the working directory.
    pub placeholder_avatar: PathBuf,
    pub data_file: Option<PathBuf>,
    pub backend: BackendOptions,
    pub password: PasswordPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            placeholder_avatar: PathBuf::from("assets/placeholder-avatar.png"),
            data_file: None,
            backend: BackendOptions::default(),
            password: PasswordPolicy::default(),
        }
    }
}

impl Config {
    /// Directory holding config, log and data files
    pub fn dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join("orgportal"))
    }

    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("orgportal.log"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Gruvbox => ThemeName::Nord,
            ThemeName::Nord => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Gruvbox,
        }
    }
}

/// How the simulated backend should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    #[default]
    None,
    Network,
    Auth,
}

impl FailureMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(FailureMode::None),
            "network" => Some(FailureMode::Network),
            "auth" => Some(FailureMode::Auth),
            _ => None,
        }
    }
}

/// Simulated API behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendOptions {
    pub latency_ms: u64,
    pub failure: FailureMode,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            latency_ms: 800,
            failure: FailureMode::None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert_eq!(config.backend.latency_ms, 800);
        assert_eq!(config.backend.failure, FailureMode::None);
        assert_eq!(config.password.min_length, 8);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
theme = "nord"

[backend]
failure = "network"
"#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeName::Nord);
        assert_eq!(config.backend.failure, FailureMode::Network);
        assert_eq!(config.backend.latency_ms, 800);
        assert_eq!(config.password.min_length, 8);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("orgportal-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        // Missing file: defaults are written out
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert!(path.exists());

        let mut config = config;
        config.theme = ThemeName::Nord;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().theme, ThemeName::Nord);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Gruvbox;
        assert_eq!(theme.next(), ThemeName::Nord);
        assert_eq!(theme.next().next(), ThemeName::Transparent);
        assert_eq!(theme.next().next().next(), ThemeName::Gruvbox);
    }

    #[test]
    fn test_failure_mode_parse() {
        assert_eq!(FailureMode::parse("Network"), Some(FailureMode::Network));
        assert_eq!(FailureMode::parse("auth"), Some(FailureMode::Auth));
        assert_eq!(FailureMode::parse("disk"), None);
    }
}

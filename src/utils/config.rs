//! Configuration management for vidplayer
//!
//! This module handles loading and managing application configuration
//! from config files and environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::error::{IntoPlayerError, Result, VidPlayerError};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Video library configuration
    pub library: LibraryConfig,

    /// Player configuration
    pub player: PlayerConfig,

    /// Console configuration
    pub console: ConsoleConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Video library configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Catalog file to load; the built-in library is used when unset
    pub catalog_path: Option<PathBuf>,
}

/// Player configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seed for random play, for reproducible sessions
    pub random_seed: Option<u64>,
}

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prompt printed before each command
    pub prompt: String,

    /// Print the welcome banner on startup
    pub show_banner: bool,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "vidplayer> ".to_string(),
            show_banner: true,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/vidplayer/config.toml on Linux)
    /// 3. User config file (~/.config/vidplayer/config.toml on Linux)
    /// 4. The explicitly requested file, if any (must exist)
    /// 5. Environment variables (VIDPLAYER_* prefix)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut layers: Vec<PathBuf> = [Self::system_config_path(), Self::user_config_path()]
            .into_iter()
            .flatten()
            .filter(|path| path.exists())
            .collect();

        if let Some(path) = explicit {
            layers.push(path.to_path_buf());
        }

        let mut config = Self::from_layers(&layers)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Read a single TOML file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_layers(&[path.to_path_buf()])
    }

    /// Merge several TOML files, later files overriding earlier ones key by key
    pub fn from_layers(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Table::new();

        for path in paths {
            let contents = std::fs::read_to_string(path)
                .config_err(&format!("Failed to read {}", path.display()))?;
            let layer: toml::Table = contents
                .parse()
                .config_err(&format!("Failed to parse {}", path.display()))?;

            merge_tables(&mut merged, layer);
        }

        toml::Value::Table(merged)
            .try_into::<Self>()
            .config_err("Invalid configuration")
    }

    /// Apply environment variable overrides through the given lookup
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("VIDPLAYER_CATALOG") {
            self.library.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(seed) = lookup("VIDPLAYER_SEED") {
            let seed = seed.parse()
                .map_err(|_| VidPlayerError::Config("Invalid VIDPLAYER_SEED".to_string()))?;
            self.player.random_seed = Some(seed);
        }

        if let Some(prompt) = lookup("VIDPLAYER_PROMPT") {
            self.console.prompt = prompt;
        }

        if let Some(log_level) = lookup("VIDPLAYER_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(VidPlayerError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level,
                valid_log_levels
            )));
        }

        if let Some(path) = &self.library.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(VidPlayerError::Config("Catalog path must not be empty".to_string()));
            }
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/vidplayer/config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from("/Library/Application Support/vidplayer/config.toml"));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vidplayer").join("config.toml"))
    }
}

/// Overlay `layer` onto `base`; nested tables merge, other values replace
fn merge_tables(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        match value {
            toml::Value::Table(nested) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                } else {
                    base.insert(key, toml::Value::Table(nested));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.library.catalog_path.is_none());
        assert!(config.player.random_seed.is_none());
        assert_eq!(config.console.prompt, "vidplayer> ");
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.general.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.general.log_level = "debug".to_string();
        config.library.catalog_path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VIDPLAYER_CATALOG", "/srv/videos.txt"),
            ("VIDPLAYER_SEED", "42"),
            ("VIDPLAYER_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.library.catalog_path, Some(PathBuf::from("/srv/videos.txt")));
        assert_eq!(config.player.random_seed, Some(42));
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.console.prompt, "vidplayer> ");
    }

    #[test]
    fn test_invalid_seed_override() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(|key| {
            (key == "VIDPLAYER_SEED").then(|| "not-a-number".to_string())
        });
        assert!(matches!(result, Err(VidPlayerError::Config(_))));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[player]\nrandom_seed = 7\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.player.random_seed, Some(7));
        assert_eq!(config.console.prompt, "vidplayer> ");
        assert!(config.console.show_banner);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[player\nrandom_seed = ").unwrap();

        assert!(matches!(Config::from_file(&path), Err(VidPlayerError::Config(_))));
    }

    #[test]
    fn test_later_layers_merge_over_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(
            &user,
            "[library]\ncatalog_path = \"/srv/videos.txt\"\n\n[console]\nprompt = \"> \"\n",
        )
        .unwrap();
        std::fs::write(&explicit, "[player]\nrandom_seed = 7\n\n[console]\nshow_banner = false\n")
            .unwrap();

        let config = Config::from_layers(&[user, explicit]).unwrap();
        assert_eq!(config.library.catalog_path, Some(PathBuf::from("/srv/videos.txt")));
        assert_eq!(config.player.random_seed, Some(7));
        assert_eq!(config.console.prompt, "> ");
        assert!(!config.console.show_banner);
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_layer_with_wrong_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[player]\nrandom_seed = \"seven\"\n").unwrap();

        assert!(matches!(Config::from_layers(&[path]), Err(VidPlayerError::Config(_))));
    }

    #[test]
    fn test_later_layer_wins_on_same_key() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("system.toml");
        let user = dir.path().join("user.toml");
        std::fs::write(&system, "[general]\nlog_level = \"info\"\n").unwrap();
        std::fs::write(&user, "[general]\nlog_level = \"debug\"\n").unwrap();

        let config = Config::from_layers(&[system, user]).unwrap();
        assert_eq!(config.general.log_level, "debug");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.player.random_seed = Some(99);
        let toml = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml).unwrap();

        assert_eq!(deserialized.player.random_seed, Some(99));
        assert_eq!(config.console.prompt, deserialized.console.prompt);
    }
}

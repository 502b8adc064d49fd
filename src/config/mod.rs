//! Shell-local configuration.
//!
//! Only settings this layer owns live here: the UI language override and the
//! logging switches. Everything game-related (game path, game language) is
//! persisted by the backend and reaches the shell through commands.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::locale::Language;

const SHELL_CONFIG_FILE_NAME: &str = "shell.yaml";

/// Persisted shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// UI language override. `None` derives the language from the game
    /// installation via [`Language::from_game_language`].
    pub language: Option<Language>,
    /// Log at debug level instead of info
    pub debug_logging: bool,
    /// Echo logs to the console in addition to the log file
    pub console_logging: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            language: None,
            debug_logging: false,
            console_logging: false,
        }
    }
}

/// Loads and saves the shell configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager rooted at `config_dir`, creating the directory
    /// if needed.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join(SHELL_CONFIG_FILE_NAME),
        })
    }

    /// Load the shell configuration, falling back to defaults when the file
    /// does not exist yet.
    pub fn load(&self) -> Result<ShellConfig> {
        if !self.config_path.exists() {
            tracing::info!(
                "Shell config not found at {}, using defaults",
                self.config_path
            );
            return Ok(ShellConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read shell config: {}", self.config_path))?;

        let config: ShellConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse shell config: {}", self.config_path))?;

        tracing::info!("Loaded shell config from {}", self.config_path);
        Ok(config)
    }

    /// Save the shell configuration.
    pub fn save(&self, config: &ShellConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize shell config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write shell config: {}", self.config_path))?;

        tracing::info!("Saved shell config to {}", self.config_path);
        Ok(())
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

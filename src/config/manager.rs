use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::input::Limits;
use crate::output::OutputMode;
use crate::paths;

/// Default settings in the `[filetr]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiletrConfig {
    /// Translation module name (`google` or `mymemory`).
    pub module: Option<String>,
    /// Destination language (ISO 639-1 code or English name).
    pub to: Option<String>,
    /// Where results go (`screen` or `file`).
    pub output: Option<OutputMode>,
}

/// Read limits in the `[limits]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_chars: Option<usize>,
    pub max_words: Option<usize>,
    pub max_sentences: Option<usize>,
}

/// Language-table settings in the `[languages]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// Row cap for the `languages` table; absent means the full list.
    pub limit: Option<usize>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/filetr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub filetr: FiletrConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub languages: LanguagesConfig,
}

/// Resolved settings after merging CLI arguments over the config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub module: String,
    pub to: String,
    pub output: OutputMode,
    pub limits: Limits,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub module: Option<String>,
    pub to: Option<String>,
    pub output: Option<OutputMode>,
    pub max_chars: Option<usize>,
    pub max_words: Option<usize>,
    pub max_sentences: Option<usize>,
}

/// Name of the module used when neither the CLI nor the config names one.
pub const DEFAULT_MODULE: &str = "google";

/// Resolves settings by merging CLI options over config file values.
///
/// # Errors
///
/// Returns an error when the destination language is missing from both
/// sources; every other setting has a default.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let module = options
        .module
        .clone()
        .or_else(|| config_file.filetr.module.clone())
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());

    let to = options
        .to
        .clone()
        .or_else(|| config_file.filetr.to.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (destination language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: filetr --to <lang> <file>\n  \
                 - Config file: ~/.config/filetr/config.toml"
            )
        })?;

    let output = options
        .output
        .or(config_file.filetr.output)
        .unwrap_or_default();

    let defaults = Limits::default();
    let limits = Limits {
        max_chars: options
            .max_chars
            .or(config_file.limits.max_chars)
            .unwrap_or(defaults.max_chars),
        max_words: options
            .max_words
            .or(config_file.limits.max_words)
            .unwrap_or(defaults.max_words),
        max_sentences: options
            .max_sentences
            .or(config_file.limits.max_sentences)
            .unwrap_or(defaults.max_sentences),
    };

    Ok(ResolvedConfig {
        module,
        to,
        output,
        limits,
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/filetr/config.toml`
    /// or `~/.config/filetr/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

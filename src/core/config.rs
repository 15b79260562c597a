//! Configuration module for `musicgraph`

use crate::core::models::SearchOrder;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$MUSIC_GRAPH";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, success, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for network files given by bare name
    #[serde(default)]
    pub networks_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Graph search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default path search order (bfs or dfs)
    #[serde(default)]
    pub order: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override network lookup directory
    pub networks_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override path search order
    pub search_order: Option<String>,
}

/// Fill `target` from `default` when it is empty; returns whether it changed
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$MUSIC_GRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/musicgraph`
    /// - macOS: `~/Library/Application Support/musicgraph`
    /// - Windows: `%APPDATA%\musicgraph`
    #[must_use]
    pub fn get_music_graph_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("musicgraph")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled, so
    /// upgrading picks up new settings without touching the user's values.
    /// `logging.file` is never filled: an empty file means file logging is off.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let filled = [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.paths.networks_dir, &defaults.paths.networks_dir),
            fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            fill_empty(&mut self.search.order, &defaults.search.order),
        ];
        filled.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; nothing is written back to disk. Only non-`None`
    /// values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(networks_dir) = &overrides.networks_dir {
            self.paths.networks_dir = Self::expand_variables(networks_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
        if let Some(order) = &overrides.search_order {
            self.search.order.clone_from(order);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds and `dconfig.toml` for debug builds, inside
    /// [`get_music_graph_dir`](Self::get_music_graph_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_music_graph_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$MUSIC_GRAPH` in a string to the config directory
    ///
    /// ```ignore
    /// let expanded = Config::expand_variables("$MUSIC_GRAPH/logs/musicgraph.log");
    /// // "/home/user/.config/musicgraph/logs/musicgraph.log"
    /// ```
    #[must_use]
    pub fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_music_graph_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$MUSIC_GRAPH` in path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.networks_dir = Self::expand_variables(&config.paths.networks_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults are
    /// compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// Missing fields in an existing file are filled from defaults and saved back.
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Same as [`load`](Self::load), for an explicit config file path
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            // First run: write the defaults so the user has a file to edit
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `networks_dir`, `reports_dir`, `order`.
    /// Directory keys also accept dashes (`networks-dir`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "networks_dir" | "networks-dir" => Some(self.paths.networks_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "order" | "search_order" | "search-order" => Some(self.search.order.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// `level` must name a log level, `verbose` a boolean and `order` a search order.
    /// This only changes the in-memory config; call [`save`](Self::save) to persist it.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid for it
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level: Level = value.parse()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "networks_dir" | "networks-dir" => self.paths.networks_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "order" | "search_order" | "search-order" => {
                let order: SearchOrder = value.parse()?;
                self.search.order = order.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset it to the value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "networks_dir" | "networks-dir" => self
                .paths
                .networks_dir
                .clone_from(&defaults.paths.networks_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "order" | "search_order" | "search-order" => {
                self.search.order.clone_from(&defaults.search.order);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the user config file
    ///
    /// The next [`load`](Self::load) recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        Self::reset_at(&Self::get_config_file_path())
    }

    /// Same as [`reset`](Self::reset), for an explicit config file path
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset_at(config_file: &Path) -> Result<(), std::io::Error> {
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Configured search order, falling back to breadth-first for unknown values
    #[must_use]
    pub fn search_order(&self) -> SearchOrder {
        self.search.order.parse().unwrap_or_default()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  networks_dir = \"{}\"", self.paths.networks_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[search]")?;
        writeln!(f, "  order = \"{}\"", self.search.order)?;

        Ok(())
    }
}

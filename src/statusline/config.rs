//! Status-line display configuration.
//!
//! A typed option set with a dotted-key access layer for the CLI
//! (`aiterm config set spacing.mode spacious`). Enumerated options are
//! validated at that boundary; an invalid value fails with a message listing
//! the accepted choices. The store itself is a plain value — it is loaded
//! once, passed explicitly into rendering, and persisted only by an explicit
//! [`StatusLineConfig::save`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// All recognized dotted option keys, in `config list` order.
pub const KEYS: &[&str] = &[
    "display.show_lines_changed",
    "display.show_current_time",
    "display.show_session_duration",
    "display.directory_mode",
    "spacing.mode",
    "spacing.min_gap",
    "spacing.max_gap",
    "spacing.show_separator",
];

/// Gap preset: fraction of terminal width plus default clamp bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingPreset {
    pub fraction: f64,
    pub min_gap: usize,
    pub max_gap: usize,
}

/// Named spacing profile controlling gap size as a share of terminal width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpacingMode {
    Minimal,
    #[default]
    Standard,
    Spacious,
}

impl SpacingMode {
    pub fn preset(self) -> SpacingPreset {
        match self {
            SpacingMode::Minimal => SpacingPreset {
                fraction: 0.15,
                min_gap: 5,
                max_gap: 20,
            },
            SpacingMode::Standard => SpacingPreset {
                fraction: 0.20,
                min_gap: 10,
                max_gap: 40,
            },
            SpacingMode::Spacious => SpacingPreset {
                fraction: 0.30,
                min_gap: 15,
                max_gap: 60,
            },
        }
    }
}

/// How the project segment labels the working directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DirectoryMode {
    #[default]
    Full,
    Basename,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_lines_changed: bool,
    pub show_current_time: bool,
    pub show_session_duration: bool,
    pub directory_mode: DirectoryMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingOptions {
    pub mode: SpacingMode,
    /// Explicit lower clamp; `None` means the preset's own minimum applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gap: Option<usize>,
    /// Explicit upper clamp; `None` means the preset's own maximum applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gap: Option<usize>,
    pub show_separator: bool,
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self {
            mode: SpacingMode::default(),
            min_gap: None,
            max_gap: None,
            show_separator: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLineConfig {
    pub display: DisplayOptions,
    pub spacing: SpacingOptions,
}

/// A dynamically-typed option value, for the dotted-key access layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(usize),
    Str(String),
}

impl ConfigValue {
    /// Parse a CLI-supplied literal: booleans and integers are recognized,
    /// everything else stays a string.
    pub fn parse(raw: &str) -> Self {
        if let Ok(b) = raw.parse::<bool>() {
            return Self::Bool(b);
        }
        if let Ok(n) = raw.parse::<usize>() {
            return Self::Int(n);
        }
        Self::Str(raw.to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(n) => write!(f, "{n}"),
            ConfigValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<usize> for ConfigValue {
    fn from(value: usize) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Validation failure from [`StatusLineConfig::set`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    UnknownKey(String),
    InvalidChoice {
        key: String,
        value: String,
        choices: String,
    },
    TypeMismatch {
        key: String,
        expected: &'static str,
    },
    InvalidGap(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(key) => write!(f, "unknown config key '{key}'"),
            ConfigError::InvalidChoice {
                key,
                value,
                choices,
            } => write!(f, "invalid value '{value}' for {key}. Valid choices: {choices}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "{key} expects {expected}")
            }
            ConfigError::InvalidGap(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl StatusLineConfig {
    /// Load from the default path, degrading to defaults on any problem.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path. A missing file is the common first-run
    /// case; a malformed file is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Config file location: `$AITERM_CONFIG_DIR/statusline.json` when the
    /// override is set, else the platform config directory.
    pub fn default_path() -> PathBuf {
        if let Ok(dir) = std::env::var("AITERM_CONFIG_DIR") {
            return PathBuf::from(dir).join("statusline.json");
        }
        choose_base_strategy()
            .map(|strategy| strategy.config_dir().join("aiterm").join("statusline.json"))
            .unwrap_or_else(|_| PathBuf::from("statusline.json"))
    }

    /// Persist to the default path, creating parent directories as needed.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Effective lower gap clamp: explicit override, else the preset's.
    pub fn min_gap(&self) -> usize {
        self.spacing
            .min_gap
            .unwrap_or_else(|| self.spacing.mode.preset().min_gap)
    }

    /// Effective upper gap clamp: explicit override, else the preset's.
    pub fn max_gap(&self) -> usize {
        self.spacing
            .max_gap
            .unwrap_or_else(|| self.spacing.mode.preset().max_gap)
    }

    /// Dotted-key lookup. Returns the effective value (preset defaults
    /// resolved), or `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        match key {
            "display.show_lines_changed" => Some(self.display.show_lines_changed.into()),
            "display.show_current_time" => Some(self.display.show_current_time.into()),
            "display.show_session_duration" => Some(self.display.show_session_duration.into()),
            "display.directory_mode" => {
                Some(ConfigValue::Str(self.display.directory_mode.to_string()))
            }
            "spacing.mode" => Some(ConfigValue::Str(self.spacing.mode.to_string())),
            "spacing.min_gap" => Some(self.min_gap().into()),
            "spacing.max_gap" => Some(self.max_gap().into()),
            "spacing.show_separator" => Some(self.spacing.show_separator.into()),
            _ => None,
        }
    }

    /// Dotted-key mutation with validation. Mutates in memory only; callers
    /// that want persistence follow up with [`save`](Self::save).
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        match key {
            "display.show_lines_changed" => {
                self.display.show_lines_changed = expect_bool(key, value)?;
            }
            "display.show_current_time" => {
                self.display.show_current_time = expect_bool(key, value)?;
            }
            "display.show_session_duration" => {
                self.display.show_session_duration = expect_bool(key, value)?;
            }
            "display.directory_mode" => {
                self.display.directory_mode = expect_enum::<DirectoryMode>(key, value)?;
            }
            "spacing.mode" => {
                self.spacing.mode = expect_enum::<SpacingMode>(key, value)?;
            }
            "spacing.min_gap" => {
                let n = expect_int(key, value)?;
                if n > self.max_gap() {
                    return Err(ConfigError::InvalidGap(format!(
                        "spacing.min_gap ({n}) must not exceed spacing.max_gap ({})",
                        self.max_gap()
                    )));
                }
                self.spacing.min_gap = Some(n);
            }
            "spacing.max_gap" => {
                let n = expect_int(key, value)?;
                if n < self.min_gap() {
                    return Err(ConfigError::InvalidGap(format!(
                        "spacing.max_gap ({n}) must not be below spacing.min_gap ({})",
                        self.min_gap()
                    )));
                }
                self.spacing.max_gap = Some(n);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn expect_bool(key: &str, value: ConfigValue) -> Result<bool, ConfigError> {
    match value {
        ConfigValue::Bool(b) => Ok(b),
        _ => Err(ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "a boolean (true/false)",
        }),
    }
}

fn expect_int(key: &str, value: ConfigValue) -> Result<usize, ConfigError> {
    match value {
        ConfigValue::Int(n) => Ok(n),
        _ => Err(ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "a non-negative integer",
        }),
    }
}

fn expect_enum<T>(key: &str, value: ConfigValue) -> Result<T, ConfigError>
where
    T: std::str::FromStr + VariantNames,
{
    let raw = match value {
        ConfigValue::Str(s) => s,
        other => other.to_string(),
    };
    raw.parse::<T>().map_err(|_| ConfigError::InvalidChoice {
        key: key.to_string(),
        value: raw,
        choices: T::VARIANTS.join(", "),
    })
}

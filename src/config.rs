//! Layout configuration
//!
//! [`TabStopConfig`] is the per-invocation layout setting. [`ElasticConfig`]
//! is what the command-line host persists in
//! `~/.config/elastic-tabs/config.yaml`: the layout setting plus how cells
//! are measured.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Spacing rules for turning column widths into stop positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStopConfig {
    /// Gap added after the widest cell of a column
    #[serde(default = "default_min_spacing")]
    pub min_spacing: f64,
    /// Smallest distance between consecutive stops (and from zero to the first)
    #[serde(default = "default_first_stop_minimum")]
    pub first_stop_minimum: f64,
}

fn default_min_spacing() -> f64 {
    5.0
}

fn default_first_stop_minimum() -> f64 {
    20.0
}

impl Default for TabStopConfig {
    fn default() -> Self {
        Self {
            min_spacing: default_min_spacing(),
            first_stop_minimum: default_first_stop_minimum(),
        }
    }
}

/// Which built-in measurement strategy the host uses
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// One unit per character
    #[default]
    Chars,
    /// One unit per terminal display column
    Columns,
    /// Glyph advances from a font file
    Font,
}

/// Errors loading or saving [`ElasticConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// No home/config directory could be determined
    NoConfigDir,
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_yaml::Error },
    Write { path: PathBuf, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "No config directory available"),
            Self::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path.display(), source)
            }
            Self::Write { path, message } => {
                write!(f, "Failed to write config to {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Host configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticConfig {
    #[serde(default)]
    pub tab_stops: TabStopConfig,
    #[serde(default)]
    pub measure: MeasureKind,
    /// Width of one character or column for `chars` / `columns` measuring
    #[serde(default = "default_unit")]
    pub unit: f64,
    /// Font file for `font` measuring
    #[serde(default)]
    pub font: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_unit() -> f64 {
    1.0
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            tab_stops: TabStopConfig::default(),
            measure: MeasureKind::default(),
            unit: default_unit(),
            font: None,
            font_size: default_font_size(),
        }
    }
}

impl ElasticConfig {
    /// Load config from the default location, or return defaults if missing
    /// or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`load_from`](Self::load_from), but a file that doesn't exist
    /// yet gives defaults
    ///
    /// Parse errors and other read failures are still returned.
    pub fn load_from_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| write_err(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| write_err(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| write_err(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

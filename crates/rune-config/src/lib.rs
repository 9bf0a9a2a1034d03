//! Rune Slides configuration
//!
//! Settings are read from `rune.toml`, and environment variables override
//! individual values without editing the file.
//!
//! ```toml
//! [presentation]
//! theme = "progress"
//! start_slide = 0
//!
//! [transitions]
//! slide_duration_ms = 350.0
//! slide_easing = "ease-in-out"
//!
//! [keys]
//! next = ["Right", "Space"]
//! previous = ["Left"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "rune.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for Rune Slides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuneConfig {
    /// Deck-level settings
    pub presentation: PresentationConfig,
    /// Slide transition timing
    pub transitions: TransitionConfig,
    /// Key bindings for navigation
    pub keys: KeysConfig,
}

/// Deck-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Theme name (`plain` or `progress`)
    pub theme: String,
    /// Slide to open on, useful while rehearsing a single section
    pub start_slide: usize,
}

/// Slide transition timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration of slide changes in milliseconds
    pub slide_duration_ms: f32,
    /// CSS easing name, e.g. `ease-in-out` or `cubic-bezier(0.4, 0, 0.2, 1)`
    pub slide_easing: String,
}

/// Key names bound to each navigation command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub next: Vec<String>,
    pub previous: Vec<String>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            theme: "plain".to_string(),
            start_slide: 0,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            slide_duration_ms: 300.0,
            slide_easing: "ease-in-out".to_string(),
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            next: keys(&["Right", "Down", "Space", "PageDown", "Enter", "n"]),
            previous: keys(&["Left", "Up", "PageUp", "Backspace", "p"]),
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `rune.toml` from the current directory, or return defaults if it
    /// is missing or invalid
    pub fn load_or_default() -> Self {
        Self::from_file_or_default(CONFIG_FILE)
    }

    /// Load `path`, falling back to defaults. A file that exists but does not
    /// parse is reported with a warning.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err @ ConfigError::Parse { .. }) => {
                tracing::warn!("{err}; using default configuration");
                Self::default()
            }
            Err(ConfigError::Read { .. }) => Self::default(),
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparsable numbers are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(theme) = std::env::var("RUNE_SLIDES_THEME") {
            self.presentation.theme = theme;
        }
        if let Ok(val) = std::env::var("RUNE_SLIDES_START") {
            if let Ok(start) = val.parse::<usize>() {
                self.presentation.start_slide = start;
            }
        }
        if let Ok(val) = std::env::var("RUNE_SLIDES_DURATION_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.transitions.slide_duration_ms = ms;
            }
        }
        if let Ok(easing) = std::env::var("RUNE_SLIDES_EASING") {
            self.transitions.slide_easing = easing;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

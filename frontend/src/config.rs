//! Frontend settings: built-in defaults, overridden by an optional TOML
//! file, overridden in turn by command-line flags (see `main.rs`).
//!
//! ```toml
//! scale = 2
//! sync_polarity = "low"
//! cycles_per_frame = 419200
//! screenshot_dir = "/tmp/shots"
//!
//! [keys]
//! "P2 Up" = "W"
//! "P2 Down" = "S"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use ttsim_core::core::InputButton;
use ttsim_core::device::raster::{SyncPolarity, VGA_640X480};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("[keys] names an unknown button: {0:?}")]
    UnknownButton(String),
}

/// Sync level the decoder starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    High,
    Low,
}

impl From<Polarity> for SyncPolarity {
    fn from(p: Polarity) -> Self {
        match p {
            Polarity::High => SyncPolarity::ActiveHigh,
            Polarity::Low => SyncPolarity::ActiveLow,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Integer window scale factor.
    pub scale: u32,
    pub sync_polarity: Polarity,
    /// Clock cycles simulated per displayed frame.
    pub cycles_per_frame: u64,
    /// Where F12 screenshots go (current directory if unset).
    pub screenshot_dir: Option<PathBuf>,
    /// Button name (as listed by the machine's input map) -> SDL scancode name.
    pub keys: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 1,
            sync_polarity: Polarity::High,
            cycles_per_frame: VGA_640X480.frame_cycles(),
            screenshot_dir: None,
            keys: BTreeMap::new(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/ttsim/config.toml` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ttsim").join("config.toml"))
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// if present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&text, &path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Every `[keys]` entry must name a button the machine accepts.
    pub fn check_key_names(&self, buttons: &[InputButton]) -> Result<(), ConfigError> {
        for name in self.keys.keys() {
            if !buttons.iter().any(|b| b.name == name) {
                return Err(ConfigError::UnknownButton(name.clone()));
            }
        }
        Ok(())
    }
}

//! # Configuration
//!
//! [`CanteenConfig`] is built in three layers: built-in defaults, an optional
//! TOML file, then `CANTEEN_*` environment variables. Later layers win.
//!
//! ```toml
//! checkout_delay_ms = 1500
//! channel_buffer = 32
//! seed_menu = true
//! order_ids = "sequential"   # or "random"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const ENV_CONFIG_PATH: &str = "CANTEEN_CONFIG";
const ENV_CHECKOUT_DELAY_MS: &str = "CANTEEN_CHECKOUT_DELAY_MS";
const ENV_CHANNEL_BUFFER: &str = "CANTEEN_CHANNEL_BUFFER";
const ENV_SEED_MENU: &str = "CANTEEN_SEED_MENU";
const ENV_ORDER_IDS: &str = "CANTEEN_ORDER_IDS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the order store numbers new orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderIdStrategy {
    /// `#0001`, `#0002`, ...
    #[default]
    Sequential,
    /// Four random digits. The store refuses an id that is already taken.
    Random,
}

impl FromStr for OrderIdStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(OrderIdStrategy::Sequential),
            "random" => Ok(OrderIdStrategy::Random),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanteenConfig {
    /// Simulated payment processing time.
    pub checkout_delay_ms: u64,
    /// Request queue size of every store actor.
    pub channel_buffer: usize,
    /// Load the standard catalog into the menu at start.
    pub seed_menu: bool,
    pub order_ids: OrderIdStrategy,
}

impl Default for CanteenConfig {
    fn default() -> Self {
        Self {
            checkout_delay_ms: 1500,
            channel_buffer: 32,
            seed_menu: true,
            order_ids: OrderIdStrategy::Sequential,
        }
    }
}

impl CanteenConfig {
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config file");
        Self::from_toml_str(path, &content)
    }

    /// Defaults, then the file named by `CANTEEN_CONFIG` if set, then the
    /// `CANTEEN_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var_os(ENV_CONFIG_PATH) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `CANTEEN_*` overrides read through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_CHECKOUT_DELAY_MS) {
            self.checkout_delay_ms = parse(ENV_CHECKOUT_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_CHANNEL_BUFFER) {
            self.channel_buffer = parse(ENV_CHANNEL_BUFFER, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED_MENU) {
            self.seed_menu = parse(ENV_SEED_MENU, &value)?;
        }
        if let Some(value) = lookup(ENV_ORDER_IDS) {
            self.order_ids = parse(ENV_ORDER_IDS, &value)?;
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "channel_buffer",
                value: "0".to_string(),
            });
        }
        debug!(config = ?self, "Config resolved");
        Ok(self)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

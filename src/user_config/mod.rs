//! Optional user configuration in `~/.lostfound/config.toml`.
//!
//! Every field has a default, so an absent file or an empty section is fine.
//! Command-line flags override what is read here.

mod loader;
pub use loader::{load_user_config, load_user_config_from};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::item::{AdmissionRules, DEFAULT_MAX_IMAGE_BYTES};
use crate::store::DEFAULT_SLOT_KEY;
use crate::utils::app_home;

pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

/// `[storage]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Where the slot file lives. Defaults to `~/.lostfound/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_slot_key")]
    pub key: String,
    /// Largest slot value accepted, in bytes. No limit when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_slot_key(),
            quota_bytes: None,
        }
    }
}

impl StorageConfig {
    /// Configured data directory, else `data/` under the app home.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            app_home()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("data")
        })
    }
}

/// `[posting]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PostingConfig {
    #[serde(default)]
    pub submit_delay_ms: u64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 0,
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl PostingConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub fn admission_rules(&self) -> AdmissionRules {
        AdmissionRules {
            max_image_bytes: self.max_image_bytes,
        }
    }
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub posting: PostingConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    app_home().map(|home| home.join(CONFIG_FILENAME))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;

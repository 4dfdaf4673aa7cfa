use std::path::PathBuf;

use thiserror::Error;

use crate::persistence::CART_STORAGE_KEY;

pub const ENV_STORAGE_DIR: &str = "CART_STORAGE_DIR";
pub const ENV_STORAGE_KEY: &str = "CART_STORAGE_KEY";
pub const ENV_BUFFER_SIZE: &str = "CART_BUFFER_SIZE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid CART_BUFFER_SIZE {0:?}: expected a positive integer")]
    InvalidBufferSize(String),
    #[error("CART_STORAGE_KEY must not be empty")]
    EmptyStorageKey,
}

/// Runtime settings for a [`CartSystem`](super::CartSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Directory of the file-backed snapshot store.
    pub storage_dir: PathBuf,
    /// Key the cart snapshot is stored under.
    pub storage_key: String,
    /// Mailbox size of every actor.
    pub buffer_size: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".cart"),
            storage_key: CART_STORAGE_KEY.to_string(),
            buffer_size: 32,
        }
    }
}

impl CartConfig {
    /// Reads `CART_STORAGE_DIR`, `CART_STORAGE_KEY` and `CART_BUFFER_SIZE`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_STORAGE_DIR) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY) {
            if key.trim().is_empty() {
                return Err(ConfigError::EmptyStorageKey);
            }
            config.storage_key = key;
        }
        if let Some(raw) = lookup(ENV_BUFFER_SIZE) {
            config.buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidBufferSize(raw)),
            };
        }

        Ok(config)
    }
}

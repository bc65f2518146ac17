//! App Configuration
//!
//! Optional JSON document stored under `todos.config` in the same
//! storage as the todos. Missing fields fall back to defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, DEFAULT_CONTENT};
use crate::storage::{KeyValueStorage, DEFAULT_NAMESPACE};

/// Storage key holding the configuration
pub const CONFIG_KEY: &str = "todos.config";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_content() -> String {
    DEFAULT_CONTENT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    /// Key prefix for todo records
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Content of a todo created without text
    #[serde(default = "default_content")]
    pub default_content: String,
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            default_content: default_content(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config from storage, defaults when absent
    pub fn load(storage: &impl KeyValueStorage) -> DomainResult<Self> {
        match storage.get(CONFIG_KEY)? {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to info
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

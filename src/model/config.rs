use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `config.toml` in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage key holding the whole category map
    #[serde(default = "default_key")]
    pub key: String,
    /// Quiescence required after the last change before persisting
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            key: default_key(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_key() -> String {
    "tasks".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Topic key to open on launch instead of the topic list
    #[serde(default)]
    pub default_topic: Option<String>,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme colors, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_topic: None,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` wins when set
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file path (default: `lb.log` in the data directory)
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

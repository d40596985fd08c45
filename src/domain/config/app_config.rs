//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub data_path: Option<String>,
    pub auto_listen: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            data_path: None,
            auto_listen: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            data_path: other.data_path.or(self.data_path),
            auto_listen: other.auto_listen.or(self.auto_listen),
        }
    }

    /// Get auto_listen setting, or false if not set
    pub fn auto_listen_or_default(&self) -> bool {
        self.auto_listen.unwrap_or(false)
    }
}

use serde::{Deserialize, Serialize};

/// Demo-host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logical profile resource the screen is routed to.
    pub profile_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_url: "http://localhost:3000/users/1/profile".to_string(),
        }
    }
}

impl Config {
    /// Load from the platform config directory, then apply environment
    /// overrides. A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let mut config = Self::from_disk().unwrap_or_default();

        if let Ok(url) = std::env::var("PORTICO_PROFILE_URL") {
            config.profile_url = url;
        }

        config
    }

    fn from_disk() -> Option<Self> {
        let config_path = dirs::config_dir()?.join("portico").join("config.json");
        let content = std::fs::read_to_string(config_path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

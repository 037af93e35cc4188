use std::env;

use serde::{Deserialize, Serialize};

fn default_max_fetches() -> usize {
    50
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Upper bound on concurrent dictionary fetches
    #[serde(default = "default_max_fetches")]
    pub max_fetches: usize,
    /// Per-request timeout; a request past it counts as an unfetchable page
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let max_fetches = env::var("MAX_FETCHES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_fetches);

        let timeout_seconds = env::var("FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            max_fetches,
            timeout_seconds,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_fetches: default_max_fetches(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

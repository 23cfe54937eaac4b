//! Directory settings loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::LatencyProfile;

/// Configuration values controlling the simulated directory.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// Number of users generated for the session.
    #[ortho_config(default = 24)]
    pub user_count: u32,
    /// JSON file holding persisted preferences. In-memory when unset.
    pub store_path: Option<PathBuf>,
    /// Lower bound of the simulated latency in milliseconds.
    #[ortho_config(default = 200)]
    pub latency_min_ms: u64,
    /// Upper bound of the simulated latency in milliseconds.
    #[ortho_config(default = 400)]
    pub latency_max_ms: u64,
}

impl DirectorySettings {
    /// Latency range the simulated source draws from.
    pub fn latency_profile(&self) -> LatencyProfile {
        LatencyProfile::new(
            Duration::from_millis(self.latency_min_ms),
            Duration::from_millis(self.latency_max_ms),
        )
    }
}

use anyhow::{Result, bail};
use clap::Args;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the scene server lives and how long each request may take.
#[derive(Args, Clone, Debug)]
pub struct SceneConfig {
    /// Base URL of the scene-control HTTP server
    #[arg(long, global = true, env = "SCENE_SERVER_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "SCENE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl SceneConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            bail!("base URL must start with http:// or https:// (got {})", self.base_url);
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

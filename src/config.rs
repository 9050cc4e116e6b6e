//! Server configuration - command-line flags with environment fallbacks

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Shared secret required in the `x-api-key` header; open access when unset
    #[arg(long, env = "API_KEY")]
    pub api_key: Option<String>,

    /// Requests allowed per client per window (0 disables limiting)
    #[arg(long, env = "RATE_LIMIT_MAX", default_value = "100")]
    pub rate_limit_max: u32,

    /// Rate-limit window length in seconds
    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS", default_value = "900")]
    pub rate_limit_window_secs: u64,

    /// Key rate limiting on the first `x-forwarded-for` hop; only safe behind
    /// a proxy that overwrites the header
    #[arg(long, env = "TRUST_PROXY")]
    pub trust_proxy: bool,

    /// Directory of static files served for non-API paths
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_key: None,
            rate_limit_max: 100,
            rate_limit_window_secs: 900,
            trust_proxy: false,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// IP literals (bracketed or not) are used as-is, anything else is resolved
    pub async fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let host = self.host.trim().trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }
        tokio::net::lookup_host((host, self.port))
            .await
            .with_context(|| format!("Failed to resolve HOST '{}'", self.host))?
            .next()
            .ok_or_else(|| anyhow!("No address found for HOST '{}'", self.host))
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    /// Blank keys count as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

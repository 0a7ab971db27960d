use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

pub const DEFAULT_APP_DOMAIN: &str = "fundboard.app";

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Base URL of the hosted data store; also the origin of stored images.
    pub data_api_url: String,
    pub data_api_key: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub app_domain: String,
    /// Where the verification form posts its code.
    pub verify_action: String,
    /// Target of the verification form's "Resend" link.
    pub resend_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("FB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid FB_LISTEN_ADDR")?;
        let data_api_url =
            std::env::var("FB_DATA_API_URL").context("FB_DATA_API_URL must be set")?;
        let data_api_key =
            std::env::var("FB_DATA_API_KEY").context("FB_DATA_API_KEY must be set")?;
        let cors_allow = env_or("FB_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("FB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid FB_REQUEST_TIMEOUT_MS")?;
        if timeout_ms == 0 {
            anyhow::bail!("FB_REQUEST_TIMEOUT_MS must be greater than zero");
        }
        Ok(Self {
            listen_addr,
            data_api_url,
            data_api_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            app_domain: env_or("FB_APP_DOMAIN", DEFAULT_APP_DOMAIN),
            verify_action: env_or("FB_VERIFY_ACTION", "/auth/verify"),
            resend_url: env_or("FB_RESEND_URL", "/auth/resend"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Command-line and environment configuration.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--api-key` | `ALPHA_VANTAGE_API_KEY` | unset |
//! | `--provider-url` | `ALPHA_VANTAGE_BASE_URL` | `https://www.alphavantage.co` |
//! | `--bind` | `TICKERTAPE_BIND` | `127.0.0.1` |
//! | `--port` | `TICKERTAPE_PORT` | `3000` |
//! | `--symbol` | `TICKERTAPE_SYMBOL` | `IBM` |
//! | `--proxy-url` | `TICKERTAPE_PROXY_URL` | `http://<bind address>/api/stocks` |

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tickertape_core::{ApiKey, ProviderConfig, DEFAULT_PROVIDER_URL, DEFAULT_SYMBOL};

use crate::error::WebError;

/// Daily stock price table and chart, backed by Alpha Vantage.
#[derive(Debug, Clone, Parser)]
#[command(name = "tickertape", author, version, about)]
pub struct Cli {
    /// Alpha Vantage API key. Without it every fetch fails with a configuration error.
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the Alpha Vantage API.
    #[arg(long, env = "ALPHA_VANTAGE_BASE_URL", default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,

    /// Interface to listen on.
    #[arg(long, env = "TICKERTAPE_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    #[arg(long, env = "TICKERTAPE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Symbol displayed on the page.
    #[arg(long, env = "TICKERTAPE_SYMBOL", default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Proxy endpoint the page loads from. Defaults to this server's `/api/stocks`.
    #[arg(long, env = "TICKERTAPE_PROXY_URL")]
    pub proxy_url: Option<String>,
}

impl Cli {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api_key.clone().and_then(ApiKey::new))
            .with_base_url(&self.provider_url)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, WebError> {
        let ip = self
            .bind
            .parse::<IpAddr>()
            .map_err(|_| WebError::InvalidBindAddress {
                value: self.bind.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Explicit `--proxy-url`, else this server's own `/api/stocks`. IPv6 hosts are bracketed.
    pub fn proxy_endpoint(&self) -> Result<String, WebError> {
        match &self.proxy_url {
            Some(url) => Ok(url.clone()),
            None => Ok(format!("http://{}/api/stocks", self.socket_addr()?)),
        }
    }
}

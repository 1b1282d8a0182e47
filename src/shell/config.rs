use anyhow::Context;
use std::net::SocketAddr;

pub const HTTP_ADDR_VAR: &str = "ATTENDANCE_HTTP_ADDR";
pub const LOG_VAR: &str = "ATTENDANCE_LOG";

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_addr: SocketAddr,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(HTTP_ADDR_VAR).unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr
            .parse()
            .with_context(|| format!("{HTTP_ADDR_VAR} is not a socket address: {raw_addr}"))?;
        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            http_addr,
            log_filter,
        })
    }
}

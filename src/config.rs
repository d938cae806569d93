use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection acquire timeout in seconds; bounds how long a request
    /// waits on an exhausted pool
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Comments shown per page. The comment page query and the pagination
    /// window are both driven by this one value.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_max_connections() -> u32 { 10 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_page_size() -> i64 { 5 }

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .context("DATABASE_URL must be set")?,
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_max_connections),
                acquire_timeout_secs: std::env::var("DATABASE_ACQUIRE_TIMEOUT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_acquire_timeout),
                idle_timeout_secs: std::env::var("DATABASE_IDLE_TIMEOUT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_idle_timeout),
            },
            pagination: PaginationConfig {
                page_size: std::env::var("COMMENTS_PER_PAGE")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .filter(|&n| n > 0)
                    .unwrap_or_else(default_page_size),
            },
        })
    }
}

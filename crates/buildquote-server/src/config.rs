//! Server configuration
//!
//! Read from the environment after `.env` has been loaded.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DATA_PATH: &str = "data/quotes.json";

/// Configuration for the quote store server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`)
    pub host: String,
    /// Listen port (`PORT`)
    pub port: u16,
    /// JSON file holding every quote (`QUOTES_DATA_PATH`), relative to the working directory
    pub data_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let data_path = std::env::var("QUOTES_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

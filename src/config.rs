// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SUI_NETWORK` | `mainnet` or `testnet` | `testnet` |
//! | `SUI_RPC_URL` | JSON-RPC endpoint, overrides the network default | network full node |
//! | `COIN_PAGE_LIMIT` | Page size for coin queries | node default |
//! | `RPC_TIMEOUT_SECS` | Timeout for each RPC request | `30` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::time::Duration;

use crate::blockchain::network_by_key;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const SUI_NETWORK_ENV: &str = "SUI_NETWORK";
pub const SUI_RPC_URL_ENV: &str = "SUI_RPC_URL";
pub const COIN_PAGE_LIMIT_ENV: &str = "COIN_PAGE_LIMIT";
pub const RPC_TIMEOUT_SECS_ENV: &str = "RPC_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub network_name: &'static str,
    pub rpc_url: url::Url,
    pub coin_page_limit: Option<u32>,
    pub rpc_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            name,
            reason: reason.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(PORT_ENV, e))?,
            None => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| ConfigError::invalid(HOST_ENV, e))?;

        let network = network_by_key(lookup(SUI_NETWORK_ENV).as_deref())
            .map_err(|e| ConfigError::invalid(SUI_NETWORK_ENV, e))?;
        let rpc_url = lookup(SUI_RPC_URL_ENV)
            .unwrap_or_else(|| network.rpc_url.to_string())
            .parse::<url::Url>()
            .map_err(|e| ConfigError::invalid(SUI_RPC_URL_ENV, e))?;

        let coin_page_limit = match lookup(COIN_PAGE_LIMIT_ENV) {
            Some(raw) => {
                let limit = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::invalid(COIN_PAGE_LIMIT_ENV, e))?;
                if limit == 0 {
                    return Err(ConfigError::invalid(COIN_PAGE_LIMIT_ENV, "must be positive"));
                }
                Some(limit)
            }
            None => None,
        };

        let rpc_timeout = match lookup(RPC_TIMEOUT_SECS_ENV) {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::invalid(RPC_TIMEOUT_SECS_ENV, e))?,
            ),
            None => DEFAULT_RPC_TIMEOUT,
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::invalid(
                    LOG_FORMAT_ENV,
                    format!("`{other}` (expected `json` or `pretty`)"),
                ))
            }
        };

        Ok(Self {
            bind_addr,
            network_name: network.name,
            rpc_url,
            coin_page_limit,
            rpc_timeout,
            log_format,
        })
    }
}

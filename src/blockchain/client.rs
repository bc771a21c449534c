// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sui JSON-RPC client for coin queries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use super::source::CoinSource;
use super::types::CoinPage;

/// Sui full node JSON-RPC client.
pub struct SuiRpcClient {
    /// Endpoint URL
    rpc_url: url::Url,
    /// Shared HTTP client (connection pool + timeout)
    http: reqwest::Client,
    /// Page size sent with `suix_getCoins`; `None` uses the node default
    page_limit: Option<u32>,
    /// JSON-RPC request id counter
    next_id: AtomicU64,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl SuiRpcClient {
    /// Create a new client for an RPC endpoint.
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self, SuiClientError> {
        let rpc_url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| SuiClientError::InvalidRpcUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuiClientError::Transport(e.to_string()))?;

        Ok(Self {
            rpc_url,
            http,
            page_limit: None,
            next_id: AtomicU64::new(1),
        })
    }

    /// Set the page size requested from `suix_getCoins`.
    pub fn with_page_limit(mut self, limit: Option<u32>) -> Self {
        self.page_limit = limit;
        self
    }

    /// Get the endpoint URL.
    pub fn rpc_url(&self) -> &url::Url {
        &self.rpc_url
    }

    /// Get the latest checkpoint sequence number.
    pub async fn get_latest_checkpoint(&self) -> Result<u64, SuiClientError> {
        let raw: String = self
            .call("sui_getLatestCheckpointSequenceNumber", json!([]))
            .await?;
        raw.parse()
            .map_err(|e| SuiClientError::Decode(format!("Invalid checkpoint number: {}", e)))
    }

    /// Issue one JSON-RPC call and decode its `result`.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, SuiClientError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .http
            .post(self.rpc_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SuiClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuiClientError::Transport(format!(
                "{} returned HTTP {}",
                method, status
            )));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| SuiClientError::Decode(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(SuiClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let result = body
            .result
            .ok_or_else(|| SuiClientError::Decode(format!("{} returned no result", method)))?;

        serde_json::from_value(result).map_err(|e| SuiClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CoinSource for SuiRpcClient {
    async fn get_coins(
        &self,
        owner: &str,
        coin_type: &str,
        cursor: Option<String>,
    ) -> Result<CoinPage, SuiClientError> {
        self.call(
            "suix_getCoins",
            json!([owner, coin_type, cursor, self.page_limit]),
        )
        .await
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum SuiClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed RPC response: {0}")]
    Decode(String),
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::{CoinSource, SuiRpcClient};

#[derive(Clone)]
pub struct AppState {
    /// Where payment coins are looked up.
    pub coins: Arc<dyn CoinSource>,
    /// Node probed by the readiness check. `None` skips the check.
    pub node: Option<Arc<SuiRpcClient>>,
}

impl AppState {
    /// State backed by a live node for both coin queries and readiness.
    pub fn new(client: SuiRpcClient) -> Self {
        let client = Arc::new(client);
        Self {
            coins: client.clone(),
            node: Some(client),
        }
    }

    /// State backed by an arbitrary coin source, without a node to probe.
    pub fn with_source(coins: Arc<dyn CoinSource>) -> Self {
        Self { coins, node: None }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sui network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Identifier accepted in configuration
    pub key: &'static str,
    /// Public full node JSON-RPC endpoint
    pub rpc_url: &'static str,
}

/// Sui Mainnet configuration.
pub const SUI_MAINNET: NetworkConfig = NetworkConfig {
    name: "Sui Mainnet",
    key: "mainnet",
    rpc_url: "https://fullnode.mainnet.sui.io:443",
};

/// Sui Testnet configuration.
pub const SUI_TESTNET: NetworkConfig = NetworkConfig {
    name: "Sui Testnet",
    key: "testnet",
    rpc_url: "https://fullnode.testnet.sui.io:443",
};

/// Resolve a configured network name, defaulting to testnet.
pub fn network_by_key(raw: Option<&str>) -> Result<NetworkConfig, String> {
    let value = raw.unwrap_or(SUI_TESTNET.key).trim().to_ascii_lowercase();
    [SUI_MAINNET, SUI_TESTNET]
        .into_iter()
        .find(|network| network.key == value)
        .ok_or_else(|| format!("Unsupported network `{value}` (expected `mainnet` or `testnet`)"))
}

/// Native gas coin type, short address form.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Native gas coin type, fully padded address form.
pub const SUI_COIN_TYPE_LONG: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI";

/// Whether `coin_type` names the native gas coin.
///
/// Both spellings of the framework address are accepted; any other
/// spelling is treated as a generic coin.
pub fn is_native_coin(coin_type: &str) -> bool {
    coin_type == SUI_COIN_TYPE || coin_type == SUI_COIN_TYPE_LONG
}

/// On-chain object identifier (`0x`-prefixed hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        ObjectId(value.to_string())
    }
}

/// Object content digest (base58), opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectDigest(pub String);

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectDigest {
    fn from(value: &str) -> Self {
        ObjectDigest(value.to_string())
    }
}

/// Object version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceNumber(pub u64);

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to one specific version of an object.
///
/// Transactions must name the exact version they consume, so two refs to
/// the same id at different versions are different inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: SequenceNumber,
    pub digest: ObjectDigest,
}

/// A coin object as returned by `suix_getCoins`.
///
/// The node encodes `version` and `balance` as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    pub coin_type: String,
    pub coin_object_id: ObjectId,
    #[serde(deserialize_with = "u64_from_str_or_num")]
    pub version: u64,
    pub digest: ObjectDigest,
    #[serde(deserialize_with = "u64_from_str_or_num")]
    pub balance: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_transaction: Option<String>,
}

impl CoinRecord {
    /// Reference to this coin at the observed version.
    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef {
            object_id: self.coin_object_id.clone(),
            version: SequenceNumber(self.version),
            digest: self.digest.clone(),
        }
    }
}

/// One page of coins plus the cursor to continue from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPage {
    pub data: Vec<CoinRecord>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

fn u64_from_str_or_num<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
        Raw::Num(n) => Ok(n),
    }
}

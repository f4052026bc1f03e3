// wallet-core/src/network/models.rs
//
// Data models exchanged with a Cosmos REST/RPC gateway

use serde::{Deserialize, Serialize};

// =============================================================================
// ACCOUNT
// =============================================================================

/// On-chain account state needed to sign a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    /// Number assigned by the chain when the account was first funded
    #[serde(with = "string_or_number")]
    pub account_number: u64,
    /// Count of transactions already signed by this account
    #[serde(with = "string_or_number")]
    pub sequence: u64,
}

impl AccountInfo {
    pub fn new(address: impl Into<String>, account_number: u64, sequence: u64) -> Self {
        Self {
            address: address.into(),
            account_number,
            sequence,
        }
    }
}

// =============================================================================
// BROADCAST
// =============================================================================

/// How long the node waits before answering a broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BroadcastMode {
    /// Return after the transaction passes `CheckTx`
    #[default]
    #[serde(rename = "BROADCAST_MODE_SYNC")]
    Sync,
    /// Return immediately
    #[serde(rename = "BROADCAST_MODE_ASYNC")]
    Async,
    /// Return once the transaction is committed
    #[serde(rename = "BROADCAST_MODE_BLOCK")]
    Block,
}

impl BroadcastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastMode::Sync => "BROADCAST_MODE_SYNC",
            BroadcastMode::Async => "BROADCAST_MODE_ASYNC",
            BroadcastMode::Block => "BROADCAST_MODE_BLOCK",
        }
    }
}

impl std::fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// Lowercase hex of the UTF-8 JSON, as expected by smart-contract query
/// endpoints.
pub fn encode_query(query: &serde_json::Value) -> String {
    hex::encode(query.to_string())
}

// Cosmos REST returns u64 fields as decimal strings.
mod string_or_number {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/network/traits.rs
//
// Chain RPC Gateway - injected capability
//
// The crate ships no transport. Callers provide a `ChainClient` backed by
// whatever HTTP/gRPC stack they use; the wallet client only hands it hex
// queries and raw transaction bytes.

use crate::error::WalletResult;
use crate::network::models::{AccountInfo, BroadcastMode};
use async_trait::async_trait;

/// Network operations the wallet needs from a Cosmos node.
///
/// Implementations report transport or node failures as
/// `WalletError::Chain`; the wallet propagates them unchanged.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Smart-contract query. `query_hex` is the lowercase hex of the JSON
    /// query (see [`encode_query`](crate::network::encode_query)).
    async fn query_contract(&self, contract: &str, query_hex: &str)
        -> WalletResult<serde_json::Value>;

    /// Account number and sequence for `address`.
    async fn get_account(&self, address: &str) -> WalletResult<AccountInfo>;

    /// Submit encoded `TxRaw` bytes.
    async fn broadcast(&self, tx_bytes: &[u8], mode: BroadcastMode)
        -> WalletResult<serde_json::Value>;
}

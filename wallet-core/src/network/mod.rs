// wallet-core/src/network/mod.rs
//
// Network Module - Chain RPC Gateway
//
// - traits: `ChainClient`, the injected query / account / broadcast capability
// - models: account info, broadcast mode, query encoding

pub mod models;
pub mod traits;

pub use models::*;
pub use traits::*;

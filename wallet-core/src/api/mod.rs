// wallet-core/src/api/mod.rs
//
// Public facade over the crypto, chain and network layers

pub mod client;

pub use client::{WalletClient, DEFAULT_MNEMONIC_STRENGTH};

// wallet-core/src/lib.rs

//! Cosmos wallet core
//!
//! BIP-39 mnemonics, BIP-32/44 secp256k1 key derivation, bech32 account
//! addresses and offline `SIGN_MODE_DIRECT` transaction signing for
//! Cosmos SDK chains. Network access goes through the injected
//! [`network::ChainClient`] capability.
//!
//! ```no_run
//! use wallet_core::{WalletClient, WalletConfig};
//!
//! # fn main() -> wallet_core::WalletResult<()> {
//! let client = WalletClient::new(WalletConfig::new("air", "air-testnet-1"))?;
//! let mnemonic = client.generate_mnemonic(256)?;
//! let address = client.get_address(mnemonic.phrase(), true)?;
//! assert!(address.starts_with("air1"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod network;

pub use api::WalletClient;
pub use config::WalletConfig;
pub use error::{WalletError, WalletResult};

// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Generation**: BIP-39 phrases (12/24 words) via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 secp256k1 key pairs via [`KeyDeriver`].
//! - **Derivation Paths**: parsed `m/44'/118'/…` paths via [`HdPath`].
//! - **Hashing**: SHA-256 / RIPEMD-160 / Hash160 helpers in [`hash`].

pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{KeyDeriver, KeyPair};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{HdPath, PathSegment};

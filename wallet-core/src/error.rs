// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Address Error: {0}")]
    Address(#[from] AddressError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Encoding Error: {0}")]
    Encoding(String),

    #[error("Chain Error: {0}")]
    Chain(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid strength: {0} bits. Expected 128 or 256.")]
    InvalidStrength(usize),

    #[error("Invalid word count: {0}. Expected 12 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumMismatch,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailure(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Signing failed: {0}")]
    SigningFailure(String),

    #[error("Public key too large: {0} bytes (max 255)")]
    KeyTooLarge(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address prefix: {0}")]
    InvalidPrefix(String),

    #[error("Malformed address: {0}")]
    MalformedAddress(String),
}

impl From<prost::DecodeError> for WalletError {
    fn from(e: prost::DecodeError) -> Self {
        WalletError::Encoding(e.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(e: serde_json::Error) -> Self {
        WalletError::Encoding(e.to_string())
    }
}

// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │        secp256k1 (BIP-32, m/44'/118'/…)         │
// │                    │                            │
// │                    ▼                            │
// │   KeyPair { private (32B), public (33B SEC1) }  │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;

use crate::crypto::paths::HdPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Derived secp256k1 key pair.
///
/// The private key is zeroized on drop and redacted from `Debug`.
pub struct KeyPair {
    private_key: Zeroizing<[u8; 32]>,
    public_key: [u8; 33],
    path: HdPath,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .field("path", &self.path.to_string())
            .finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Build a key pair from a raw private key.
    pub fn from_private_key(private_key: Zeroizing<[u8; 32]>, path: HdPath) -> WalletResult<Self> {
        let public_key = Secp256k1Deriver::public_key(&*private_key)?;
        Ok(Self {
            private_key,
            public_key,
            path,
        })
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Compressed SEC1 public key
    #[inline]
    pub fn public_key(&self) -> &[u8; 33] {
        &self.public_key
    }

    #[inline]
    pub fn path(&self) -> &HdPath {
        &self.path
    }
}

// =============================================================================
// DERIVER
// =============================================================================
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the key pair at `path` from a BIP-39 seed.
    ///
    /// Identical `(seed, path)` always yields the identical key pair.
    pub fn derive(seed: &[u8], path: &HdPath) -> WalletResult<KeyPair> {
        Self::validate_seed(seed)?;
        let private_key = Secp256k1Deriver::derive(seed, path)?;
        KeyPair::from_private_key(private_key, path.clone())
    }

    /// Derive `base_path/i` for every `i` in `indices`.
    pub fn derive_batch(
        seed: &[u8],
        base_path: &HdPath,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<KeyPair>> {
        Self::validate_seed(seed)?;

        let keys = Secp256k1Deriver::derive_batch(seed, base_path, indices.clone())?;
        keys.into_iter()
            .zip(indices)
            .map(|(private_key, index)| {
                KeyPair::from_private_key(private_key, base_path.child(index)?)
            })
            .collect()
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != 64 {
            return Err(WalletError::Crypto(CryptoError::DerivationFailure(format!(
                "Invalid seed length: expected 64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/chains/cosmos/address.rs
//
// Cosmos Address Module - bech32 account addresses
// BIP-173 (bech32), Hash160 (RIPEMD160 ∘ SHA256), secp256k1

use crate::crypto::hash::hash160;
use crate::error::{AddressError, WalletError, WalletResult};
use bech32::{FromBase32, ToBase32, Variant};

/// Longest string BIP-173 allows for a bech32 encoding.
pub const MAX_ADDRESS_LENGTH: usize = 90;

/// Longest human-readable part BIP-173 allows.
pub const MAX_PREFIX_LENGTH: usize = 83;

/// Prefix and payload recovered from a bech32 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    pub prefix: String,
    pub payload: Vec<u8>,
}

impl DecodedAddress {
    /// The payload as bech32 5-bit words (values 0..32).
    pub fn words(&self) -> Vec<u8> {
        self.payload.to_base32().into_iter().map(|w| w.to_u8()).collect()
    }
}

/// Cosmos bech32 address codec
///
/// # Flow:  Public Key (33B) → SHA-256 → RIPEMD-160 → payload (20B) → bech32(prefix)
pub struct CosmosAddress;

impl CosmosAddress {
    // =========================================================================
    // ENCODE
    // =========================================================================

    /// Encode `payload` under `prefix`.
    ///
    /// The prefix must be set explicitly: empty, uppercase or non-printable
    /// prefixes are rejected with `InvalidPrefix`.
    pub fn encode(prefix: &str, payload: &[u8]) -> WalletResult<String> {
        Self::validate_prefix(prefix)?;

        let encoded = bech32::encode(prefix, payload.to_base32(), Variant::Bech32)
            .map_err(|e| WalletError::Address(AddressError::InvalidPrefix(e.to_string())))?;

        if encoded.len() > MAX_ADDRESS_LENGTH {
            return Err(WalletError::InvalidInput(format!(
                "encoded address is {} characters, bech32 allows at most {}",
                encoded.len(),
                MAX_ADDRESS_LENGTH
            )));
        }
        Ok(encoded)
    }

    /// Account address for a compressed secp256k1 public key.
    pub fn from_public_key(prefix: &str, public_key: &[u8]) -> WalletResult<String> {
        Self::encode(prefix, &hash160(public_key))
    }

    // =========================================================================
    // DECODE
    // =========================================================================

    /// Decode and validate a bech32 address.
    ///
    /// Charset, checksum, case, variant (bech32m is rejected), length and
    /// padding violations all map to `MalformedAddress`.
    pub fn decode(address: &str) -> WalletResult<DecodedAddress> {
        if address.len() > MAX_ADDRESS_LENGTH {
            return Err(malformed(format!(
                "length {} exceeds {}",
                address.len(),
                MAX_ADDRESS_LENGTH
            )));
        }

        let (prefix, words, variant) =
            bech32::decode(address).map_err(|e| malformed(e.to_string()))?;

        if variant != Variant::Bech32 {
            return Err(malformed("bech32m checksum, expected bech32".to_string()));
        }
        if prefix.is_empty() {
            return Err(malformed("empty prefix".to_string()));
        }

        let payload = Vec::<u8>::from_base32(&words).map_err(|e| malformed(e.to_string()))?;

        Ok(DecodedAddress { prefix, payload })
    }

    /// Re-encode an existing address under `new_prefix`.
    ///
    /// A decode failure is returned as `MalformedAddress`.
    pub fn reencode(new_prefix: &str, address: &str) -> WalletResult<String> {
        let decoded = Self::decode(address)?;
        Self::encode(new_prefix, &decoded.payload)
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::decode(address).is_ok()
    }

    pub fn is_valid_with_prefix(address: &str, prefix: &str) -> bool {
        matches!(Self::decode(address), Ok(decoded) if decoded.prefix == prefix)
    }

    /// Check a human-readable prefix against the bech32 rules.
    pub fn validate_prefix(prefix: &str) -> WalletResult<()> {
        let reason = if prefix.is_empty() {
            Some("prefix is empty".to_string())
        } else if prefix.len() > MAX_PREFIX_LENGTH {
            Some(format!("prefix longer than {} characters", MAX_PREFIX_LENGTH))
        } else if !prefix.bytes().all(|b| (33..=126).contains(&b)) {
            Some(format!("'{}' contains characters outside ASCII 33-126", prefix))
        } else if prefix.bytes().any(|b| b.is_ascii_uppercase()) {
            Some(format!("'{}' must be lowercase", prefix))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(WalletError::Address(AddressError::InvalidPrefix(reason))),
            None => Ok(()),
        }
    }
}

fn malformed(reason: String) -> WalletError {
    WalletError::Address(AddressError::MalformedAddress(reason))
}

// =============================================================================
// TESTS
// =============================================================================

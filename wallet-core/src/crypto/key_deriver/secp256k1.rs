// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation (BIP-32 / BIP-44)
//
// Used by Cosmos SDK chains (coin type 118 and friends).
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::{HdPath, PathSegment};
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, XPrv};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroizing;

/// secp256k1 Key Deriver (BIP-32)
///
/// Each segment of the path is applied in order, hardened or not as the
/// segment says. A child that lands on an invalid scalar is reported as
/// `DerivationFailure`; the index is never silently skipped.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive the private key at `path`.
    pub fn derive(seed: &[u8], path: &HdPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        let child = Self::derive_xprv(seed, path.segments())?;
        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }

    /// Derive to `base_path` once, then fan out over non-hardened `indices`.
    pub fn derive_batch(
        seed: &[u8],
        base_path: &HdPath,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<Zeroizing<[u8; 32]>>> {
        let base_xprv = Self::derive_xprv(seed, base_path.segments())?;

        let mut keys = Vec::with_capacity(indices.len());
        for index in indices {
            let segment = PathSegment::new(index, false)?;
            let child_xprv = derive_child(&base_xprv, &segment)?;
            let key_bytes: [u8; 32] = child_xprv.private_key().to_bytes().into();
            keys.push(Zeroizing::new(key_bytes));
        }

        Ok(keys)
    }

    /// Compressed SEC1 public key (33 bytes) for a private key.
    pub fn public_key(private_key: &[u8]) -> WalletResult<[u8; 33]> {
        let signing_key = k256::ecdsa::SigningKey::from_slice(private_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        let encoded = signing_key.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; 33];
        public_key.copy_from_slice(encoded.as_bytes());
        Ok(public_key)
    }

    fn derive_xprv(seed: &[u8], segments: &[PathSegment]) -> WalletResult<XPrv> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailure(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        let mut child = root_xprv;
        for segment in segments {
            child = derive_child(&child, segment)?;
        }
        Ok(child)
    }
}

fn derive_child(parent: &XPrv, segment: &PathSegment) -> WalletResult<XPrv> {
    let child_number = ChildNumber::new(segment.index(), segment.is_hardened()).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidPath(format!(
            "Invalid segment {}: {}",
            segment, e
        )))
    })?;

    parent.derive_child(child_number).map_err(|e| {
        WalletError::Crypto(CryptoError::DerivationFailure(format!(
            "Child derivation failed at {}: {}",
            segment, e
        )))
    })
}

// =============================================================================
// TESTS
// =============================================================================

// wallet-core/src/crypto/hash.rs

//! Hash primitives used for addresses and sign documents.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// RIPEMD-160 digest of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash160: RIPEMD-160(SHA-256(data)).
///
/// This is the BIP-32 key identifier and the Cosmos account address payload
/// for secp256k1 keys.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

// wallet-core/src/chains/cosmos/pubkey.rs
//
// Public key envelope for `cosmos.crypto.secp256k1.PubKey`

use crate::error::{CryptoError, WalletError, WalletResult};
use prost_types::Any;

/// Type URL of a secp256k1 public key packed into `Any`.
pub const SECP256K1_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";

/// Field tag of `PubKey.key` (field 1, wire type 2).
pub const PUBKEY_FIELD_TAG: u8 = 0x0A;

/// Wrap a raw public key as `[tag, len, key...]`.
///
/// The result is the `value` of the `Any`-typed `SignerInfo.public_key`.
pub fn wrap(public_key: &[u8]) -> WalletResult<Vec<u8>> {
    let len = u8::try_from(public_key.len())
        .map_err(|_| WalletError::Crypto(CryptoError::KeyTooLarge(public_key.len())))?;

    let mut envelope = Vec::with_capacity(public_key.len() + 2);
    envelope.push(PUBKEY_FIELD_TAG);
    envelope.push(len);
    envelope.extend_from_slice(public_key);
    Ok(envelope)
}

/// `Any { type_url: "/cosmos.crypto.secp256k1.PubKey", value: wrap(key) }`
pub fn to_any(public_key: &[u8]) -> WalletResult<Any> {
    Ok(Any {
        type_url: SECP256K1_PUBKEY_TYPE_URL.to_string(),
        value: wrap(public_key)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_compressed_key() {
        let mut key = vec![0x02];
        key.extend_from_slice(&[0xAB; 32]);

        let wrapped = wrap(&key).unwrap();
        assert_eq!(wrapped.len(), 35);
        assert_eq!(&wrapped[..2], &[0x0A, 0x21]);
        assert_eq!(&wrapped[2..], key.as_slice());
    }

    #[test]
    fn test_wrap_bounds() {
        assert_eq!(wrap(&[0u8; 255]).unwrap()[1], 255);
        assert_eq!(
            wrap(&[0u8; 256]).unwrap_err(),
            WalletError::Crypto(CryptoError::KeyTooLarge(256))
        );
        assert_eq!(wrap(&[]).unwrap(), vec![0x0A, 0x00]);
    }

    #[test]
    fn test_to_any() {
        let key = [0x03; 33];
        let any = to_any(&key).unwrap();
        assert_eq!(any.type_url, SECP256K1_PUBKEY_TYPE_URL);
        assert_eq!(any.value, wrap(&key).unwrap());
    }
}

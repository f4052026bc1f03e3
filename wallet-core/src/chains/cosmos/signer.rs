// wallet-core/src/chains/cosmos/signer.rs
//
// Cosmos Signer Module - Offline SIGN_MODE_DIRECT signing
//
// encode(TxBody), encode(AuthInfo)
//        → SignDoc { body_bytes, auth_info_bytes, chain_id, account_number }
//        → SHA-256
//        → secp256k1 ECDSA (RFC 6979, low-S, 64-byte r||s)
//        → TxRaw { body_bytes, auth_info_bytes, [signature] }

use super::address::CosmosAddress;
use super::msgs::TxMessage;
use super::proto::{AuthInfo, Fee, ModeInfo, SignDoc, SignMode, SignerInfo, TxBody, TxRaw};
use super::pubkey;
use crate::crypto::hash::sha256;
use crate::crypto::key_deriver::KeyPair;
use crate::error::{CryptoError, WalletError, WalletResult};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use prost::Message;

/// Result of a signing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTx {
    pub tx_raw: TxRaw,
    /// SHA-256 of the encoded SignDoc that was signed
    pub sign_doc_digest: [u8; 32],
}

impl SignedTx {
    /// Broadcast-ready `TxRaw` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.tx_raw.encode_to_vec()
    }

    pub fn signature(&self) -> &[u8] {
        self.tx_raw
            .signatures
            .first()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Transaction hash as reported by the chain.
    pub fn hash(&self) -> String {
        tx_hash(&self.to_bytes())
    }
}

/// Cosmos Signer - secp256k1 `SIGN_MODE_DIRECT`
///
/// Holds no per-transaction state: every `sign_tx` call is a pure function of
/// its arguments and the key. `SigningKey` zeroizes itself on drop.
pub struct CosmosSigner {
    signing_key: SigningKey,
    public_key: [u8; 33],
}

impl std::fmt::Debug for CosmosSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosSigner")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

impl CosmosSigner {
    // =========================================================================
    // CONSTRUCTOR
    // =========================================================================

    /// Build a signer from a 32-byte private key.
    ///
    /// Wrong length, zero or out-of-range scalars fail with `SigningFailure`.
    pub fn new(priv_key: &[u8]) -> WalletResult<Self> {
        let signing_key = SigningKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::SigningFailure(format!(
                "Invalid private key (must be a 32-byte secp256k1 scalar): {}",
                e
            )))
        })?;

        let encoded = signing_key.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; 33];
        public_key.copy_from_slice(encoded.as_bytes());

        Ok(Self {
            signing_key,
            public_key,
        })
    }

    pub fn from_key_pair(key_pair: &KeyPair) -> WalletResult<Self> {
        Self::new(key_pair.private_key())
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Compressed SEC1 public key
    #[inline]
    pub fn public_key(&self) -> &[u8; 33] {
        &self.public_key
    }

    pub fn address(&self, prefix: &str) -> WalletResult<String> {
        CosmosAddress::from_public_key(prefix, &self.public_key)
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Sign a 32-byte digest. Returns the compact `r || s` form.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> WalletResult<[u8; 64]> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailure(e.to_string())))?;

        let mut compact = [0u8; 64];
        compact.copy_from_slice(&signature.to_bytes());
        Ok(compact)
    }

    /// Run the full encode → SignDoc → digest → sign → TxRaw pipeline.
    pub fn sign_tx(
        &self,
        body: &TxBody,
        auth_info: &AuthInfo,
        chain_id: &str,
        account_number: u64,
    ) -> WalletResult<SignedTx> {
        let body_bytes = body.encode_to_vec();
        let auth_info_bytes = auth_info.encode_to_vec();

        tracing::debug!(
            chain_id,
            account_number,
            body_len = body_bytes.len(),
            auth_info_len = auth_info_bytes.len(),
            "signing transaction"
        );

        let sign_doc = sign_doc_bytes(&body_bytes, &auth_info_bytes, chain_id, account_number);
        let digest = sha256(&sign_doc);
        let signature = self.sign_digest(&digest)?;

        Ok(SignedTx {
            tx_raw: TxRaw {
                body_bytes,
                auth_info_bytes,
                signatures: vec![signature.to_vec()],
            },
            sign_doc_digest: digest,
        })
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Sign and return broadcast-ready `TxRaw` bytes.
pub fn sign_transaction(
    body: &TxBody,
    auth_info: &AuthInfo,
    chain_id: &str,
    account_number: u64,
    priv_key: &[u8],
) -> WalletResult<Vec<u8>> {
    let signer = CosmosSigner::new(priv_key)?;
    Ok(signer
        .sign_tx(body, auth_info, chain_id, account_number)?
        .to_bytes())
}

/// Encoded `SignDoc` for already-encoded body and auth info.
pub fn sign_doc_bytes(
    body_bytes: &[u8],
    auth_info_bytes: &[u8],
    chain_id: &str,
    account_number: u64,
) -> Vec<u8> {
    SignDoc {
        body_bytes: body_bytes.to_vec(),
        auth_info_bytes: auth_info_bytes.to_vec(),
        chain_id: chain_id.to_string(),
        account_number,
    }
    .encode_to_vec()
}

/// SHA-256 of the encoded `SignDoc`.
pub fn sign_doc_digest(
    body_bytes: &[u8],
    auth_info_bytes: &[u8],
    chain_id: &str,
    account_number: u64,
) -> [u8; 32] {
    sha256(&sign_doc_bytes(
        body_bytes,
        auth_info_bytes,
        chain_id,
        account_number,
    ))
}

/// Verify a compact signature over a digest.
pub fn verify_digest(public_key: &[u8], digest: &[u8; 32], signature: &[u8]) -> bool {
    let (Ok(verifying_key), Ok(signature)) = (
        VerifyingKey::from_sec1_bytes(public_key),
        Signature::from_slice(signature),
    ) else {
        return false;
    };
    verifying_key.verify_prehash(digest, &signature).is_ok()
}

/// Decode `TxRaw` bytes, rebuild the SignDoc digest and check the first
/// signature against `public_key`.
pub fn verify_tx_raw(
    tx_bytes: &[u8],
    public_key: &[u8],
    chain_id: &str,
    account_number: u64,
) -> WalletResult<bool> {
    let tx_raw = TxRaw::decode(tx_bytes)?;
    let Some(signature) = tx_raw.signatures.first() else {
        return Ok(false);
    };
    let digest = sign_doc_digest(
        &tx_raw.body_bytes,
        &tx_raw.auth_info_bytes,
        chain_id,
        account_number,
    );
    Ok(verify_digest(public_key, &digest, signature))
}

/// Uppercase hex SHA-256 of the raw transaction bytes.
pub fn tx_hash(tx_bytes: &[u8]) -> String {
    hex::encode_upper(sha256(tx_bytes))
}

// =============================================================================
// BUILDERS
// =============================================================================

pub fn build_tx_body(messages: &[TxMessage], memo: &str, timeout_height: u64) -> TxBody {
    TxBody {
        messages: messages.iter().map(TxMessage::to_any).collect(),
        memo: memo.to_string(),
        timeout_height,
    }
}

/// Single-signer `AuthInfo` in `SIGN_MODE_DIRECT`.
pub fn build_auth_info(public_key: &[u8], sequence: u64, fee: Fee) -> WalletResult<AuthInfo> {
    Ok(AuthInfo {
        signer_infos: vec![SignerInfo {
            public_key: Some(pubkey::to_any(public_key)?),
            mode_info: Some(ModeInfo::single(SignMode::Direct)),
            sequence,
        }],
        fee: Some(fee),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::msgs::MsgSend;
    use super::super::proto::Coin;
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_CHAIN_ID: &str = "air-testnet-1";
    const TEST_ACCOUNT_NUMBER: u64 = 42;

    fn create_test_signer() -> CosmosSigner {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        CosmosSigner::new(&priv_key).expect("Create signer")
    }

    fn sample_tx(signer: &CosmosSigner) -> (TxBody, AuthInfo) {
        let from = signer.address("air").unwrap();
        let send = MsgSend {
            from_address: from.clone(),
            to_address: from,
            amount: vec![Coin::new("uair", "1000")],
        };
        let body = build_tx_body(&[send.into()], "memo", 0);
        let auth_info = build_auth_info(
            signer.public_key(),
            3,
            Fee::new(vec![Coin::new("uair", "500")], 200_000),
        )
        .unwrap();
        (body, auth_info)
    }

    #[test]
    fn test_known_answer_sign_doc_and_signature() {
        let signer = create_test_signer();
        assert_eq!(
            hex::encode(signer.public_key()),
            "038318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed75"
        );

        let body = build_tx_body(&[], "memo", 0);
        let auth_info = AuthInfo {
            signer_infos: vec![],
            fee: Some(Fee::new(vec![Coin::new("uatom", "1")], 200_000)),
        };
        assert_eq!(hex::encode(body.encode_to_vec()), "12046d656d6f");
        assert_eq!(
            hex::encode(auth_info.encode_to_vec()),
            "12100a0a0a057561746f6d12013110c09a0c"
        );
        assert_eq!(
            hex::encode(sign_doc_bytes(
                &body.encode_to_vec(),
                &auth_info.encode_to_vec(),
                "cosmoshub-4",
                7
            )),
            "0a0612046d656d6f121212100a0a0a057561746f6d12013110c09a0c1a0b636f736d6f736875622d342007"
        );

        let signed = signer.sign_tx(&body, &auth_info, "cosmoshub-4", 7).unwrap();
        assert_eq!(
            hex::encode(signed.sign_doc_digest),
            "e668275a9b4250702551c3a31577f790f6a16945daeee19990f1154f2f526dbf"
        );
        // RFC 6979 nonce, low-S normalized
        assert_eq!(
            hex::encode(signed.signature()),
            "6972f1ea5beba2e3ff33565519cf1b958f5503cb4280c5e937410b15a104deea\
             07bd219aa871eec80d90a30a97f7d58abf474fbef6c6e5ac42da4b5ba4ecc0d8"
        );
    }

    #[test]
    fn test_sign_tx_verifies() {
        let signer = create_test_signer();
        let (body, auth_info) = sample_tx(&signer);

        let signed = signer
            .sign_tx(&body, &auth_info, TEST_CHAIN_ID, TEST_ACCOUNT_NUMBER)
            .unwrap();
        assert_eq!(signed.signature().len(), 64);

        let expected_digest = sign_doc_digest(
            &body.encode_to_vec(),
            &auth_info.encode_to_vec(),
            TEST_CHAIN_ID,
            TEST_ACCOUNT_NUMBER,
        );
        assert_eq!(signed.sign_doc_digest, expected_digest);
        assert!(verify_digest(
            signer.public_key(),
            &expected_digest,
            signed.signature()
        ));
    }

    #[test]
    fn test_sign_transaction_raw_bytes() {
        let signer = create_test_signer();
        let (body, auth_info) = sample_tx(&signer);
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();

        let raw = sign_transaction(
            &body,
            &auth_info,
            TEST_CHAIN_ID,
            TEST_ACCOUNT_NUMBER,
            &priv_key,
        )
        .unwrap();

        let tx_raw = TxRaw::decode(raw.as_slice()).unwrap();
        assert_eq!(tx_raw.body_bytes, body.encode_to_vec());
        assert_eq!(tx_raw.auth_info_bytes, auth_info.encode_to_vec());
        assert_eq!(tx_raw.signatures.len(), 1);

        assert!(verify_tx_raw(&raw, signer.public_key(), TEST_CHAIN_ID, TEST_ACCOUNT_NUMBER).unwrap());
        // Same bytes under another chain id or account number must not verify
        assert!(!verify_tx_raw(&raw, signer.public_key(), "other-1", TEST_ACCOUNT_NUMBER).unwrap());
        assert!(!verify_tx_raw(&raw, signer.public_key(), TEST_CHAIN_ID, 43).unwrap());
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = create_test_signer();
        let (body, auth_info) = sample_tx(&signer);

        let a = signer.sign_tx(&body, &auth_info, TEST_CHAIN_ID, 1).unwrap();
        let b = signer.sign_tx(&body, &auth_info, TEST_CHAIN_ID, 1).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.hash().len(), 64);
    }

    #[test]
    fn test_auth_info_embeds_wrapped_pubkey() {
        let signer = create_test_signer();
        let (_, auth_info) = sample_tx(&signer);

        let info = &auth_info.signer_infos[0];
        let any = info.public_key.as_ref().unwrap();
        assert_eq!(any.type_url, pubkey::SECP256K1_PUBKEY_TYPE_URL);
        assert_eq!(any.value, pubkey::wrap(signer.public_key()).unwrap());
        assert_eq!(info.sequence, 3);
        assert_eq!(
            info.mode_info.as_ref().unwrap().single.as_ref().unwrap().mode,
            SignMode::Direct as i32
        );
    }

    #[test]
    fn test_invalid_private_key() {
        for bad in [vec![0u8; 31], vec![0u8; 32], vec![0xFF; 32], vec![]] {
            assert!(matches!(
                CosmosSigner::new(&bad),
                Err(WalletError::Crypto(CryptoError::SigningFailure(_)))
            ));
        }
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let signer = create_test_signer();
        let digest = [7u8; 32];
        let signature = signer.sign_digest(&digest).unwrap();

        assert!(verify_digest(signer.public_key(), &digest, &signature));
        assert!(!verify_digest(signer.public_key(), &[8u8; 32], &signature));
        assert!(!verify_digest(&[0u8; 33], &digest, &signature));
        assert!(!verify_digest(signer.public_key(), &digest, &signature[..63]));
    }

    #[test]
    fn test_tx_hash_format() {
        let hash = tx_hash(b"");
        assert_eq!(
            hash,
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let signer = create_test_signer();
        let debug_output = format!("{:?}", signer);
        assert!(!debug_output.contains(TEST_PRIVATE_KEY));
        assert!(debug_output.contains("CosmosSigner"));
    }
}

// wallet-core/src/api/client.rs
//
// Wallet Client - one configured Cosmos wallet
//
// Holds the address prefix, derivation path and chain id for a single
// chain. Every operation takes the mnemonic phrase as input and keeps no
// key material after it returns.

use crate::chains::cosmos::address::CosmosAddress;
use crate::chains::cosmos::msgs::TxMessage;
use crate::chains::cosmos::proto::Fee;
use crate::chains::cosmos::signer::{build_auth_info, build_tx_body, CosmosSigner, SignedTx};
use crate::config::WalletConfig;
use crate::crypto::key_deriver::{KeyDeriver, KeyPair};
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::HdPath;
use crate::error::{WalletError, WalletResult};
use crate::network::{encode_query, AccountInfo, BroadcastMode, ChainClient};
use tracing::{debug, info};

/// Default entropy for `generate_mnemonic` callers that do not choose one.
pub const DEFAULT_MNEMONIC_STRENGTH: usize = 256;

#[derive(Debug, Clone)]
pub struct WalletClient {
    config: WalletConfig,
}

impl WalletClient {
    // =========================================================================
    // CONSTRUCTOR & CONFIGURATION
    // =========================================================================

    pub fn new(config: WalletConfig) -> WalletResult<Self> {
        config.validate()?;
        debug!(
            prefix = %config.address_prefix,
            path = %config.derivation_path,
            chain_id = %config.chain_id,
            "wallet client created"
        );
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    #[inline]
    pub fn address_prefix(&self) -> &str {
        &self.config.address_prefix
    }

    #[inline]
    pub fn path(&self) -> &HdPath {
        &self.config.derivation_path
    }

    #[inline]
    pub fn chain_id(&self) -> &str {
        &self.config.chain_id
    }

    /// Change the bech32 prefix. On error the previous prefix stays in place.
    pub fn set_address_prefix(&mut self, prefix: &str) -> WalletResult<()> {
        CosmosAddress::validate_prefix(prefix)?;
        self.config.address_prefix = prefix.to_string();
        debug!(prefix, "address prefix updated");
        Ok(())
    }

    /// Change the derivation path. On error the previous path stays in place.
    pub fn set_path(&mut self, path: &str) -> WalletResult<()> {
        self.config.derivation_path = HdPath::parse(path)?;
        debug!(path = %self.config.derivation_path, "derivation path updated");
        Ok(())
    }

    pub fn set_chain_id(&mut self, chain_id: &str) -> WalletResult<()> {
        let mut config = self.config.clone();
        config.chain_id = chain_id.to_string();
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // =========================================================================
    // KEYS & ADDRESSES
    // =========================================================================

    /// Fresh mnemonic with 128 or 256 bits of entropy.
    pub fn generate_mnemonic(&self, strength: usize) -> WalletResult<WalletMnemonic> {
        WalletMnemonic::generate(strength)
    }

    /// Account address for `phrase` at the configured path and prefix.
    ///
    /// With `check_sum == false` the BIP-39 checksum is not verified; words
    /// must still come from the wordlist.
    pub fn get_address(&self, phrase: &str, check_sum: bool) -> WalletResult<String> {
        let key_pair = self.key_pair_for(phrase, check_sum)?;
        let address = self.address_of(&key_pair)?;
        debug!(%address, path = %self.path(), "address derived");
        Ok(address)
    }

    /// Key pair for `phrase` at the configured path.
    pub fn derive_key_pair(&self, phrase: &str) -> WalletResult<KeyPair> {
        self.key_pair_for(phrase, true)
    }

    fn key_pair_for(&self, phrase: &str, check_sum: bool) -> WalletResult<KeyPair> {
        if phrase.trim().is_empty() {
            return Err(WalletError::InvalidInput(
                "mnemonic phrase is empty".to_string(),
            ));
        }

        let mnemonic = if check_sum {
            WalletMnemonic::from_phrase(phrase)?
        } else {
            WalletMnemonic::from_phrase_unchecked(phrase)?
        };
        let seed = mnemonic.to_seed(None)?;
        KeyDeriver::derive(&*seed, self.path())
    }

    fn address_of(&self, key_pair: &KeyPair) -> WalletResult<String> {
        CosmosAddress::from_public_key(self.address_prefix(), key_pair.public_key())
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Sign `messages` offline for `account` under the configured chain id.
    ///
    /// `account.address` must be the address `phrase` derives to; account
    /// number and sequence of another account are rejected with
    /// `InvalidInput`.
    pub fn sign_transaction(
        &self,
        phrase: &str,
        messages: &[TxMessage],
        fee: Fee,
        memo: &str,
        account: &AccountInfo,
    ) -> WalletResult<SignedTx> {
        self.check_signable(messages)?;
        let key_pair = self.derive_key_pair(phrase)?;
        self.sign_with_key_pair(&key_pair, messages, fee, memo, account)
    }

    fn check_signable(&self, messages: &[TxMessage]) -> WalletResult<()> {
        if self.chain_id().is_empty() {
            return Err(WalletError::Config(
                "chain id must be set before signing".to_string(),
            ));
        }
        if messages.is_empty() {
            return Err(WalletError::InvalidInput(
                "transaction has no messages".to_string(),
            ));
        }
        Ok(())
    }

    fn sign_with_key_pair(
        &self,
        key_pair: &KeyPair,
        messages: &[TxMessage],
        fee: Fee,
        memo: &str,
        account: &AccountInfo,
    ) -> WalletResult<SignedTx> {
        let address = self.address_of(key_pair)?;
        if account.address != address {
            return Err(WalletError::InvalidInput(format!(
                "account {} does not belong to signer {}",
                account.address, address
            )));
        }

        let signer = CosmosSigner::from_key_pair(key_pair)?;

        let body = build_tx_body(messages, memo, 0);
        let auth_info = build_auth_info(signer.public_key(), account.sequence, fee)?;

        let signed = signer.sign_tx(&body, &auth_info, self.chain_id(), account.account_number)?;
        info!(
            signer = %account.address,
            chain_id = %self.chain_id(),
            sequence = account.sequence,
            messages = messages.len(),
            tx_hash = %signed.hash(),
            "transaction signed"
        );
        Ok(signed)
    }

    // =========================================================================
    // CHAIN GATEWAY
    // =========================================================================

    /// Query a smart contract with a JSON message.
    pub async fn query_contract<C: ChainClient + ?Sized>(
        &self,
        chain: &C,
        contract: &str,
        query: &serde_json::Value,
    ) -> WalletResult<serde_json::Value> {
        CosmosAddress::decode(contract)?;
        let query_hex = encode_query(query);
        debug!(contract, query_len = query_hex.len(), "querying contract");
        chain.query_contract(contract, &query_hex).await
    }

    pub async fn get_account<C: ChainClient + ?Sized>(
        &self,
        chain: &C,
        address: &str,
    ) -> WalletResult<AccountInfo> {
        CosmosAddress::decode(address)?;
        let account = chain.get_account(address).await?;
        debug!(
            address,
            account_number = account.account_number,
            sequence = account.sequence,
            "account fetched"
        );
        Ok(account)
    }

    /// Look up the signer's account, sign `messages` and broadcast in sync
    /// mode. Returns the node's response.
    pub async fn send_messages<C: ChainClient + ?Sized>(
        &self,
        chain: &C,
        phrase: &str,
        messages: &[TxMessage],
        fee: Fee,
        memo: &str,
    ) -> WalletResult<serde_json::Value> {
        self.check_signable(messages)?;
        let key_pair = self.derive_key_pair(phrase)?;
        let address = self.address_of(&key_pair)?;
        let account = self.get_account(chain, &address).await?;

        let signed = self.sign_with_key_pair(&key_pair, messages, fee, memo, &account)?;
        let tx_bytes = signed.to_bytes();

        info!(
            %address,
            tx_hash = %signed.hash(),
            tx_len = tx_bytes.len(),
            "broadcasting transaction"
        );
        chain.broadcast(&tx_bytes, BroadcastMode::Sync).await
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

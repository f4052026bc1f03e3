// wallet-core/src/config.rs
//
// Wallet configuration
//
// Nothing is read implicitly: a `WalletConfig` is either built in code,
// parsed from TOML, or loaded from the environment through the explicit
// `from_env` call.

use crate::chains::cosmos::address::CosmosAddress;
use crate::crypto::paths::HdPath;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

pub const ENV_ADDRESS_PREFIX: &str = "COSMOS_ADDRESS_PREFIX";
pub const ENV_CHAIN_ID: &str = "COSMOS_CHAIN_ID";
pub const ENV_DERIVATION_PATH: &str = "COSMOS_DERIVATION_PATH";

/// Per-client wallet settings.
///
/// ```toml
/// address_prefix = "air"
/// derivation_path = "m/44'/118'/0'/0/0"
/// chain_id = "air-testnet-1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletConfig {
    /// bech32 human-readable prefix for account addresses. There is no
    /// default: a config without one fails `validate` with `InvalidPrefix`.
    #[serde(default)]
    pub address_prefix: String,
    #[serde(default)]
    pub derivation_path: HdPath,
    /// Chain id bound into every SignDoc; may be left empty for offline use
    #[serde(default)]
    pub chain_id: String,
}

impl WalletConfig {
    pub fn new(address_prefix: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            address_prefix: address_prefix.into(),
            derivation_path: HdPath::default(),
            chain_id: chain_id.into(),
        }
    }

    pub fn with_derivation_path(mut self, path: HdPath) -> Self {
        self.derivation_path = path;
        self
    }

    /// Parse and validate a TOML document. `address_prefix` is required;
    /// the path defaults to `m/44'/118'/0'/0/0` and the chain id to empty.
    pub fn from_toml_str(input: &str) -> WalletResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `COSMOS_ADDRESS_PREFIX`, `COSMOS_CHAIN_ID` and
    /// `COSMOS_DERIVATION_PATH`. The prefix variable must be set; the other
    /// two fall back to the defaults of `from_toml_str`.
    pub fn from_env() -> WalletResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> WalletResult<Self> {
        let mut config = Self::new(
            lookup(ENV_ADDRESS_PREFIX).unwrap_or_default(),
            String::new(),
        );

        if let Some(chain_id) = lookup(ENV_CHAIN_ID) {
            config.chain_id = chain_id;
        }
        if let Some(path) = lookup(ENV_DERIVATION_PATH) {
            config.derivation_path = path.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every address or signature invalid.
    pub fn validate(&self) -> WalletResult<()> {
        CosmosAddress::validate_prefix(&self.address_prefix)?;

        if self.chain_id.chars().any(char::is_whitespace) {
            return Err(WalletError::Config(format!(
                "chain id '{}' must not contain whitespace",
                self.chain_id
            )));
        }
        Ok(())
    }
}

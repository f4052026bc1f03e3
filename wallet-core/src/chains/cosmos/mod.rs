// wallet-core/src/chains/cosmos/mod.rs
//
// Cosmos SDK chain support
//
// - address: bech32 account addresses
// - pubkey:  `cosmos.crypto.secp256k1.PubKey` envelope
// - proto:   tx envelope records (TxBody, AuthInfo, SignDoc, TxRaw)
// - msgs:    typed messages packed into `Any`
// - signer:  SIGN_MODE_DIRECT signing

pub mod address;
pub mod msgs;
pub mod proto;
pub mod pubkey;
pub mod signer;

pub use address::{CosmosAddress, DecodedAddress};
pub use msgs::{MsgExecuteContract, MsgSend, TxMessage};
pub use proto::{AuthInfo, Coin, Fee, SignDoc, SignMode, TxBody, TxRaw};
pub use signer::{
    build_auth_info, build_tx_body, sign_transaction, tx_hash, CosmosSigner, SignedTx,
};


// wallet-core/src/chains/cosmos/msgs.rs
//
// Typed transaction messages. Each variant knows its type URL and how to
// pack itself into `Any` for `TxBody.messages`.

use super::proto::Coin;
use crate::error::WalletResult;
use prost::Message;
use prost_types::Any;

pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";

/// `cosmos.bank.v1beta1.MsgSend`
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

/// `cosmwasm.wasm.v1.MsgExecuteContract`
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct MsgExecuteContract {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub contract: String,
    /// JSON-encoded contract message
    #[prost(bytes = "vec", tag = "3")]
    pub msg: Vec<u8>,
    #[prost(message, repeated, tag = "5")]
    pub funds: Vec<Coin>,
}

impl MsgExecuteContract {
    pub fn new(
        sender: impl Into<String>,
        contract: impl Into<String>,
        msg: &serde_json::Value,
        funds: Vec<Coin>,
    ) -> WalletResult<Self> {
        Ok(Self {
            sender: sender.into(),
            contract: contract.into(),
            msg: serde_json::to_vec(msg)?,
            funds,
        })
    }
}

/// A message that can be placed in a transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxMessage {
    Send(MsgSend),
    ExecuteContract(MsgExecuteContract),
}

impl TxMessage {
    pub fn type_url(&self) -> &'static str {
        match self {
            TxMessage::Send(_) => MSG_SEND_TYPE_URL,
            TxMessage::ExecuteContract(_) => MSG_EXECUTE_CONTRACT_TYPE_URL,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            TxMessage::Send(msg) => msg.encode_to_vec(),
            TxMessage::ExecuteContract(msg) => msg.encode_to_vec(),
        }
    }

    pub fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url().to_string(),
            value: self.encode(),
        }
    }
}

impl From<MsgSend> for TxMessage {
    fn from(msg: MsgSend) -> Self {
        TxMessage::Send(msg)
    }
}

impl From<MsgExecuteContract> for TxMessage {
    fn from(msg: MsgExecuteContract) -> Self {
        TxMessage::ExecuteContract(msg)
    }
}

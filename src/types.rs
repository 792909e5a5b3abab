//! Wire types exchanged with the wallet backend.
//!
//! The backend formats amounts with `format_units`, so balances and gas arrive as JSON
//! strings; other deployments send plain numbers. Both encodings are accepted.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An ETH amount exactly as the backend reported it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EthAmount(String);

impl EthAmount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EthAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EthAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(EthAmount)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Num(n) => n.to_string(),
    })
}

fn u64_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Num(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("expected unsigned integer, got {}", n))),
        StringOrNumber::Str(s) => {
            let s = s.trim();
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => s.parse(),
            };
            parsed.map_err(|e| serde::de::Error::custom(format!("invalid integer '{}': {}", s, e)))
        }
    }
}

/// Wallet returned by `GET /generate-wallet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub address: String,
    pub private_key: String,
    pub balance: EthAmount,
}

/// Balance returned by `GET /get-balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub address: String,
    pub balance: EthAmount,
}

/// On-chain placement of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub transaction_index: u64,
    pub transaction_hash: String,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub block_number: u64,
    pub from: String,
    pub to: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gas_used: String,
    pub status: String,
}

/// Response of `POST /send-transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub tx_hash: String,
    #[serde(default)]
    pub receipt: Option<Receipt>,
}

/// Body of `POST /send-transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTransactionRequest {
    pub sender_private_key: String,
    pub receiver_address: String,
}

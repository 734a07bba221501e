/*
[INPUT]:  LNPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

//! Response records.
//!
//! Fields LNPay documents are typed; anything else lands in `extra`, so a
//! decoded record serializes back to the object the server sent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::AccessKeyRole;

/// LNPay sends some booleans as `0`/`1` and others as `true`/`false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Int(value) => *value != 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletStatus {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wallet record (`wal_...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub balance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(rename = "statusType", default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<WalletStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wallet record returned by wallet creation, with its access keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWallet {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(rename = "statusType", default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<WalletStatus>,
    /// Keyed by role name, e.g. `"Wallet Admin"`
    pub access_keys: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewWallet {
    /// First key issued for `role`
    pub fn access_key(&self, role: AccessKeyRole) -> Option<&str> {
        self.access_keys
            .get(role.as_str())
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    pub fn admin_key(&self) -> Option<&str> {
        self.access_key(AccessKeyRole::WalletAdmin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lightning transaction / invoice record (`lntx_...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnTx {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_hash_decoded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_satoshis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_preimage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keysend: Option<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_records: Option<Value>,
    #[serde(rename = "passThru", default, skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LnTx {
    /// Settlement state as reported by LNPay. The client does not verify it.
    pub fn is_settled(&self) -> bool {
        self.settled.is_some_and(|flag| flag.is_set())
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn settled_at_utc(&self) -> Option<DateTime<Utc>> {
        self.settled_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Settled wallet transaction (`wtx_...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub num_satoshis: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wal: Option<Wallet>,
    #[serde(rename = "wtxType", default, skip_serializing_if = "Option::is_none")]
    pub wtx_type: Option<TransactionType>,
    #[serde(rename = "lnTx", default, skip_serializing_if = "Option::is_none")]
    pub ln_tx: Option<LnTx>,
    #[serde(rename = "passThru", default, skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of paying an invoice or sending a keysend payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    #[serde(rename = "lnTx")]
    pub ln_tx: LnTx,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Both legs of a wallet-to-wallet transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    pub wtx_transfer_in: Transaction,
    pub wtx_transfer_out: Transaction,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnUrlWithdraw {
    pub lnurl: String,
    /// One-time token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ott: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paywall record (`pw_...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paywall {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_satoshis: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

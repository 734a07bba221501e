/*
[INPUT]:  LNPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Roles LNPay issues wallet access keys for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKeyRole {
    #[serde(rename = "Wallet Admin")]
    WalletAdmin,
    #[serde(rename = "Wallet Invoice")]
    WalletInvoice,
    #[serde(rename = "Wallet Read")]
    WalletRead,
}

impl AccessKeyRole {
    /// Key under `access_keys` in a new-wallet response
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessKeyRole::WalletAdmin => "Wallet Admin",
            AccessKeyRole::WalletInvoice => "Wallet Invoice",
            AccessKeyRole::WalletRead => "Wallet Read",
        }
    }
}

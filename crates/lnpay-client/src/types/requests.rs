/*
[INPUT]:  LNPay API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Invoice expiry LNPay applies when none is given: one day
pub const DEFAULT_INVOICE_EXPIRY_SECS: u64 = 86_400;

/// POST /wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub user_label: String,
}

impl CreateWalletRequest {
    pub fn new(user_label: impl Into<String>) -> Self {
        Self {
            user_label: user_label.into(),
        }
    }
}

/// GET /wallet/{key}/transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// POST /wallet/{key}/invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub num_satoshis: u64,
    #[serde(rename = "passThru")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<Value>,
    /// Base64 hash of the description; LNPay ignores `memo` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

impl Default for GenerateInvoiceRequest {
    fn default() -> Self {
        Self {
            num_satoshis: 0,
            pass_thru: None,
            description_hash: None,
            memo: None,
            expiry: Some(DEFAULT_INVOICE_EXPIRY_SECS),
        }
    }
}

impl GenerateInvoiceRequest {
    pub fn new(num_satoshis: u64) -> Self {
        Self {
            num_satoshis,
            ..Self::default()
        }
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn expiry(mut self, expiry_secs: u64) -> Self {
        self.expiry = Some(expiry_secs);
        self
    }

    pub fn pass_thru(mut self, pass_thru: Value) -> Self {
        self.pass_thru = Some(pass_thru);
        self
    }

    /// Set an already base64-encoded description hash
    pub fn description_hash(mut self, description_hash: impl Into<String>) -> Self {
        self.description_hash = Some(description_hash.into());
        self
    }

    /// Base64-encode a raw description hash
    pub fn with_description_hash_bytes(self, hash: &[u8]) -> Self {
        let encoded = BASE64.encode(hash);
        self.description_hash(encoded)
    }
}

/// POST /wallet/{key}/withdraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayInvoiceRequest {
    pub payment_request: String,
    #[serde(rename = "passThru")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<Value>,
}

impl PayInvoiceRequest {
    pub fn new(payment_request: impl Into<String>) -> Self {
        Self {
            payment_request: payment_request.into(),
            pass_thru: None,
        }
    }
}

/// POST /wallet/{key}/keysend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeysendRequest {
    pub dest_pubkey: String,
    pub num_satoshis: u64,
    #[serde(rename = "passThru")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<Value>,
    /// TLV records sent in the onion. Keys must be above 65536, values plain strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_records: Option<BTreeMap<u64, String>>,
}

impl KeysendRequest {
    pub fn new(dest_pubkey: impl Into<String>, num_satoshis: u64) -> Self {
        Self {
            dest_pubkey: dest_pubkey.into(),
            num_satoshis,
            pass_thru: None,
            custom_records: None,
        }
    }

    pub fn custom_record(mut self, key: u64, value: impl Into<String>) -> Self {
        self.custom_records
            .get_or_insert_with(BTreeMap::new)
            .insert(key, value.into());
        self
    }
}

/// POST /wallet/{key}/transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Destination wallet access key or wallet id
    pub dest_wallet_id: String,
    pub num_satoshis: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(rename = "lnPayParams")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ln_pay_params: Option<Value>,
}

impl TransferRequest {
    pub fn new(dest_wallet_id: impl Into<String>, num_satoshis: u64) -> Self {
        Self {
            dest_wallet_id: dest_wallet_id.into(),
            num_satoshis,
            memo: None,
            ln_pay_params: None,
        }
    }
}

/// GET /wallet/{key}/lnurl/withdraw, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LnUrlWithdrawRequest {
    /// One-time withdraw with no sensitive data in the LNURL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Base64-encoded JSON
    #[serde(rename = "passThru")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Withdraw limit; LNPay uses the wallet balance when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_satoshis: Option<u64>,
}

impl LnUrlWithdrawRequest {
    /// Encode a JSON value into the base64 form LNPay expects for `passThru`
    pub fn with_pass_thru_json(mut self, pass_thru: &Value) -> Self {
        self.pass_thru = Some(BASE64.encode(pass_thru.to_string()));
        self
    }
}

/// POST /paywall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaywallRequest {
    pub destination_url: String,
    pub num_satoshis: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

impl CreatePaywallRequest {
    pub fn new(destination_url: impl Into<String>, num_satoshis: u64) -> Self {
        Self {
            destination_url: destination_url.into(),
            num_satoshis,
            memo: None,
            short_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_defaults() {
        let body = serde_json::to_value(GenerateInvoiceRequest::default()).expect("serialize");
        assert_eq!(body, json!({ "num_satoshis": 0, "expiry": 86400 }));
    }

    #[test]
    fn test_invoice_builder() {
        let req = GenerateInvoiceRequest::new(100)
            .memo("Invoice memo.")
            .pass_thru(json!({ "order_id": "100" }))
            .with_description_hash_bytes(b"123465789456132456789546");

        let body = serde_json::to_value(req).expect("serialize");
        assert_eq!(
            body,
            json!({
                "num_satoshis": 100,
                "passThru": { "order_id": "100" },
                "description_hash": "MTIzNDY1Nzg5NDU2MTMyNDU2Nzg5NTQ2",
                "memo": "Invoice memo.",
                "expiry": 86400
            })
        );
    }

    #[test]
    fn test_keysend_custom_records() {
        let req = KeysendRequest::new("03ab", 1)
            .custom_record(696969, "hello")
            .custom_record(65537, "world");

        let body = serde_json::to_value(req).expect("serialize");
        assert_eq!(
            body,
            json!({
                "dest_pubkey": "03ab",
                "num_satoshis": 1,
                "custom_records": { "65537": "world", "696969": "hello" }
            })
        );
    }

    #[test]
    fn test_transfer_params_name() {
        let mut req = TransferRequest::new("w_n743yizWqe43Oz", 1);
        req.ln_pay_params = Some(json!({ "order_id": "100" }));

        let body = serde_json::to_value(req).expect("serialize");
        assert_eq!(body["lnPayParams"], json!({ "order_id": "100" }));
        assert!(body.get("memo").is_none());
    }

    #[test]
    fn test_lnurl_pass_thru_is_base64_json() {
        let req = LnUrlWithdrawRequest::default().with_pass_thru_json(&json!({ "ticket": 7 }));
        let encoded = req.pass_thru.expect("pass_thru");
        let decoded = BASE64.decode(encoded).expect("base64");
        assert_eq!(decoded, br#"{"ticket":7}"#);
    }
}

/*
[INPUT]:  Caller-supplied credentials (any serde source or code)
[OUTPUT]: LnpayConfig consumed by LnpayClient construction
[POS]:    Configuration layer - credentials and client behavior switches
[UPDATE]: When adding new configuration options
*/

use std::fmt;

use serde::Deserialize;

/// Credentials and behavior switches for [`crate::LnpayClient`]
#[derive(Clone, Deserialize)]
pub struct LnpayConfig {
    /// Secret API key (`pak_...`), sent as `X-API-Key`
    pub secret_key: String,
    /// Wallet access key (`waka_...`/`waki_...`/`wakr_...`) used in wallet paths
    #[serde(default)]
    pub wallet_access_key: Option<String>,
    /// Replace `secret_key` with the new wallet's admin key after `create_wallet`
    #[serde(default = "default_adopt_wallet_admin_key")]
    pub adopt_wallet_admin_key: bool,
}

impl LnpayConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            wallet_access_key: None,
            adopt_wallet_admin_key: default_adopt_wallet_admin_key(),
        }
    }

    pub fn with_wallet_access_key(mut self, wallet_access_key: impl Into<String>) -> Self {
        self.wallet_access_key = Some(wallet_access_key.into());
        self
    }

    pub fn adopt_wallet_admin_key(mut self, adopt: bool) -> Self {
        self.adopt_wallet_admin_key = adopt;
        self
    }
}

impl fmt::Debug for LnpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LnpayConfig")
            .field("secret_key", &"<redacted>")
            .field(
                "wallet_access_key",
                &self.wallet_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("adopt_wallet_admin_key", &self.adopt_wallet_admin_key)
            .finish()
    }
}

fn default_adopt_wallet_admin_key() -> bool {
    true
}

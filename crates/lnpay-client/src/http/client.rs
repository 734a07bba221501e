/*
[INPUT]:  LnpayConfig credentials and transport options
[OUTPUT]: Configured reqwest client with authenticated request builders
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::LnpayConfig;
use crate::http::{ApiResponse, LnpayError, Result};

/// Base URL for the LNPay API
pub const DEFAULT_BASE_URL: &str = "https://api.lnpay.co/v1";

/// Header carrying the secret key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP transport configuration.
///
/// Timeouts left as `None` keep reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: concat!("lnpay-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Main HTTP client for the LNPay API
pub struct LnpayClient {
    http_client: Client,
    base_url: Url,
    secret_key: String,
    wallet_access_key: Option<String>,
    adopt_wallet_admin_key: bool,
}

impl LnpayClient {
    /// Create a new client with default transport configuration
    pub fn new(config: LnpayConfig) -> Result<Self> {
        Self::with_config(config, ClientConfig::default())
    }

    /// Create a new client with custom transport configuration
    pub fn with_config(config: LnpayConfig, client_config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, client_config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a different base URL (e.g. a mock server)
    pub fn with_config_and_base_url(
        config: LnpayConfig,
        client_config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(client_config.user_agent);
        if let Some(timeout) = client_config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = client_config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(LnpayError::Config(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            secret_key: config.secret_key,
            wallet_access_key: config.wallet_access_key,
            adopt_wallet_admin_key: config.adopt_wallet_admin_key,
        })
    }

    /// Secret key currently sent with every request
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Replace the secret key used for subsequent requests
    pub fn set_secret_key(&mut self, secret_key: impl Into<String>) {
        self.secret_key = secret_key.into();
    }

    /// Wallet access key used in wallet-scoped paths, if configured
    pub fn wallet_access_key(&self) -> Option<&str> {
        self.wallet_access_key.as_deref()
    }

    /// Set the wallet access key used in wallet-scoped paths
    pub fn set_wallet_access_key(&mut self, wallet_access_key: impl Into<String>) {
        self.wallet_access_key = Some(wallet_access_key.into());
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn adopts_wallet_admin_key(&self) -> bool {
        self.adopt_wallet_admin_key
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LnpayError::Config(format!("base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Segments for `/wallet/{wallet_access_key}/{rest...}`
    pub(crate) fn wallet_endpoint(&self, rest: &[&str]) -> Result<Url> {
        let key = self.wallet_access_key.as_deref().ok_or_else(|| {
            LnpayError::Config("wallet access key is required for wallet endpoints".to_string())
        })?;
        let mut segments = Vec::with_capacity(rest.len() + 2);
        segments.push("wallet");
        segments.push(key);
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    /// Build an authenticated request builder
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(API_KEY_HEADER, &self.secret_key)
    }

    /// Send a request and decode the body, translating non-2xx responses.
    ///
    /// Transport errors are stripped of their URL, which may hold the wallet
    /// access key.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = builder.build().map_err(reqwest::Error::without_url)?;
        let path = redacted_path(request.url());
        debug!(method = %request.method(), path = %path, "LNPay request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(reqwest::Error::without_url)?;
        response.into_api_result(&path).await
    }
}

/// URL path safe to log: the segment after `wallet` is the wallet access key
pub(crate) fn redacted_path(url: &Url) -> String {
    let mut path = String::new();
    let mut after_wallet = false;
    for segment in url.path_segments().into_iter().flatten() {
        path.push('/');
        path.push_str(if after_wallet { "<redacted>" } else { segment });
        after_wallet = segment == "wallet";
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

impl fmt::Debug for LnpayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LnpayClient")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"<redacted>")
            .field(
                "wallet_access_key",
                &self.wallet_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("adopt_wallet_admin_key", &self.adopt_wallet_admin_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(wallet_access_key: Option<&str>) -> LnpayClient {
        let mut config = LnpayConfig::new("pak_TEST");
        if let Some(key) = wallet_access_key {
            config = config.with_wallet_access_key(key);
        }
        LnpayClient::new(config).expect("client init")
    }

    #[test]
    fn test_default_base_url() {
        let client = client(None);
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_keeps_version_prefix() {
        let client = client(None);
        let url = client.endpoint(&["lntx", "lntx_82yv"]).expect("endpoint");
        assert_eq!(url.as_str(), "https://api.lnpay.co/v1/lntx/lntx_82yv");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let client = LnpayClient::with_config_and_base_url(
            LnpayConfig::new("pak_TEST"),
            ClientConfig::default(),
            "http://localhost:8080/v1/",
        )
        .expect("client init");
        let url = client.endpoint(&["paywall"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/v1/paywall");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client(None);
        let url = client.endpoint(&["lntx", "a/b c"]).expect("endpoint");
        assert_eq!(url.path(), "/v1/lntx/a%2Fb%20c");
    }

    #[test]
    fn test_wallet_endpoint() {
        let client = client(Some("waka_TEST"));
        let url = client
            .wallet_endpoint(&["lnurl", "withdraw"])
            .expect("endpoint");
        assert_eq!(url.path(), "/v1/wallet/waka_TEST/lnurl/withdraw");
    }

    #[test]
    fn test_wallet_endpoint_requires_key() {
        let client = client(None);
        let err = client.wallet_endpoint(&[]).expect_err("missing key");
        assert!(matches!(err, LnpayError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = LnpayClient::with_config_and_base_url(
            LnpayConfig::new("pak_TEST"),
            ClientConfig::default(),
            "not a url",
        )
        .expect_err("invalid url");
        assert!(matches!(err, LnpayError::UrlParse(_)));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let client = client(Some("waka_TEST"));
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("pak_TEST"));
        assert!(!rendered.contains("waka_TEST"));
    }

    #[test]
    fn test_redacted_path_hides_wallet_key() {
        let client = client(Some("waka_TEST"));

        let url = client.wallet_endpoint(&["transactions"]).expect("endpoint");
        assert_eq!(redacted_path(&url), "/v1/wallet/<redacted>/transactions");

        let url = client.endpoint(&["wallet"]).expect("endpoint");
        assert_eq!(redacted_path(&url), "/v1/wallet");

        let url = client.endpoint(&["lntx", "lntx_82yv"]).expect("endpoint");
        assert_eq!(redacted_path(&url), "/v1/lntx/lntx_82yv");
    }

    #[test]
    fn test_set_keys() {
        let mut client = client(None);
        client.set_secret_key("pak_OTHER");
        client.set_wallet_access_key("waki_OTHER");
        assert_eq!(client.secret_key(), "pak_OTHER");
        assert_eq!(client.wallet_access_key(), Some("waki_OTHER"));
    }
}

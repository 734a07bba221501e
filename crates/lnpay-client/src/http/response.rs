/*
[INPUT]:  Raw reqwest responses from LNPay
[OUTPUT]: Decoded response structs or LnpayError::Api
[POS]:    HTTP layer - shared success/error unwrapping for every endpoint
[UPDATE]: When LNPay changes its error body or content negotiation
*/

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{LnpayError, Result};

/// Unwrap an LNPay response into its typed body, or translate the failure.
///
/// `path` is only used for logging and must already be redacted.
#[async_trait]
pub trait ApiResponse {
    async fn into_api_result<T>(self, path: &str) -> Result<T>
    where
        T: DeserializeOwned;
}

#[async_trait]
impl ApiResponse for Response {
    async fn into_api_result<T>(self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = self.status();
        let body = self.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            let err = LnpayError::from_response_body(status, &body);
            warn!(
                status = status.as_u16(),
                path,
                error = %err,
                "LNPay rejected request"
            );
            return Err(err);
        }

        debug!(status = status.as_u16(), path, bytes = body.len(), "LNPay response");
        Ok(serde_json::from_str(&body)?)
    }
}

/*
[INPUT]:  Paywall destination and price
[OUTPUT]: Paywall record
[POS]:    HTTP layer - paywall endpoints (account scoped, no wallet key)
[UPDATE]: When adding new paywall endpoints
*/

use reqwest::Method;

use crate::http::{LnpayClient, Result};
use crate::types::{CreatePaywallRequest, Paywall};

impl LnpayClient {
    /// Create a paywall link that forwards to `destination_url` once paid
    ///
    /// POST /paywall
    pub async fn create_paywall(&self, req: CreatePaywallRequest) -> Result<Paywall> {
        let url = self.endpoint(&["paywall"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder).await
    }
}

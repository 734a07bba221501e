/*
[INPUT]:  Invoice and payment parameters, wallet access key
[OUTPUT]: Lightning transaction records and payment results
[POS]:    HTTP layer - invoice and payment endpoints
[UPDATE]: When adding new payment endpoints or changing request bodies
*/

use reqwest::Method;

use crate::http::{LnpayClient, Result};
use crate::types::{GenerateInvoiceRequest, KeysendRequest, LnTx, PayInvoiceRequest, PaymentResult};

impl LnpayClient {
    /// Generate a new invoice
    ///
    /// POST /wallet/{wallet_access_key}/invoice
    pub async fn generate_invoice(&self, req: GenerateInvoiceRequest) -> Result<LnTx> {
        let url = self.wallet_endpoint(&["invoice"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder).await
    }

    /// Pay a BOLT11 payment request from the wallet
    ///
    /// POST /wallet/{wallet_access_key}/withdraw
    pub async fn pay_invoice(&self, req: PayInvoiceRequest) -> Result<PaymentResult> {
        let url = self.wallet_endpoint(&["withdraw"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder).await
    }

    /// Pay a node pubkey directly
    ///
    /// POST /wallet/{wallet_access_key}/keysend
    pub async fn keysend(&self, req: KeysendRequest) -> Result<PaymentResult> {
        let url = self.wallet_endpoint(&["keysend"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder).await
    }

    /// Look up a Lightning transaction, usually to check settlement
    ///
    /// GET /lntx/{id}
    pub async fn get_invoice(&self, id: &str) -> Result<LnTx> {
        let url = self.endpoint(&["lntx", id])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }
}

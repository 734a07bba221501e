/*
[INPUT]:  Wallet access key and wallet request parameters
[OUTPUT]: Wallet records, settled transactions, transfers, LNURL withdraw links
[POS]:    HTTP layer - wallet endpoints
[UPDATE]: When adding new wallet endpoints or changing query parameters
*/

use reqwest::Method;
use tracing::{info, warn};

use crate::http::{LnpayClient, Result};
use crate::types::{
    CreateWalletRequest, LnUrlWithdraw, LnUrlWithdrawRequest, NewWallet, Transaction,
    TransactionsQuery, TransferRequest, TransferResult, Wallet,
};

impl LnpayClient {
    /// Create a new wallet and its access keys
    ///
    /// POST /wallet
    ///
    /// On success the client replaces its secret key with the new wallet's
    /// first `Wallet Admin` key, so every later request authenticates as that
    /// wallet. Disable with `LnpayConfig::adopt_wallet_admin_key(false)`.
    pub async fn create_wallet(&mut self, req: CreateWalletRequest) -> Result<NewWallet> {
        let url = self.endpoint(&["wallet"])?;
        let builder = self.request(Method::POST, url).json(&req);
        let wallet: NewWallet = self.send_json(builder).await?;

        if self.adopts_wallet_admin_key() {
            match wallet.admin_key() {
                Some(admin_key) => {
                    info!(wallet_id = %wallet.id, "adopting new wallet admin key");
                    self.set_secret_key(admin_key);
                }
                None => warn!(
                    wallet_id = %wallet.id,
                    "wallet created without an admin key, keeping current secret key"
                ),
            }
        }

        Ok(wallet)
    }

    /// Wallet info, including balance
    ///
    /// GET /wallet/{wallet_access_key}
    pub async fn get_balance(&self) -> Result<Wallet> {
        let url = self.wallet_endpoint(&[])?;
        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// Settled transactions only; unpaid invoices are not listed
    ///
    /// GET /wallet/{wallet_access_key}/transactions?page={page}
    pub async fn get_transactions(&self, query: TransactionsQuery) -> Result<Vec<Transaction>> {
        let url = self.wallet_endpoint(&["transactions"])?;
        let builder = self.request(Method::GET, url).query(&query);
        self.send_json(builder).await
    }

    /// Move sats to another LNPay wallet
    ///
    /// POST /wallet/{wallet_access_key}/transfer
    pub async fn transfer(&self, req: TransferRequest) -> Result<TransferResult> {
        let url = self.wallet_endpoint(&["transfer"])?;
        let builder = self.request(Method::POST, url).json(&req);
        self.send_json(builder).await
    }

    /// Generate an LNURL-withdraw link
    ///
    /// GET /wallet/{wallet_access_key}/lnurl/withdraw?public=&passThru=&memo=&num_satoshis=
    pub async fn ln_url_withdraw(&self, req: LnUrlWithdrawRequest) -> Result<LnUrlWithdraw> {
        let url = self.wallet_endpoint(&["lnurl", "withdraw"])?;
        let builder = self.request(Method::GET, url).query(&req);
        self.send_json(builder).await
    }
}

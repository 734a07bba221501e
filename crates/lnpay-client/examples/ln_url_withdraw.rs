/*
[INPUT]:  Client from examples/common (environment credentials)
[OUTPUT]: LNURL withdraw link
[POS]:    Examples - LNURL withdraw
[UPDATE]: When the LNURL withdraw endpoint changes
*/

mod common;

use anyhow::{Context, Result};
use common::{client_from_env, init_tracing};
use lnpay_client::*;

/// Example: private LNURL-withdraw link good for up to 3 sats
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let client = client_from_env()?;

    let req = LnUrlWithdrawRequest {
        public: Some(false),
        memo: Some("LNURL Withdraw memo".to_string()),
        num_satoshis: Some(3),
        ..Default::default()
    };

    let withdraw = client.ln_url_withdraw(req).await.context("lnurl withdraw")?;
    println!("{}", withdraw.lnurl);
    Ok(())
}

/*
[INPUT]:  Client from examples/common (environment credentials)
[OUTPUT]: Transfer in/out transactions
[POS]:    Examples - wallet-to-wallet transfer
[UPDATE]: When the transfer endpoint changes
*/

mod common;

use anyhow::{Context, Result};
use common::{client_from_env, init_tracing};
use lnpay_client::*;

/// Example: move 1 sat to another LNPay wallet
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let client = client_from_env()?;

    let mut req = TransferRequest::new("w_n743yizWqe43Oz", 1);
    req.memo = Some("Transfer Memo".to_string());
    req.ln_pay_params = Some(serde_json::json!({ "order_id": "100" }));

    let transfer = client.transfer(req).await.context("transfer")?;
    println!("out: {:#?}", transfer.wtx_transfer_out);
    println!("in:  {:#?}", transfer.wtx_transfer_in);
    Ok(())
}

/*
[INPUT]:  Client from examples/common (environment credentials)
[OUTPUT]: Keysend payment result
[POS]:    Examples - keysend payment
[UPDATE]: When the keysend endpoint changes
*/

mod common;

use anyhow::{Context, Result};
use common::{client_from_env, init_tracing};
use lnpay_client::*;

/// Example: send 1 sat to a node pubkey
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let client = client_from_env()?;

    let mut req = KeysendRequest::new(
        "033868c219bdb51a33560d854d500fe7d3898a1ad9e05dd89d0007e11313588500",
        1,
    );
    req.pass_thru = Some(serde_json::json!({ "order_id": "100" }));

    match client.keysend(req).await {
        Ok(result) => println!("{result:#?}"),
        Err(err @ LnpayError::Api { .. }) => println!("LNPay rejected keysend: {err}"),
        Err(err) => return Err(err).context("keysend"),
    }
    Ok(())
}

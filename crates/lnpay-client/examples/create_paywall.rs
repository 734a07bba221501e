/*
[INPUT]:  Client from examples/common (environment credentials)
[OUTPUT]: Created paywall record
[POS]:    Examples - paywall creation
[UPDATE]: When the paywall endpoint changes
*/

mod common;

use anyhow::{Context, Result};
use common::{client_from_env, init_tracing};
use lnpay_client::*;

/// Example: create a paywall in front of a URL
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let client = client_from_env()?;

    let mut req = CreatePaywallRequest::new("https://bigsun.xyz", 100);
    req.memo = Some("This is my memo".to_string());
    req.short_url = Some("bigsun".to_string());

    let paywall = client.create_paywall(req).await.context("create paywall")?;
    println!("{paywall:#?}");
    Ok(())
}

/*
[INPUT]:  LNPAY_SECRET_KEY / LNPAY_WALLET_ACCESS_KEY environment variables, RUST_LOG
[OUTPUT]: Tracing subscriber and configured LnpayClient for the examples
[POS]:    Examples - shared setup
[UPDATE]: When client construction or logging setup changes
*/

use anyhow::{Context, Result};
use lnpay_client::{LnpayClient, LnpayConfig};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("initialize tracing subscriber")
}

pub fn client_from_env() -> Result<LnpayClient> {
    let secret_key = std::env::var("LNPAY_SECRET_KEY").context("LNPAY_SECRET_KEY not set")?;
    let wallet_access_key =
        std::env::var("LNPAY_WALLET_ACCESS_KEY").context("LNPAY_WALLET_ACCESS_KEY not set")?;
    let config = LnpayConfig::new(secret_key).with_wallet_access_key(wallet_access_key);
    Ok(LnpayClient::new(config)?)
}

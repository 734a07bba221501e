/*
[INPUT]:  Client from examples/common (environment credentials)
[OUTPUT]: Generated invoice record
[POS]:    Examples - invoice generation
[UPDATE]: When the invoice endpoint changes
*/

mod common;

use anyhow::{Context, Result};
use common::{client_from_env, init_tracing};
use lnpay_client::*;

/// Example: generate a 100 sat invoice with pass-through data
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let client = client_from_env()?;

    let req = GenerateInvoiceRequest::new(100)
        .pass_thru(serde_json::json!({ "order_id": "100" }))
        .description_hash("MTIzNDY1Nzg5NDU2MTMyNDU2Nzg5NTQ2")
        .memo("Invoice memo.")
        .expiry(DEFAULT_INVOICE_EXPIRY_SECS);

    let invoice = client.generate_invoice(req).await.context("generate invoice")?;
    println!("{invoice:#?}");
    if let Some(payment_request) = &invoice.payment_request {
        println!("Pay: {payment_request}");
    }
    Ok(())
}

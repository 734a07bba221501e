/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public LNPay client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the LNPay Lightning wallet and payments API.
//!
//! Every method maps to one LNPay endpoint and issues exactly one request.
//! Payment semantics (settlement, routing, balance checks) stay with LNPay.

pub mod config;
pub mod http;
pub mod types;

pub use config::LnpayConfig;

// Re-export commonly used types from http
pub use http::{
    API_KEY_HEADER,
    ApiErrorBody,
    ClientConfig,
    DEFAULT_BASE_URL,
    LnpayClient,
    LnpayError,
    Result,
};

// Re-export all types
pub use types::*;

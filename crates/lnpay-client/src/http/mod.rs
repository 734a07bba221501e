/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod invoice;
pub mod paywall;
pub mod response;
pub mod wallet;

pub use error::{ApiErrorBody, LnpayError, Result};
pub use response::ApiResponse;

pub use client::{API_KEY_HEADER, ClientConfig, DEFAULT_BASE_URL, LnpayClient};

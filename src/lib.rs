//! Typed Rust client for the SMS Club HTTP API (`https://im.smsclub.mobi`).
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for the JSON wire format and the `success_request.info` envelope, and a small
//! client layer that issues one authenticated `POST` per operation.
//!
//! ```rust,no_run
//! use smsclub::{ClientConfig, SmsClubClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsclub::SmsClubError> {
//!     let client = SmsClubClient::new(ClientConfig::new("...")?);
//!     let sent = client
//!         .send_sms("Acme", "hello", vec!["+380 50 123 45 67", "380671234567"])
//!         .await?;
//!     let ids = sent.keys().cloned().collect::<Vec<_>>();
//!     let _status = client.sms_status(ids).await?;
//!     let _balance = client.get_balance().await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, ClientConfig, HttpResponse, HttpTransport, SmsClubClient, SmsClubClientBuilder,
    SmsClubError,
};
pub use domain::{
    ApiToken, Balance, DeliveryStatuses, IntegrationId, MAX_BATCH_SIZE, MessageText, OneOrMany,
    PhoneNumber, SendSms, SenderName, SentMessages, Signatures, SmsId, SmsStatus,
    ValidationError,
};

//! Typed Rust client for the e-amarseba bulk-SMS HTTP API.
//!
//! The crate has four layers: a domain layer of strong types, a transport
//! layer for the vendor's JSON wire format, a small client layer that runs the
//! HTTP exchange, and a render layer that formats outcomes for a terminal.
//!
//! ```rust,no_run
//! use amarseba::{AmarsebaClient, Contact, Credentials, MessageText, SendSms};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AmarsebaClient::new(Credentials::new("app-key", "app-secret"));
//!     let contacts = Contact::parse_list("01712345678,01898765432")?;
//!     let request = SendSms::validated(contacts, MessageText::new("hello")?)?;
//!     let response = client.send_sms(&request).await?.into_vendor_result()?;
//!     for item in response.data.unwrap_or_default() {
//!         println!("{:?} -> {:?}", item.contact, item.track_id);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod render;
mod transport;

pub use client::{
    AmarsebaClient, AmarsebaClientBuilder, AmarsebaError, BuildError, Credentials, FailureReason,
};
pub use domain::{
    ApiKey, ApiSecret, Contact, MessageText, SendResultItem, SendSms, SendSmsResponse, TrackId,
    TrackResultData, TrackSms, TrackSmsResponse, ValidationError, VendorResponse,
};

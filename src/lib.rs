//! Typed Rust client for the Mandrill transactional-email HTTP API.
//!
//! One request primitive ([`MandrillClient::call`]) performs a synchronous
//! JSON POST and classifies failures into [`MandrillError`], keyed by the
//! server-supplied error name. Resource wrappers ([`Rejects`], [`Users`])
//! marshal per-endpoint parameters over it.
//!
//! The API key is resolved from an explicit argument, the `MANDRILL_APIKEY`
//! environment variable, or the well-known key files (`~/.mandrill.key`,
//! `/etc/mandrill.key`), in that order.
//!
//! ```rust,no_run
//! use mandrill::MandrillClient;
//!
//! fn main() -> Result<(), mandrill::MandrillError> {
//!     let client = MandrillClient::from_env()?;
//!     println!("{}", client.users().ping()?);
//!     for entry in client.rejects().list(None)? {
//!         println!("{}: {}", entry.email, entry.reason);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
mod config;
pub mod domain;
pub mod resources;
mod transport;

pub use client::{
    DebugSink, LogSink, MandrillClient, MandrillClientBuilder, MandrillError, StderrSink,
};
pub use config::ENV_API_KEY;
pub use domain::{
    ApiError, ApiErrorKind, ApiKey, RejectDeleted, RejectEntry, SenderInfo, SendingStats,
    UserInfo, ValidationError,
};
pub use resources::{Rejects, Users};

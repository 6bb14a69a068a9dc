//! # pocket_api_client
//!
//! Typed HTTP client for the Pocket Joe REST surface, plus the state machine
//! behind the single greeting form.

pub mod client;
pub mod config;
pub mod error;
pub mod form;

pub use client::{ApiClient, HelloApi};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError};
pub use form::{FormPhase, HelloForm};
pub use pocket_core::Greeting;

//! # PCV API client
//!
//! HTTP consumer of the record service. The service owns storage, content
//! validation and identifier generation; this crate only moves typed values
//! across the wire and maps failures onto [`ApiError`].

pub mod client;
pub mod config;
pub mod error;

pub use client::RecordsClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

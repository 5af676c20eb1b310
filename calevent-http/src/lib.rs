//! HTTP transport for calevent.
//!
//! `HttpConnection` implements `calevent_core::Connection` on top of
//! reqwest, and `ClientConfig` holds the API root and credentials.

pub mod config;
pub mod connection;
pub mod error;

pub use config::ClientConfig;
pub use connection::HttpConnection;
pub use error::{ClientError, ClientResult};

//! HTTP module containing the transport seam and its `reqwest` implementation.
//!
//! # Overview
//!
//! The HTTP module is organized into three components:
//!
//! - [`transport`] - The [`Transport`] trait the fetcher drives, step by step
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`reqwest_transport`] - [`ReqwestTransport`], the production transport
//!
//! # Examples
//!
//! ## Creating a Transport
//!
//! ```rust
//! use verifetch::http::{HttpClientConfig, ReqwestTransport};
//! use reqwest::Proxy;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     proxy: Some(Proxy::http("http://proxy.example.com:8080")?),
//!     connect_timeout: None,
//! };
//! let transport = ReqwestTransport::with_config(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod reqwest_transport;
pub mod transport;

pub use client::{create_http_client, HttpClientConfig};
pub use reqwest_transport::{ReqwestContext, ReqwestTransport};
pub use transport::{ReceiveStatus, SizeState, Transport, TransportResult};

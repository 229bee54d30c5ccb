//! HTTP client setup and middleware configuration.
//!
//! This module builds the `reqwest` client used by
//! [`ReqwestTransport`](crate::http::ReqwestTransport). Redirects are disabled
//! on the client because the fetcher follows them itself, one counted hop at
//! a time.
//!
//! # Examples
//!
//! ```rust
//! use verifetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     proxy: None,
//!     connect_timeout: Some(Duration::from_secs(10)),
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{redirect::Policy, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Optional bound on establishing a connection.
    pub connect_timeout: Option<Duration>,
}

/// Creates an HTTP client with middleware configuration.
///
/// The client never follows redirects on its own and traces every request
/// through [`TracingMiddleware`].
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder().redirect(Policy::none());

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(timeout) = config.connect_timeout {
        inner_client_builder = inner_client_builder.connect_timeout(timeout);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert!(config.proxy.is_none());
        assert!(config.connect_timeout.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let client = create_http_client(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_timeout() {
        let config = HttpClientConfig {
            proxy: None,
            connect_timeout: Some(Duration::from_secs(5)),
        };
        assert!(create_http_client(config).is_ok());
    }
}

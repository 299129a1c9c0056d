//! HTTP fetcher implementation
//!
//! This module wraps the HTTP transport behind the narrow contract the
//! crawl engine needs: a URL in, a status code and body out, or a
//! transport failure. Redirect following and timeouts live here, at the
//! transport boundary; the crawl loop never times out a fetch itself.

use reqwest::Client;
use std::time::Duration;

/// Result of a single fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered; the status may be any class
    Response {
        /// HTTP status code
        status_code: u16,

        /// Response body decoded as text
        body: String,
    },

    /// No usable response at all (connection, DNS, timeout, body read)
    TransportError {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// True iff the response carries a success-class (2xx) status
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Response { status_code, .. } if (200..300).contains(status_code))
    }
}

/// Builds the HTTP client used for every request of one crawl.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("asset-atlas/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, classifying the outcome for the crawl loop.
///
/// Every answered request becomes a [`FetchOutcome::Response`], whatever
/// its status class; only the absence of a response (connection refused,
/// DNS failure, timeout, body read error) is a transport error.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status_code = response.status().as_u16();

            match response.text().await {
                Ok(body) => FetchOutcome::Response { status_code, body },
                Err(e) => FetchOutcome::TransportError {
                    error: format!("failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            // Classify error
            let error = if e.is_timeout() {
                format!("request timeout: {}", e)
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                e.to_string()
            };

            FetchOutcome::TransportError { error }
        }
    }
}

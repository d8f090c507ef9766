//! HTTP transport
//!
//! [`StatsTransport`] is the seam between endpoints and the network.
//! [`HttpClient`] implements it with a single GET per call; there are no
//! retries, no rate limiting and no authentication. Dropping the returned
//! future cancels the request.

mod client;
mod transport;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use transport::{RawResponse, StatsTransport};

#[cfg(test)]
mod tests;

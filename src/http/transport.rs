//! Transport seam between endpoint bindings and the network

use crate::decode::StatsEnvelope;
use crate::error::Result;
use crate::params::QueryParams;
use async_trait::async_trait;

/// A decoded response before any result set is mapped
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status_code: u16,
    pub url: String,
    pub envelope: StatsEnvelope,
}

/// Something that can fetch a stats endpoint
///
/// [`HttpClient`](super::HttpClient) is the network implementation; tests
/// substitute canned responses.
#[async_trait]
pub trait StatsTransport: Send + Sync {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse>;
}

#[async_trait]
impl<T: StatsTransport + ?Sized> StatsTransport for &T {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse> {
        (**self).fetch(endpoint, params).await
    }
}

#[async_trait]
impl<T: StatsTransport + ?Sized> StatsTransport for std::sync::Arc<T> {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse> {
        (**self).fetch(endpoint, params).await
    }
}

//! HTTP transport backed by reqwest

use crate::{
    error::TransportError,
    interfaces::{Method, RawResponse, RequestInit, Transport},
};
use async_trait::async_trait;
use tracing::debug;

const USER_AGENT: &str = concat!("archive-commands/", env!("CARGO_PKG_VERSION"));

/// Sends requests with a shared `reqwest::Client`.
///
/// No timeout is configured here; pass a client built with one through
/// [`HttpTransport::with_client`] when the host wants it.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, url: &str, init: RequestInit) -> Result<RawResponse, TransportError> {
        let method = match init.method {
            Method::Post => reqwest::Method::POST,
        };

        let mut request = self.client.request(method, url);
        for (name, value) in &init.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = init.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(TransportError::from_source)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from_source)?;
        debug!("{} -> HTTP {} ({} bytes)", url, status, body.len());

        Ok(RawResponse { status, body })
    }
}

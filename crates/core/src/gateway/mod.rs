//! Remote call gateway
//!
//! Sends archive requests to the service and folds the outcome into the
//! crate's error taxonomy: connection faults become `NetworkError`,
//! non-2xx answers become `ResponseError`, everything else is returned as an
//! [`ArchiveOperationResult`] for the controller to judge.

use crate::{
    error::{Error, Result},
    interfaces::{RawResponse, RequestInit, Transport},
    types::{ArchiveOperationRequest, ArchiveOperationResult, OperationKind},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Path segment every archive endpoint lives under
pub const SERVICE_PREFIX: &str = "jupyterlab-zip";

pub struct ArchiveGateway {
    base_url: String,
    token: Option<String>,
    transport: Arc<dyn Transport>,
}

impl ArchiveGateway {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            transport,
        }
    }

    /// Authenticate every call with `Authorization: token <token>`
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `<base>/jupyterlab-zip/<op>`
    pub fn endpoint(&self, kind: OperationKind) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            SERVICE_PREFIX,
            kind.endpoint()
        )
    }

    /// One round trip to the service, never retried
    pub async fn send(
        &self,
        kind: OperationKind,
        payload: &ArchiveOperationRequest,
    ) -> Result<ArchiveOperationResult> {
        let url = self.endpoint(kind);
        let mut init = RequestInit::post(serde_json::to_string(payload)?)
            .with_header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            init = init.with_header("Authorization", format!("token {token}"));
        }

        debug!("POST {}", url);
        let response = self
            .transport
            .request(&url, init)
            .await
            .map_err(Error::NetworkError)?;
        debug!("{} answered HTTP {}", url, response.status);

        let data = decode_body(&response);

        if !response.is_ok() {
            return Err(Error::ResponseError {
                message: response_message(&data, &response),
                response,
            });
        }

        Ok(ArchiveOperationResult::from_body(&data))
    }
}

/// Empty bodies decode to `Null`; bodies that are not JSON stay raw text
fn decode_body(response: &RawResponse) -> Value {
    if response.body.is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&response.body) {
        Ok(value) => value,
        Err(_) => {
            info!("Not a JSON response body (HTTP {}): {}", response.status, response.body);
            Value::String(response.body.clone())
        }
    }
}

/// The body's `message` field, or the whole body
fn response_message(data: &Value, response: &RawResponse) -> String {
    match data.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => response.body.clone(),
    }
}

//! JSON request sender shared by every credential service call.
//!
//! One call, one outbound POST. The sender never retries: transport failures
//! and unacceptable statuses are returned to the caller as-is.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;

use crate::error::VcServiceError;

/// Sends JSON payloads over a shared HTTP client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct JsonSender {
    http: reqwest::Client,
}

impl JsonSender {
    /// Build a sender whose requests give up after `timeout`.
    ///
    /// The timeout covers the whole exchange: connect, send, and reading the
    /// response body.
    pub fn new(timeout: Duration) -> Result<Self, VcServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VcServiceError::Transport {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http })
    }

    /// Serialize `payload`, POST it to `url` as `application/json`, and return
    /// the raw response body.
    ///
    /// Only 200 and 201 count as success. Any other status, including other
    /// 2xx codes, yields [`VcServiceError::HttpStatus`] carrying the body. The
    /// body of a successful response is returned unparsed.
    pub async fn send<T>(&self, url: &str, payload: &T) -> Result<String, VcServiceError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(|e| VcServiceError::Serialization {
            endpoint: url.to_string(),
            source: e,
        })?;

        tracing::debug!(url, bytes = body.len(), "sending JSON request");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|e| VcServiceError::Transport {
                endpoint: url.to_string(),
                source: e,
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| VcServiceError::Transport {
            endpoint: url.to_string(),
            source: e,
        })?;

        if !is_accepted(status) {
            tracing::warn!(url, status = status.as_u16(), "credential service rejected request");
            return Err(VcServiceError::HttpStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(url, status = status.as_u16(), "request accepted");
        Ok(text)
    }
}

fn is_accepted(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::CREATED)
}

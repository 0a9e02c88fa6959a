//! Credential service client error types.

/// Errors from credential service calls.
#[derive(Debug, thiserror::Error)]
pub enum VcServiceError {
    /// The request never completed: DNS failure, connection refused,
    /// timeout, or the response body could not be read.
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The service answered with a status other than 200 or 201.
    #[error("{endpoint} returned {status}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The payload could not be encoded as JSON. No request was sent.
    #[error("failed to serialize request for {endpoint}: {source}")]
    Serialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl VcServiceError {
    /// Raw response body carried by the error, if the service answered.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status code carried by the error, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request was abandoned because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

//! Typed client for the verifier API.
//!
//! Default base URL: `http://localhost:7003`

use serde::Serialize;

use crate::config::endpoint_url;
use crate::error::VcServiceError;
use crate::fixtures::{RequestedCredential, VerificationFixture};
use crate::sender::JsonSender;

/// Path of the presentation verification endpoint.
pub const VERIFY_PATH: &str = "/openid4vc/verify";

/// Body of `POST /openid4vc/verify`. The service expects snake_case here.
#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub request_credentials: &'a [RequestedCredential],
}

impl<'a> From<&'a VerificationFixture> for VerifyRequest<'a> {
    fn from(f: &'a VerificationFixture) -> Self {
        Self {
            request_credentials: &f.request_credentials,
        }
    }
}

/// Client for the verifier API.
#[derive(Debug, Clone)]
pub struct VerifierClient {
    sender: JsonSender,
    base_url: url::Url,
}

impl VerifierClient {
    pub(crate) fn new(sender: JsonSender, base_url: url::Url) -> Self {
        Self { sender, base_url }
    }

    /// Start a credential verification session.
    ///
    /// Calls `POST {base_url}/openid4vc/verify` and returns the raw response,
    /// typically an authorization request URL for the holder's wallet.
    pub async fn verify(&self, fixture: &VerificationFixture) -> Result<String, VcServiceError> {
        let url = endpoint_url(&self.base_url, VERIFY_PATH);
        tracing::debug!(
            requested = fixture.request_credentials.len(),
            "requesting credential verification"
        );
        self.sender.send(&url, &VerifyRequest::from(fixture)).await
    }
}

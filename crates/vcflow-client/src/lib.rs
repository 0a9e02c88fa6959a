//! # vcflow-client -- Typed Rust client for a verifiable-credentials service
//!
//! Provides typed access to the three calls of the issue-and-verify flow:
//! - **Onboard issuer** via `POST /onboard/issuer` on the issuer API
//! - **Issue credential** via `POST /openid4vc/jwt/issue` on the issuer API
//! - **Verify credential** via `POST /openid4vc/verify` on the verifier API
//!
//! ## Request Contract
//!
//! Every call goes through [`JsonSender`]: the payload is serialized to JSON,
//! posted with `Content-Type: application/json`, and the raw response body is
//! returned for status 200 or 201. Anything else is a [`VcServiceError`].
//! There are no retries.
//!
//! The protocol semantics (OpenID4VC, DID resolution, key custody, credential
//! schemas) belong to the remote service. This crate only moves JSON.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod issuer;
pub mod sender;
pub mod verifier;

pub use config::VcServiceConfig;
pub use error::VcServiceError;
pub use fixtures::Fixtures;
pub use sender::JsonSender;

use std::time::Duration;

/// Top-level credential service client. Holds sub-clients for the issuer
/// and verifier APIs plus the fixtures used to build each payload.
#[derive(Debug, Clone)]
pub struct VcClient {
    issuer: issuer::IssuerClient,
    verifier: verifier::VerifierClient,
    fixtures: Fixtures,
}

impl VcClient {
    /// Create a new client from configuration and payload fixtures.
    pub fn new(config: VcServiceConfig, fixtures: Fixtures) -> Result<Self, VcServiceError> {
        if config.timeout_secs == 0 {
            return Err(config::ConfigError::InvalidTimeout(
                "timeout_secs".into(),
                config.timeout_secs.to_string(),
            )
            .into());
        }

        let sender = JsonSender::new(Duration::from_secs(config.timeout_secs))?;

        Ok(Self {
            issuer: issuer::IssuerClient::new(sender.clone(), config.issuer_api_url),
            verifier: verifier::VerifierClient::new(sender, config.verifier_api_url),
            fixtures,
        })
    }

    /// Onboard the issuer using the configured onboarding fixture.
    pub async fn onboard_issuer(&self) -> Result<String, VcServiceError> {
        self.issuer.onboard(&self.fixtures.onboarding).await
    }

    /// Issue a credential using the configured issuance fixture.
    pub async fn issue_credential(&self) -> Result<String, VcServiceError> {
        self.issuer.issue_jwt(&self.fixtures.issuance).await
    }

    /// Request verification using the configured verification fixture.
    pub async fn verify_credential(&self) -> Result<String, VcServiceError> {
        self.verifier.verify(&self.fixtures.verification).await
    }
}

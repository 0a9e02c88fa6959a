//! Typed client for the issuer API: issuer onboarding and JWT credential
//! issuance.
//!
//! Default base URL: `http://localhost:7002`

use serde::Serialize;

use crate::config::endpoint_url;
use crate::error::VcServiceError;
use crate::fixtures::{IssuanceFixture, OnboardingFixture, SigningJwk};
use crate::sender::JsonSender;

/// Path of the issuer onboarding endpoint.
pub const ONBOARD_ISSUER_PATH: &str = "/onboard/issuer";

/// Path of the JWT credential issuance endpoint.
pub const ISSUE_JWT_PATH: &str = "/openid4vc/jwt/issue";

// -- Wire types ---------------------------------------------------------------

/// Body of `POST /onboard/issuer`.
#[derive(Debug, Serialize)]
pub struct OnboardIssuerRequest<'a> {
    pub key: KeyGeneration<'a>,
    pub did: DidCreation<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGeneration<'a> {
    pub backend: &'a str,
    pub key_type: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DidCreation<'a> {
    pub method: &'a str,
}

impl<'a> From<&'a OnboardingFixture> for OnboardIssuerRequest<'a> {
    fn from(f: &'a OnboardingFixture) -> Self {
        Self {
            key: KeyGeneration {
                backend: &f.key_backend,
                key_type: &f.key_type,
            },
            did: DidCreation {
                method: &f.did_method,
            },
        }
    }
}

/// Body of `POST /openid4vc/jwt/issue`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCredentialRequest<'a> {
    pub issuer_key: IssuerKey<'a>,
    pub credential_configuration_id: &'a str,
    pub credential_data: &'a serde_json::Value,
    pub mapping: &'a serde_json::Value,
    pub authentication_method: &'a str,
    pub issuer_did: &'a str,
    pub standard_version: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IssuerKey<'a> {
    #[serde(rename = "type")]
    pub key_type: &'a str,
    pub jwk: &'a SigningJwk,
}

impl<'a> From<&'a IssuanceFixture> for IssueCredentialRequest<'a> {
    fn from(f: &'a IssuanceFixture) -> Self {
        Self {
            issuer_key: IssuerKey {
                key_type: &f.issuer_key_type,
                jwk: &f.issuer_key,
            },
            credential_configuration_id: &f.credential_configuration_id,
            credential_data: &f.credential_data,
            mapping: &f.mapping,
            authentication_method: &f.authentication_method,
            issuer_did: &f.issuer_did,
            standard_version: &f.standard_version,
        }
    }
}

// -- Client -------------------------------------------------------------------

/// Client for the issuer API.
#[derive(Debug, Clone)]
pub struct IssuerClient {
    sender: JsonSender,
    base_url: url::Url,
}

impl IssuerClient {
    pub(crate) fn new(sender: JsonSender, base_url: url::Url) -> Self {
        Self { sender, base_url }
    }

    /// Register an issuer key and DID.
    ///
    /// Calls `POST {base_url}/onboard/issuer` and returns the raw response.
    pub async fn onboard(&self, fixture: &OnboardingFixture) -> Result<String, VcServiceError> {
        let url = endpoint_url(&self.base_url, ONBOARD_ISSUER_PATH);
        tracing::debug!(
            key_type = %fixture.key_type,
            did_method = %fixture.did_method,
            "onboarding issuer"
        );
        self.sender
            .send(&url, &OnboardIssuerRequest::from(fixture))
            .await
    }

    /// Issue a JWT verifiable credential.
    ///
    /// Calls `POST {base_url}/openid4vc/jwt/issue` and returns the raw
    /// response, typically a credential offer URI.
    pub async fn issue_jwt(&self, fixture: &IssuanceFixture) -> Result<String, VcServiceError> {
        let url = endpoint_url(&self.base_url, ISSUE_JWT_PATH);
        tracing::debug!(
            configuration = %fixture.credential_configuration_id,
            issuer_did = %fixture.issuer_did,
            key_id = %fixture.issuer_key.kid,
            "issuing credential"
        );
        self.sender
            .send(&url, &IssueCredentialRequest::from(fixture))
            .await
    }
}

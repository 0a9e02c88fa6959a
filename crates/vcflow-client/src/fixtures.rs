//! Request fixtures for the demonstration flow.
//!
//! Every literal that ends up in the onboarding, issuance, and verification
//! payloads lives here. [`Fixtures::default`] reproduces the sample values the
//! credential service ships with: a throwaway Ed25519 signing key, a sample
//! `UniversityDegreeCredential`, and an `OpenBadgeCredential` presentation
//! request. These are test fixtures, not production secrets.
//!
//! A fixture file is a JSON document with the same shape as [`Fixtures`].
//! Fields omitted from the file keep their defaults, so a file may override
//! only the signing key and issuer DID, for example:
//!
//! ```json
//! {
//!   "issuance": {
//!     "issuerKey": { "kty": "OKP", "crv": "Ed25519", "d": "…", "x": "…", "kid": "…" },
//!     "issuerDid": "did:key:z6Mk…"
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::ConfigError;

/// All payload fixtures for one run of the flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixtures {
    pub onboarding: OnboardingFixture,
    pub issuance: IssuanceFixture,
    pub verification: VerificationFixture,
}

impl Fixtures {
    /// Load fixtures from a JSON file, filling omitted fields with defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FixtureRead(display.clone(), e.to_string()))?;
        Self::from_json(&raw).map_err(|e| match e {
            ConfigError::FixtureParse(_, msg) => ConfigError::FixtureParse(display, msg),
            other => other,
        })
    }

    /// Parse fixtures from a JSON string, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw)
            .map_err(|e| ConfigError::FixtureParse("<inline>".to_string(), e.to_string()))
    }
}

// -- Onboarding ---------------------------------------------------------------

/// Key and DID parameters for issuer onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingFixture {
    /// Key storage backend on the service side.
    pub key_backend: String,
    pub key_type: String,
    pub did_method: String,
}

impl Default for OnboardingFixture {
    fn default() -> Self {
        Self {
            key_backend: "jwk".into(),
            key_type: "Ed25519".into(),
            did_method: "jwk".into(),
        }
    }
}

// -- Issuance -----------------------------------------------------------------

/// Private signing key in JWK form (OKP / Ed25519).
///
/// The private component `d` is redacted from `Debug` output and the whole
/// key is wiped from memory on drop. Members omitted from a fixture file fall
/// back to the sample key one by one.
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SigningJwk {
    #[serde(default = "sample_jwk::kty")]
    pub kty: String,
    #[serde(default = "sample_jwk::d")]
    pub d: String,
    #[serde(default = "sample_jwk::crv")]
    pub crv: String,
    #[serde(default = "sample_jwk::kid")]
    pub kid: String,
    #[serde(default = "sample_jwk::x")]
    pub x: String,
}

impl std::fmt::Debug for SigningJwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningJwk")
            .field("kty", &self.kty)
            .field("d", &"[REDACTED]")
            .field("crv", &self.crv)
            .field("kid", &self.kid)
            .field("x", &self.x)
            .finish()
    }
}

impl Default for SigningJwk {
    fn default() -> Self {
        Self {
            kty: sample_jwk::kty(),
            d: sample_jwk::d(),
            crv: sample_jwk::crv(),
            kid: sample_jwk::kid(),
            x: sample_jwk::x(),
        }
    }
}

// Throwaway Ed25519 key published with the service's examples.
mod sample_jwk {
    pub(super) fn kty() -> String {
        "OKP".into()
    }
    pub(super) fn d() -> String {
        "mDhpwaH6JYSrD2Bq7Cs-pzmsjlLj4EOhxyI-9DM1mFI".into()
    }
    pub(super) fn crv() -> String {
        "Ed25519".into()
    }
    pub(super) fn kid() -> String {
        "Vzx7l5fh56F3Pf9aR3DECU5BwfrY6ZJe05aiWYWzan8".into()
    }
    pub(super) fn x() -> String {
        "T3T4-u1Xz3vAV2JwPNxWfs4pik_JLiArz_WTCvrCFUM".into()
    }
}

/// Everything the issuer needs to sign and deliver one JWT credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssuanceFixture {
    /// Key representation tag sent alongside the JWK.
    pub issuer_key_type: String,
    pub issuer_key: SigningJwk,
    pub issuer_did: String,
    pub credential_configuration_id: String,
    /// Credential body. Passed through to the service untouched.
    pub credential_data: serde_json::Value,
    /// Field templates the service expands at issuance time
    /// (`<uuid>`, `<issuerDid>`, `<timestamp>`, ...).
    pub mapping: serde_json::Value,
    pub authentication_method: String,
    pub standard_version: String,
}

impl Default for IssuanceFixture {
    fn default() -> Self {
        Self {
            issuer_key_type: "jwk".into(),
            issuer_key: SigningJwk::default(),
            issuer_did: "did:key:z6MkjoRhq1jSNJdLiruSXrFFxagqrztZaXHqHGUTKJbcNywp".into(),
            credential_configuration_id: "UniversityDegree_jwt_vc_json".into(),
            credential_data: json!({
                "@context": [
                    "https://www.w3.org/2018/credentials/v1",
                    "https://www.w3.org/2018/credentials/examples/v1"
                ],
                "id": "http://example.gov/credentials/3732",
                "type": ["VerifiableCredential", "UniversityDegreeCredential"],
                "issuer": { "id": "did:web:vc.transmute.world" },
                "issuanceDate": "2020-03-10T04:24:12.164Z",
                "credentialSubject": {
                    "id": "did:example:ebfeb1f712ebc6f1c276e12ec21",
                    "degree": {
                        "type": "BachelorDegree",
                        "name": "Bachelor of Science and Arts"
                    }
                }
            }),
            mapping: json!({
                "id": "<uuid>",
                "issuer": { "id": "<issuerDid>" },
                "credentialSubject": { "id": "<subjectDid>" },
                "issuanceDate": "<timestamp>",
                "expirationDate": "<timestamp-in:365d>"
            }),
            authentication_method: "PRE_AUTHORIZED".into(),
            standard_version: "DRAFT13".into(),
        }
    }
}

// -- Verification -------------------------------------------------------------

/// One credential the verifier asks the holder to present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedCredential {
    pub format: String,
    #[serde(rename = "type")]
    pub credential_type: String,
}

/// Presentation request parameters for the verifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationFixture {
    pub request_credentials: Vec<RequestedCredential>,
}

impl Default for VerificationFixture {
    fn default() -> Self {
        Self {
            request_credentials: vec![RequestedCredential {
                format: "jwt_vc_json".into(),
                credential_type: "OpenBadgeCredential".into(),
            }],
        }
    }
}

//! Contract tests for VcClient against the issuer and verifier APIs.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/onboard/issuer` | `onboard_issuer_*` |
//! | POST   | `/openid4vc/jwt/issue` | `issue_credential_*` |
//! | POST   | `/openid4vc/verify` | `verify_credential_*` |

use vcflow_client::{Fixtures, VcClient, VcServiceConfig, VcServiceError};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(issuer: &MockServer, verifier: &MockServer, fixtures: Fixtures) -> VcClient {
    let config = VcServiceConfig {
        issuer_api_url: issuer.uri().parse().unwrap(),
        verifier_api_url: verifier.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    VcClient::new(config, fixtures).unwrap()
}

// ── POST /onboard/issuer ─────────────────────────────────────────────

#[tokio::test]
async fn onboard_issuer_posts_default_payload() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/onboard/issuer"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "key": { "backend": "jwk", "keyType": "Ed25519" },
            "did": { "method": "jwk" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"issuerDid":"did:jwk:abc"}"#))
        .expect(1)
        .mount(&issuer)
        .await;

    let client = test_client(&issuer, &verifier, Fixtures::default());
    let body = client.onboard_issuer().await.unwrap();
    assert_eq!(body, r#"{"issuerDid":"did:jwk:abc"}"#);
}

#[tokio::test]
async fn onboard_issuer_surfaces_rejection() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/onboard/issuer"))
        .respond_with(ResponseTemplate::new(400).set_body_string("unsupported key type"))
        .mount(&issuer)
        .await;

    let client = test_client(&issuer, &verifier, Fixtures::default());
    match client.onboard_issuer().await.unwrap_err() {
        VcServiceError::HttpStatus { endpoint, status, body } => {
            assert!(endpoint.ends_with("/onboard/issuer"), "{endpoint}");
            assert_eq!(status, 400);
            assert_eq!(body, "unsupported key type");
        }
        other => panic!("expected HttpStatus, got: {other:?}"),
    }
}

// ── POST /openid4vc/jwt/issue ────────────────────────────────────────

#[tokio::test]
async fn issue_credential_posts_signing_key_and_credential() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openid4vc/jwt/issue"))
        .and(body_partial_json(serde_json::json!({
            "issuerKey": { "type": "jwk", "jwk": { "kty": "OKP", "crv": "Ed25519" } },
            "credentialConfigurationId": "UniversityDegree_jwt_vc_json",
            "credentialData": { "type": ["VerifiableCredential", "UniversityDegreeCredential"] },
            "authenticationMethod": "PRE_AUTHORIZED",
            "standardVersion": "DRAFT13"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("openid-credential-offer://?credential_offer_uri=x"),
        )
        .expect(1)
        .mount(&issuer)
        .await;

    let client = test_client(&issuer, &verifier, Fixtures::default());
    let offer = client.issue_credential().await.unwrap();
    assert!(offer.starts_with("openid-credential-offer://"));
}

#[tokio::test]
async fn issue_credential_uses_overridden_fixtures() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    let fixtures = Fixtures::from_json(
        r#"{"issuance": {"issuerDid": "did:key:z6MkCustom", "issuerKey": {"kid": "custom-kid"}}}"#,
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/openid4vc/jwt/issue"))
        .and(body_partial_json(serde_json::json!({
            "issuerDid": "did:key:z6MkCustom",
            "issuerKey": { "jwk": { "kid": "custom-kid" } }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("offer"))
        .expect(1)
        .mount(&issuer)
        .await;

    let client = test_client(&issuer, &verifier, fixtures);
    assert_eq!(client.issue_credential().await.unwrap(), "offer");
}

// ── POST /openid4vc/verify ───────────────────────────────────────────

#[tokio::test]
async fn verify_credential_goes_to_verifier_api() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&issuer)
        .await;

    Mock::given(method("POST"))
        .and(path("/openid4vc/verify"))
        .and(body_json(serde_json::json!({
            "request_credentials": [
                { "format": "jwt_vc_json", "type": "OpenBadgeCredential" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("openid4vp://authorize?x=1"))
        .expect(1)
        .mount(&verifier)
        .await;

    let client = test_client(&issuer, &verifier, Fixtures::default());
    assert_eq!(
        client.verify_credential().await.unwrap(),
        "openid4vp://authorize?x=1"
    );
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let issuer = MockServer::start().await;
    let verifier = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/walt/openid4vc/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&verifier)
        .await;

    let config = VcServiceConfig {
        issuer_api_url: issuer.uri().parse().unwrap(),
        verifier_api_url: format!("{}/walt/", verifier.uri()).parse().unwrap(),
        timeout_secs: 5,
    };
    let client = VcClient::new(config, Fixtures::default()).unwrap();
    assert_eq!(client.verify_credential().await.unwrap(), "ok");
}

#[test]
fn zero_timeout_is_rejected() {
    let mut config = VcServiceConfig::local_mock(19002, 19003).unwrap();
    config.timeout_secs = 0;
    let err = VcClient::new(config, Fixtures::default()).unwrap_err();
    assert!(matches!(err, VcServiceError::Config(_)), "got: {err:?}");
}

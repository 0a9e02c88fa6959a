//! Credential service client configuration.
//!
//! Configures base URLs for the issuer and verifier APIs and the per-request
//! timeout. Defaults point to a local deployment of the service. Override via
//! environment variables or explicit construction for staging/testing.

use url::Url;

/// Default base URL of the issuer API.
pub const DEFAULT_ISSUER_API_URL: &str = "http://localhost:7002";

/// Default base URL of the verifier API.
pub const DEFAULT_VERIFIER_API_URL: &str = "http://localhost:7003";

/// Default time to wait for a response, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the credential service.
#[derive(Debug, Clone)]
pub struct VcServiceConfig {
    /// Base URL for the issuer API (onboarding and issuance).
    /// Default: <http://localhost:7002>
    pub issuer_api_url: Url,
    /// Base URL for the verifier API.
    /// Default: <http://localhost:7003>
    pub verifier_api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl VcServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `VCFLOW_ISSUER_API_URL` (default: `http://localhost:7002`)
    /// - `VCFLOW_VERIFIER_API_URL` (default: `http://localhost:7003`)
    /// - `VCFLOW_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Absent variables fall back to their defaults; present but malformed
    /// values are rejected rather than silently ignored.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("VCFLOW_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout("VCFLOW_TIMEOUT_SECS".into(), raw)),
            },
        };

        Ok(Self {
            issuer_api_url: lookup_url(&lookup, "VCFLOW_ISSUER_API_URL", DEFAULT_ISSUER_API_URL)?,
            verifier_api_url: lookup_url(
                &lookup,
                "VCFLOW_VERIFIER_API_URL",
                DEFAULT_VERIFIER_API_URL,
            )?,
            timeout_secs,
        })
    }

    /// Create a configuration pointing to local mock servers (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(issuer_port: u16, verifier_port: u16) -> Result<Self, ConfigError> {
        let make_url = |port: u16| -> Result<Url, ConfigError> {
            Url::parse(&format!("http://127.0.0.1:{port}"))
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))
        };
        Ok(Self {
            issuer_api_url: make_url(issuer_port)?,
            verifier_api_url: make_url(verifier_port)?,
            timeout_secs: 2,
        })
    }
}

fn lookup_url<F>(lookup: &F, var: &str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    let url =
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))?;
    // Endpoint paths are appended to the base, which leaves no room for these.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(
            var.to_string(),
            "base URL must not carry a query or fragment".to_string(),
        ));
    }
    Ok(url)
}

/// Join an endpoint path onto a base URL.
///
/// Keeps any path prefix on the base and tolerates a trailing slash on either
/// side, so `http://host/api/` + `/onboard/issuer` and `http://host/api` +
/// `onboard/issuer` both yield `http://host/api/onboard/issuer`. Any query or
/// fragment on the base is dropped.
pub fn endpoint_url(base: &Url, path: &str) -> String {
    let mut base = base.clone();
    base.set_query(None);
    base.set_fragment(None);
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout for {0}: {1:?} (expected a positive number of seconds)")]
    InvalidTimeout(String, String),
    #[error("cannot read fixtures from {0}: {1}")]
    FixtureRead(String, String),
    #[error("malformed fixtures in {0}: {1}")]
    FixtureParse(String, String),
}
